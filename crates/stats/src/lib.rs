//! NaN-aware statistical helpers for the IHA engine.
//!
//! Missing discharge values are carried as `f64::NAN`. The `nan_*` functions
//! ignore them; the plain functions expect clean input. An empty input never
//! panics: every helper returns `NaN` instead, which callers surface as an
//! undefined per-year statistic.

use std::cmp::Ordering;

/// Non-missing values of `data`, in their original order.
pub fn valid_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Non-missing values of `data`, sorted ascending.
pub fn sorted_valid(data: &[f64]) -> Vec<f64> {
    let mut sorted = valid_values(data);
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Mean of the non-missing values. Returns NaN if there are none.
pub fn nan_mean(data: &[f64]) -> f64 {
    let (sum, n) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, n), &v| (s + v, n + 1));
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Linear-interpolation quantile (R type 7, NumPy `linear`).
///
/// **Expects pre-sorted, NaN-free input** (caller's responsibility).
/// `p` is a probability in `[0, 1]`. Returns NaN if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
/// Returns NaN if empty.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Quantile of the non-missing values of unsorted data.
pub fn nan_quantile(data: &[f64], p: f64) -> f64 {
    quantile_type7(&sorted_valid(data), p)
}

/// Median of the non-missing values of unsorted data.
pub fn nan_median(data: &[f64]) -> f64 {
    median(&sorted_valid(data))
}

/// Position of the first minimum among non-missing values.
///
/// Ties resolve to the earliest index. `None` if every value is missing.
pub fn first_argmin(data: &[f64]) -> Option<usize> {
    first_arg_by(data, Ordering::Less)
}

/// Position of the first maximum among non-missing values.
///
/// Ties resolve to the earliest index. `None` if every value is missing.
pub fn first_argmax(data: &[f64]) -> Option<usize> {
    first_arg_by(data, Ordering::Greater)
}

fn first_arg_by(data: &[f64], wanted: Ordering) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in data.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            // strict comparison keeps the earliest of equal values; -0.0 == 0.0
            Some((_, b)) if v.partial_cmp(&b) != Some(wanted) => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
