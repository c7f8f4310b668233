//! Flow reversals: changes between rising and falling discharge.
//!
//! Day-to-day differences are classified as rising, flat, or falling. A flat
//! run never counts as a state of its own: it joins the directional run
//! before it (or, at the start of a year, the one after it), and equal runs
//! that become adjacent merge. The reversal count is the number of
//! boundaries between the merged runs.

use iha_series::FlowSeries;

use crate::annual::{AnnualResult, per_year};

/// Direction of a day-to-day change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive difference.
    Rising,
    /// Zero difference.
    Flat,
    /// Negative difference.
    Falling,
}

impl Direction {
    /// Classifies a finite difference.
    pub fn of(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::Rising
        } else if delta < 0.0 {
            Direction::Falling
        } else {
            Direction::Flat
        }
    }
}

/// Scan state for one year.
#[derive(Debug, Default)]
struct RunScan {
    /// Previous valid flow, cleared by a missing day.
    prev: Option<f64>,
    /// Class of the current merged run; `None` until a directional change.
    direction: Option<Direction>,
    /// Number of merged directional runs seen.
    runs: usize,
}

impl RunScan {
    fn step(mut self, flow: f64) -> Self {
        if flow.is_nan() {
            self.prev = None;
            return self;
        }
        if let Some(prev) = self.prev {
            match Direction::of(flow - prev) {
                Direction::Flat => {}
                d if self.direction == Some(d) => {}
                d => {
                    self.direction = Some(d);
                    self.runs += 1;
                }
            }
        }
        self.prev = Some(flow);
        self
    }

    fn reversals(&self) -> usize {
        self.runs.saturating_sub(1)
    }
}

/// Number of reversals in one year's flows.
///
/// A missing day removes both differences it touches without resetting the
/// current run.
pub fn count_reversals(flows: &[f64]) -> usize {
    flows
        .iter()
        .fold(RunScan::default(), |scan, &flow| scan.step(flow))
        .reversals()
}

/// Number of rising/falling reversals per year.
pub fn flow_reversals(series: &FlowSeries) -> AnnualResult<usize> {
    per_year(series, |p| count_reversals(p.flows()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_of() {
        assert_eq!(Direction::of(0.5), Direction::Rising);
        assert_eq!(Direction::of(-0.5), Direction::Falling);
        assert_eq!(Direction::of(0.0), Direction::Flat);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(count_reversals(&[]), 0);
        assert_eq!(count_reversals(&[3.0]), 0);
    }

    #[test]
    fn test_monotone_has_no_reversal() {
        assert_eq!(count_reversals(&[1.0, 2.0, 3.0, 4.0]), 0);
        assert_eq!(count_reversals(&[4.0, 3.0, 2.0, 1.0]), 0);
    }

    #[test]
    fn test_all_flat_has_no_reversal() {
        assert_eq!(count_reversals(&[2.0, 2.0, 2.0]), 0);
    }

    #[test]
    fn test_single_peak() {
        assert_eq!(count_reversals(&[1.0, 3.0, 2.0]), 1);
    }

    #[test]
    fn test_flat_between_opposite_runs_counts_once() {
        // rise, flat, fall: one reversal, not two
        assert_eq!(count_reversals(&[1.0, 2.0, 2.0, 1.0]), 1);
    }

    #[test]
    fn test_flat_inside_monotone_run_is_absorbed() {
        assert_eq!(count_reversals(&[1.0, 2.0, 2.0, 3.0]), 0);
    }

    #[test]
    fn test_leading_flat_joins_following_run() {
        assert_eq!(count_reversals(&[5.0, 5.0, 5.0, 6.0, 4.0]), 1);
    }

    #[test]
    fn test_missing_value_is_not_bridged() {
        // 10 -> NaN -> 20: no difference exists, so nothing to classify
        assert_eq!(count_reversals(&[10.0, f64::NAN, 20.0]), 0);
        // the fall 3 -> 1 across the gap is not seen
        assert_eq!(count_reversals(&[1.0, 3.0, f64::NAN, 1.0, 2.0]), 0);
        // runs continue across the gap
        assert_eq!(count_reversals(&[1.0, 3.0, f64::NAN, 5.0, 4.0]), 1);
    }
}
