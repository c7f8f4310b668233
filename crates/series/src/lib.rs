//! # iha-series
//!
//! The canonical daily discharge series consumed by every indicator, plus the
//! raw-table input contract it is validated from.
//!
//! A [`FlowSeries`] holds `(date, flow)` pairs sorted by date with unique
//! dates. Missing flows are `f64::NAN`. The series is immutable; indicator
//! code reads it through borrowed [`YearPartition`] and [`MonthPartition`]
//! views.

mod error;
mod partition;
mod series;
mod table;
mod validate;

pub use error::SeriesError;
pub use partition::{MonthPartition, YearPartition};
pub use series::FlowSeries;
pub use table::{Column, RawTable};
