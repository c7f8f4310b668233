//! # iha-calendar
//!
//! Gregorian date helpers used by the annual aggregation engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=366)"]
//!     A -->|"YearMonth::from_date()"| C["YearMonth"]
//!     C -->|"month_index()"| D["MONTH_LABELS"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use iha_calendar::{Doy, MONTH_LABELS, YearMonth};
//!
//! let date = NaiveDate::from_ymd_opt(2000, 3, 1).unwrap();
//! assert_eq!(Doy::from_date(date).get(), 61); // leap year
//!
//! let key = YearMonth::from_date(date);
//! assert_eq!(MONTH_LABELS[key.month_index()], "mar");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype (Julian day) |
//! | `month` | `(year, month)` key and month labels |

mod doy;
mod month;

pub use doy::Doy;
pub use month::{MONTH_LABELS, YearMonth};
