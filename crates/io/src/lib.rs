//! # iha-io
//!
//! Reads daily discharge tables from CSV and writes indicator reports and
//! calendar summaries as CSV or JSON. Bridges files into the
//! [`RawTable`](iha_series::RawTable) contract and back out of
//! [`IhaReport`](iha_indicators::IhaReport).

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, read_csv, read_csv_from, read_series};
pub use writer::{write_calendar_summary_csv, write_report_csv, write_report_json};
