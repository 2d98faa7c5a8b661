//! Store Report - weekly Store Analysis export reader
//!
//! Finds the point-of-sale "Store Analysis" workbook (legacy `.xls`) for a
//! store and week, reads six business days of fixed-position figures, and
//! prints each day's deposit breakdown.
//!
//! # Features
//!
//! - Report discovery by file name, store id, and week date
//! - Exact decimal currency math (no floating-point drift)
//! - Derived bank deposit and service revenue per day
//!
//! # Example
//!
//! ```no_run
//! use store_report::core::extract_week;
//! use store_report::locator::{parse_date, LocatorConfig, ReportLocator};
//!
//! let locator = ReportLocator::new(LocatorConfig::for_dir("/home/me/Downloads"));
//! let date = parse_date("03/04/2024")?;
//!
//! if let Some(report) = locator.find(date, "UT104")? {
//!     for day in extract_week(&report.sheet)? {
//!         println!("{} deposit {}", day.date, day.bank_deposit());
//!     }
//! }
//! # Ok::<(), store_report::error::ReportError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod locator;
pub mod types;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use error::{ReportError, ReportResult};
pub use types::{Amount, DailyReport};
