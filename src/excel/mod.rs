//! Legacy Excel (.xls) access for Store Analysis exports
//!
//! - `workbook`: open a BIFF workbook, pull one sheet into memory, read cells
//! - `layout`: fixed cell coordinates of the Store Analysis sheet

pub mod layout;
mod workbook;

pub use workbook::{Workbook, Worksheet, WorksheetLoader, XlsLoader};
