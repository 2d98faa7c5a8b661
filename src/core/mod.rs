//! Report extraction over the fixed Store Analysis layout

pub mod extractor;

pub use extractor::{extract, extract_week};
