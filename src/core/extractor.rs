//! Daily figures out of a Store Analysis sheet
//!
//! Each business day is one column (`FIRST_DAY_COL + day`); each figure is a
//! fixed row. A record is only built when every one of its cells reads
//! cleanly, so a malformed sheet fails the whole run instead of producing a
//! partial week.

use crate::error::ReportResult;
use crate::excel::layout::{
    day_column, AMEX_ROW, CASH_ROW, DATE_ROW, DAYS_PER_WEEK, DISCOVER_ROW, RETAIL_ROW,
    SALES_TAX_ROW, TIPS_ROW, TOTAL_ROW,
};
use crate::excel::Worksheet;
use crate::types::{Amount, DailyReport};
use tracing::debug;

/// Read the record for one day (0-5)
pub fn extract(sheet: &Worksheet, day_of_week: u32) -> ReportResult<DailyReport> {
    let col = day_column(day_of_week)?;
    let amount = |row: u32| -> ReportResult<Amount> { Amount::from_cell(sheet.number(row, col)?) };

    let report = DailyReport {
        date: sheet.text(DATE_ROW, col)?.to_string(),
        tips: amount(TIPS_ROW)?,
        sales_tax: amount(SALES_TAX_ROW)?,
        retail: amount(RETAIL_ROW)?,
        total: amount(TOTAL_ROW)?,
        discover: amount(DISCOVER_ROW)?,
        cash: amount(CASH_ROW)?,
        amex: amount(AMEX_ROW)?,
    };

    debug!(day = day_of_week, col, date = %report.date, "extracted day");
    Ok(report)
}

/// All six days in column order
pub fn extract_week(sheet: &Worksheet) -> ReportResult<Vec<DailyReport>> {
    (0..DAYS_PER_WEEK).map(|day| extract(sheet, day)).collect()
}
