//! Cell coordinates of the Store Analysis export (0-based row, col)

use crate::error::{ReportError, ReportResult};

/// Sheet holding the weekly figures
pub const SHEET_NAME: &str = "Worksheet";

/// Header cell carrying the store identifier
pub const STORE_ID_CELL: (u32, u32) = (0, 1);

/// Row holding the week's date labels, one per column in `DATE_HEADER_COLS`
pub const DATE_HEADER_ROW: u32 = 1;
pub const DATE_HEADER_COLS: std::ops::RangeInclusive<u32> = 1..=7;

/// Business days per report
pub const DAYS_PER_WEEK: u32 = 6;

/// Column of day 0; day `n` lives at `FIRST_DAY_COL + n`
pub const FIRST_DAY_COL: u32 = 2;

pub const DATE_ROW: u32 = 5;
pub const RETAIL_ROW: u32 = 7;
pub const SALES_TAX_ROW: u32 = 9;
pub const CASH_ROW: u32 = 23;
pub const AMEX_ROW: u32 = 26;
pub const DISCOVER_ROW: u32 = 27;
pub const TOTAL_ROW: u32 = 28;
pub const TIPS_ROW: u32 = 33;

/// Sheet column for a day of the week (0 = first business day).
pub fn day_column(day_of_week: u32) -> ReportResult<u32> {
    if day_of_week >= DAYS_PER_WEEK {
        return Err(ReportError::DayOutOfRange(day_of_week));
    }
    Ok(FIRST_DAY_COL + day_of_week)
}
