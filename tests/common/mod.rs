//! Shared fixtures: in-memory sheets laid out like a Store Analysis export

#![allow(dead_code)] // each test binary uses a different subset

use calamine::Data;
use std::path::{Path, PathBuf};
use store_report::excel::layout::*;
use store_report::excel::Worksheet;
use store_report::{error, excel};

// Same source file as the library's unit-test doubles
#[path = "../../src/testing.rs"]
mod testing;

pub use testing::{strip_ansi, MemoryLoader};

/// Legacy `.xls` export for store UT104, week of 03/02/2024 - 03/08/2024
pub fn legacy_export() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("Store_Analysis_UT104.xls")
}

/// One day column worth of figures
#[derive(Clone)]
pub struct DayFigures {
    pub date: &'static str,
    pub retail: f64,
    pub sales_tax: f64,
    pub cash: f64,
    pub discover: f64,
    pub amex: f64,
    pub total: f64,
    pub tips: f64,
}

pub fn monday() -> DayFigures {
    DayFigures {
        date: "Monday",
        retail: 100.0,
        sales_tax: 8.0,
        cash: 50.0,
        discover: 0.0,
        amex: 20.0,
        total: 178.0,
        tips: 10.0,
    }
}

pub fn week() -> Vec<DayFigures> {
    let labels = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| DayFigures {
            date: *label,
            retail: 100.0 + i as f64,
            sales_tax: 8.0,
            cash: 50.0,
            discover: 12.5,
            amex: 20.0,
            total: 178.0 + 10.0 * i as f64,
            tips: 10.0,
        })
        .collect()
}

/// Sheet cells for a store, its seven header dates, and the day columns
pub fn report_cells(
    store: &str,
    header_dates: &[(u32, &str)],
    days: &[DayFigures],
) -> Vec<((u32, u32), Data)> {
    let mut cells = vec![(STORE_ID_CELL, Data::String(store.to_string()))];
    for (col, date) in header_dates {
        cells.push(((DATE_HEADER_ROW, *col), Data::String(date.to_string())));
    }
    for (day, f) in days.iter().enumerate() {
        let col = FIRST_DAY_COL + day as u32;
        cells.push(((DATE_ROW, col), Data::String(f.date.to_string())));
        cells.push(((RETAIL_ROW, col), Data::Float(f.retail)));
        cells.push(((SALES_TAX_ROW, col), Data::Float(f.sales_tax)));
        cells.push(((CASH_ROW, col), Data::Float(f.cash)));
        cells.push(((DISCOVER_ROW, col), Data::Float(f.discover)));
        cells.push(((AMEX_ROW, col), Data::Float(f.amex)));
        cells.push(((TOTAL_ROW, col), Data::Float(f.total)));
        cells.push(((TIPS_ROW, col), Data::Float(f.tips)));
    }
    cells
}

pub fn report_sheet(store: &str, header_dates: &[(u32, &str)], days: &[DayFigures]) -> Worksheet {
    Worksheet::from_cells(SHEET_NAME, report_cells(store, header_dates, days))
}
