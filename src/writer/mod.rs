//! Console output: discovery status and the per-day blocks
//!
//! Status lines are styled with `colored`, which turns itself off when stdout
//! is not a terminal. The day blocks are always plain text.

use crate::error::ReportResult;
use crate::types::{Amount, DailyReport};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

pub const SEPARATOR: &str = "*******************************************************";

/// Width of the label column, including the colon and padding
const LABEL_WIDTH: usize = 11;

/// Width of the right-aligned amount column
const AMOUNT_WIDTH: usize = 10;

/// Write one block per report, in the order given
pub fn print_reports<W: Write>(out: &mut W, reports: &[DailyReport]) -> ReportResult<()> {
    for report in reports {
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "{}", report.date)?;
        write_amount(out, "Tips", report.tips)?;
        write_amount(out, "Sales Tax", report.sales_tax)?;
        write_amount(out, "Retail", report.retail)?;
        write_amount(out, "Service", report.service())?;
        write_amount(out, "BoA", report.bank_deposit())?;
        write_amount(out, "Amex", report.amex)?;
    }
    out.flush()?;
    Ok(())
}

fn write_amount<W: Write>(out: &mut W, label: &str, amount: Amount) -> ReportResult<()> {
    writeln!(
        out,
        "{:<label_w$}{:>amount_w$}",
        format!("{}:", label),
        amount,
        label_w = LABEL_WIDTH,
        amount_w = AMOUNT_WIDTH
    )?;
    Ok(())
}

pub fn write_found<W: Write>(out: &mut W, store: &str, date: &str, path: &Path) -> ReportResult<()> {
    writeln!(
        out,
        "{} {} ({}) {}",
        "Found store analysis report for store:".bold().green(),
        store.bright_blue().bold(),
        date,
        path.display().to_string().cyan()
    )?;
    Ok(())
}

pub fn write_not_found<W: Write>(out: &mut W, store: &str, date: &str) -> ReportResult<()> {
    writeln!(
        out,
        "{} {} ({})",
        "Download store analysis report for store:".bold().yellow(),
        store.bright_blue().bold(),
        date
    )?;
    Ok(())
}
