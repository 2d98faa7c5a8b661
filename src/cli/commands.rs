use crate::core::extract_week;
use crate::error::ReportResult;
use crate::excel::WorksheetLoader;
use crate::locator::{parse_date, LocatorConfig, ReportLocator};
use crate::writer;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// Execute the report command against the real filesystem and stdout
pub fn report(date: &str, store: &str, dir: Option<PathBuf>) -> ReportResult<()> {
    let config = match dir {
        Some(dir) => LocatorConfig::for_dir(dir),
        None => LocatorConfig::from_home()?,
    };
    let locator = ReportLocator::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&locator, date, store, &mut out)
}

/// Locate the week's report, then print its six days.
///
/// "No report" is not an error: the download hint is printed and the run
/// ends cleanly. Anything that goes wrong after a file is selected aborts
/// before a single day is printed.
pub fn run<L, W>(locator: &ReportLocator<L>, date: &str, store: &str, out: &mut W) -> ReportResult<()>
where
    L: WorksheetLoader,
    W: Write,
{
    let target = parse_date(date)?;
    info!(store, %target, dir = %locator.config().search_dir.display(), "searching for report");

    let Some(located) = locator.find(target, store)? else {
        writer::write_not_found(out, store, date)?;
        return Ok(());
    };

    let shown = std::path::absolute(&located.path).unwrap_or_else(|_| located.path.clone());
    writer::write_found(out, store, date, &shown)?;

    let reports = extract_week(&located.sheet)?;
    writer::print_reports(out, &reports)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
