//! Finds the Store Analysis export for a store and week
//!
//! Candidates are files in the search directory named `Store_Analysis*.xls`.
//! Each one is opened, checked for the store id in its header cell and for the
//! target date among the week's date labels, then closed again before the
//! next candidate is looked at. The first match wins, and its sheet is handed
//! back so the file is never read a second time.

use crate::error::{ReportError, ReportResult};
use crate::excel::layout::{DATE_HEADER_COLS, DATE_HEADER_ROW, SHEET_NAME, STORE_ID_CELL};
use crate::excel::{Worksheet, WorksheetLoader, XlsLoader};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input and comparison format for report dates
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a `MM/dd/yyyy` date; single-digit month and day are accepted
pub fn parse_date(input: &str) -> ReportResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ReportError::InvalidDate(input.to_string()))
}

/// Zero-padded `MM/dd/yyyy`, the form the export writes in its date row
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `"3/4/2024"` → `"03/04/2024"`
pub fn normalize_date(input: &str) -> ReportResult<String> {
    parse_date(input).map(canonical_date)
}

/// Where and how to look for reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    pub search_dir: PathBuf,
    pub file_prefix: String,
    pub file_extension: String,
    pub sheet_name: String,
}

impl LocatorConfig {
    /// Search the given directory with the standard naming rules
    pub fn for_dir<P: Into<PathBuf>>(search_dir: P) -> Self {
        Self {
            search_dir: search_dir.into(),
            file_prefix: "Store_Analysis".to_string(),
            file_extension: ".xls".to_string(),
            sheet_name: SHEET_NAME.to_string(),
        }
    }

    /// Search the invoking user's `Downloads` folder
    pub fn from_home() -> ReportResult<Self> {
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .ok_or_else(|| ReportError::DirectoryAccess {
                path: PathBuf::from("~"),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "home directory is not set",
                ),
            })?;
        Ok(Self::for_dir(PathBuf::from(home).join("Downloads")))
    }

    /// Name filter only; says nothing about the file's contents
    pub fn is_candidate_name(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.file_prefix) && file_name.ends_with(&self.file_extension)
    }
}

/// The report file that passed the store and date checks, with its sheet
#[derive(Debug, Clone)]
pub struct LocatedReport {
    pub path: PathBuf,
    pub sheet: Worksheet,
}

pub struct ReportLocator<L = XlsLoader> {
    config: LocatorConfig,
    loader: L,
}

impl ReportLocator<XlsLoader> {
    pub fn new(config: LocatorConfig) -> Self {
        Self::with_loader(config, XlsLoader)
    }
}

impl<L: WorksheetLoader> ReportLocator<L> {
    pub fn with_loader(config: LocatorConfig, loader: L) -> Self {
        Self { config, loader }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// First report for `store_id` that covers `target_date`.
    ///
    /// A candidate that cannot be opened, or lacks the report sheet, aborts
    /// the search with that error.
    pub fn find(
        &self,
        target_date: NaiveDate,
        store_id: &str,
    ) -> ReportResult<Option<LocatedReport>> {
        let wanted = canonical_date(target_date);

        for path in self.candidates()? {
            let sheet = self.loader.load(&path, &self.config.sheet_name)?;
            if self.matches(&path, &sheet, &wanted, store_id) {
                debug!(path = %path.display(), "report matched");
                return Ok(Some(LocatedReport { path, sheet }));
            }
        }

        debug!(store = store_id, date = %wanted, "no report matched");
        Ok(None)
    }

    /// Files whose names look like reports, in directory enumeration order
    pub fn candidates(&self) -> ReportResult<Vec<PathBuf>> {
        let dir = &self.config.search_dir;
        let dir_error = |source| ReportError::DirectoryAccess {
            path: dir.clone(),
            source,
        };

        let mut found = Vec::new();
        for entry in fs::read_dir(dir).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            let path = entry.path();
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if self.config.is_candidate_name(&name) && path.is_file() {
                found.push(path);
            }
        }

        debug!(dir = %dir.display(), count = found.len(), "report candidates");
        Ok(found)
    }

    /// Does `sheet` (read from `path`) belong to `store_id` and include `canonical`?
    fn matches(&self, path: &Path, sheet: &Worksheet, canonical: &str, store_id: &str) -> bool {
        let (row, col) = STORE_ID_CELL;
        let store_cell = match sheet.display(row, col) {
            Ok(value) => value,
            Err(_) => {
                debug!(path = %path.display(), "skipped: no store id in header");
                return false;
            }
        };
        if store_cell.to_lowercase() != store_id.to_lowercase() {
            debug!(
                path = %path.display(),
                found = %store_cell,
                "skipped: different store"
            );
            return false;
        }

        let covered = DATE_HEADER_COLS
            .filter_map(|col| sheet.text(DATE_HEADER_ROW, col).ok())
            .any(|label| label == canonical);
        if !covered {
            debug!(path = %path.display(), date = canonical, "skipped: date not in week");
        }
        covered
    }
}
