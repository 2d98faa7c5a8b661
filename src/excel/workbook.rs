//! Workbook and worksheet access - legacy Excel (.xls) → in-memory cells

use crate::error::{ReportError, ReportResult};
use calamine::{open_workbook, Data, Range, Reader, Xls, XlsError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An open legacy binary workbook.
///
/// The underlying file is released when the value is dropped, so callers
/// scope it to the smallest block that needs it.
pub struct Workbook {
    path: PathBuf,
    inner: Xls<BufReader<File>>,
}

impl Workbook {
    /// Open a BIFF (.xls) workbook
    pub fn open<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = open_workbook::<Xls<_>, _>(&path).map_err(|e: XlsError| {
            ReportError::FileFormat {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names().to_vec()
    }

    /// Load a sheet by exact name
    pub fn worksheet(&mut self, name: &str) -> ReportResult<Worksheet> {
        if !self.sheet_names().iter().any(|s| s == name) {
            return Err(ReportError::MissingSheet {
                path: self.path.clone(),
                sheet: name.to_string(),
            });
        }

        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|e| ReportError::FileFormat {
                path: self.path.clone(),
                reason: format!("sheet '{}' unreadable: {}", name, e),
            })?;

        Ok(Worksheet::new(name, range))
    }
}

/// Cell values of one sheet, detached from the file it came from.
#[derive(Debug, Clone)]
pub struct Worksheet {
    name: String,
    range: Range<Data>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    /// Build a sheet from sparse `((row, col), value)` pairs
    pub fn from_cells<I>(name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = ((u32, u32), Data)>,
    {
        let cells: Vec<_> = cells.into_iter().collect();
        let max_row = cells.iter().map(|((r, _), _)| *r).max();
        let max_col = cells.iter().map(|((_, c), _)| *c).max();

        let range = match (max_row, max_col) {
            (Some(row), Some(col)) => {
                let mut range = Range::new((0, 0), (row, col));
                for (pos, value) in cells {
                    range.set_value(pos, value);
                }
                range
            }
            _ => Range::empty(),
        };

        Self::new(name, range)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw cell at an absolute position; `None` for empty or out-of-range cells
    pub fn cell(&self, row: u32, col: u32) -> Option<&Data> {
        match self.range.get_value((row, col)) {
            None | Some(Data::Empty) => None,
            Some(value) => Some(value),
        }
    }

    /// Cell that must hold text
    pub fn text(&self, row: u32, col: u32) -> ReportResult<&str> {
        match self.cell(row, col) {
            Some(Data::String(s)) => Ok(s.as_str()),
            Some(other) => Err(self.access_error(row, col, wrong_type("text", other))),
            None => Err(self.access_error(row, col, "cell is empty".to_string())),
        }
    }

    /// Cell that must hold a number (dates count, as serial numbers)
    pub fn number(&self, row: u32, col: u32) -> ReportResult<f64> {
        match self.cell(row, col) {
            Some(Data::Float(f)) => Ok(*f),
            Some(Data::Int(i)) => Ok(*i as f64),
            Some(Data::DateTime(dt)) => Ok(dt.as_f64()),
            Some(other) => Err(self.access_error(row, col, wrong_type("number", other))),
            None => Err(self.access_error(row, col, "cell is empty".to_string())),
        }
    }

    /// Any non-empty cell rendered as text
    pub fn display(&self, row: u32, col: u32) -> ReportResult<String> {
        match self.cell(row, col) {
            Some(Data::String(s)) => Ok(s.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(self.access_error(row, col, "cell is empty".to_string())),
        }
    }

    fn access_error(&self, row: u32, col: u32, reason: String) -> ReportError {
        ReportError::CellAccess {
            sheet: self.name.clone(),
            row,
            col,
            reason,
        }
    }
}

fn wrong_type(expected: &str, found: &Data) -> String {
    let kind = match found {
        Data::Int(_) | Data::Float(_) => "number",
        Data::String(_) => "text",
        Data::Bool(_) => "boolean",
        Data::DateTime(_) | Data::DateTimeIso(_) => "date",
        Data::DurationIso(_) => "duration",
        Data::Error(_) => "error value",
        _ => "nothing",
    };
    format!("expected {}, found {} ({})", expected, kind, found)
}

/// Source of worksheets by file path.
///
/// The locator and the report run only need "give me sheet X of file Y";
/// this is the seam where the real `.xls` reader plugs in.
pub trait WorksheetLoader {
    fn load(&self, path: &Path, sheet: &str) -> ReportResult<Worksheet>;
}

impl<T: WorksheetLoader + ?Sized> WorksheetLoader for &T {
    fn load(&self, path: &Path, sheet: &str) -> ReportResult<Worksheet> {
        (**self).load(path, sheet)
    }
}

/// Reads worksheets from legacy `.xls` files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsLoader;

impl WorksheetLoader for XlsLoader {
    fn load(&self, path: &Path, sheet: &str) -> ReportResult<Worksheet> {
        // Workbook (and its file handle) is dropped on every return path
        let mut workbook = Workbook::open(path)?;
        debug!(
            path = %workbook.path().display(),
            sheets = ?workbook.sheet_names(),
            "opened workbook"
        );
        workbook.worksheet(sheet)
    }
}
