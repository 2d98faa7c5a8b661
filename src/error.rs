use std::path::PathBuf;
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a readable legacy .xls workbook: {}: {}", path.display(), reason)]
    FileFormat { path: PathBuf, reason: String },

    #[error("Workbook {} has no sheet named '{}'", path.display(), sheet)]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("Cannot read cell (row {row}, col {col}) of sheet '{sheet}': {reason}")]
    CellAccess {
        sheet: String,
        row: u32,
        col: u32,
        reason: String,
    },

    #[error("Cannot list directory {}: {}", path.display(), source)]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date '{0}' (expected MM/dd/yyyy)")]
    InvalidDate(String),

    #[error("Cell value {value} cannot be represented as a currency amount")]
    InvalidAmount { value: f64 },

    #[error("Day index {0} is outside the report week (0-5)")]
    DayOutOfRange(u32),
}

impl ReportError {
    /// True for both flavors of "this file is not the workbook we expect".
    pub fn is_file_format(&self) -> bool {
        matches!(
            self,
            ReportError::FileFormat { .. } | ReportError::MissingSheet { .. }
        )
    }

    /// True when a cell could not be read as the requested type.
    pub fn is_cell_access(&self) -> bool {
        matches!(self, ReportError::CellAccess { .. })
    }
}
