//! Test doubles shared by the unit tests and, through `tests/common`, the
//! integration tests. Paths go through `super` so both crates resolve them.

use super::error::{ReportError, ReportResult};
use super::excel::{Worksheet, WorksheetLoader};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Loader that hands out prepared sheets by file name and records every open
#[derive(Default)]
pub struct MemoryLoader {
    sheets: HashMap<String, Worksheet>,
    pub opened: RefCell<Vec<String>>,
}

impl MemoryLoader {
    pub fn with(mut self, file_name: &str, sheet: Worksheet) -> Self {
        self.sheets.insert(file_name.to_string(), sheet);
        self
    }
}

impl WorksheetLoader for MemoryLoader {
    fn load(&self, path: &Path, sheet: &str) -> ReportResult<Worksheet> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.opened.borrow_mut().push(name.clone());

        match self.sheets.get(&name) {
            Some(ws) if ws.name() == sheet => Ok(ws.clone()),
            Some(_) => Err(ReportError::MissingSheet {
                path: path.to_path_buf(),
                sheet: sheet.to_string(),
            }),
            None => Err(ReportError::FileFormat {
                path: path.to_path_buf(),
                reason: "not an OLE compound document".to_string(),
            }),
        }
    }
}

/// Remove ANSI color sequences so styled output compares as plain text
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

