use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::directive::Directive;
use crate::parser::ParseError;

/// Where a directive was found. Only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileLocation {
    pub file_name: String,
    pub line_number: usize,
}

impl FileLocation {
    pub fn new(file_name: impl Into<String>, line_number: usize) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
        }
    }
}

impl std::fmt::Display for FileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// Why a check file produced no directives.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FileError {
    pub fn location(&self) -> Option<&FileLocation> {
        match self {
            FileError::Unreadable { .. } => None,
            FileError::Parse(err) => err.location(),
        }
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<Vec<Directive>, FileError>,
}

impl FileReport {
    pub fn directives(&self) -> &[Directive] {
        self.outcome.as_deref().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&FileError> {
        self.outcome.as_ref().err()
    }
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub files: Vec<FileReport>,
}

impl CheckReport {
    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_err()).count()
    }

    pub fn directive_count(&self) -> usize {
        self.files.iter().map(|f| f.directives().len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| f.outcome.is_err())
    }
}
