//! Error types for layout operations
//!
//! None of these are fatal. Callers log them and keep running with whatever
//! layout they had.

use std::path::{Path, PathBuf};

/// Errors raised by the layout store and the persistence codec
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The layout file could not be opened, read, or written
    Io { path: PathBuf, message: String },
    /// No panel with the given name exists in the store
    NotFound(String),
    /// A line in a layout file did not hold a valid panel record (1-indexed)
    MalformedLine { line: usize, reason: String },
}

impl LayoutError {
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "I/O error on {}: {}", path.display(), message),
            Self::NotFound(name) => write!(f, "panel not found: {}", name),
            Self::MalformedLine { line, reason } => {
                write!(f, "malformed layout line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
