//! Table formats.
//!
//! This module provides:
//! - `FormatKind`: The formats a table can be read from
//! - `FormatError`: Errors that can occur while decoding or encoding
//! - `decode_table`: Dispatch to the format-specific decoder

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::TableReadOptions;
use crate::table::Table;

#[cfg(feature = "csv")]
pub(crate) mod csv;
#[cfg(feature = "json")]
pub(crate) mod json;

/// Formats a table can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Comma-separated values with an optional header row
    Csv,
    /// An array of JSON objects, one per row
    Json,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Csv => write!(f, "csv"),
            FormatKind::Json => write!(f, "json"),
        }
    }
}

impl FormatKind {
    /// Parse a format kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" | "ascii.csv" => Some(FormatKind::Csv),
            "json" => Some(FormatKind::Json),
            _ => None,
        }
    }

    /// Infer a format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::from_str(ext)
    }

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Csv => &["csv"],
            FormatKind::Json => &["json"],
        }
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Csv => cfg!(feature = "csv"),
            FormatKind::Json => cfg!(feature = "json"),
        }
    }
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// I/O error during format operation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying decoder
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),

    /// The content decoded but does not describe a table
    #[error("Malformed table: {0}")]
    Malformed(String),
}

/// Decode a table from `reader` using the given format.
pub fn decode_table(
    kind: FormatKind,
    reader: &mut dyn Read,
    options: &TableReadOptions,
) -> Result<Table, FormatError> {
    match kind {
        #[cfg(feature = "csv")]
        FormatKind::Csv => csv::decode(reader, options),

        #[cfg(feature = "json")]
        FormatKind::Json => {
            let _ = options;
            json::decode(reader)
        }

        #[allow(unreachable_patterns)]
        _ => {
            let _ = (reader, options);
            Err(FormatError::NotEnabled(kind))
        }
    }
}
