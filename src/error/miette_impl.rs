//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{DispatchError, ReadError, Stage};

/// A diagnostic wrapper for read errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReadDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(error: &ReadError) -> Option<String> {
    match error {
        ReadError::Dispatch(DispatchError::EmptySources { .. }) => {
            Some("Pass at least one source to read".into())
        }
        ReadError::Dispatch(DispatchError::InvalidParallelism(_)) => {
            Some("Use nproc = 1 for sequential reads".into())
        }
        ReadError::UnknownFormat(_) => {
            Some("Set an explicit format or use a .csv/.json extension".into())
        }
        _ => match error.stage() {
            Stage::Open | Stage::Parse => Some("Check that every source exists and is well formed".into()),
            _ => None,
        },
    }
}

impl From<ReadError> for ReadDiagnostic {
    fn from(e: ReadError) -> Self {
        let message = match e.target() {
            Some(target) => format!("[{}] on '{}'", e.stage(), target),
            None => format!("[{}] {}", e.stage(), e),
        };
        ReadDiagnostic {
            message,
            help: help_for(&e),
            source: Some(Box::new(e)),
            severity: Severity::Error,
        }
    }
}

impl From<ReadError> for miette::Report {
    fn from(e: ReadError) -> Self {
        miette::Report::new(ReadDiagnostic::from(e))
    }
}
