//! Error types for multiread operations.
//!
//! This module provides:
//! - `DispatchError`: Errors raised by the read/combine core itself
//! - `ReadError`: Errors raised by the built-in table reader
//!
//! The core never wraps a reader's error. Caller error types opt in to the
//! core's own failures through `From<DispatchError>`.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::format::FormatError;
use crate::table::TableError;

/// Errors originating in the read/combine core.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No sources were given, so there is nothing to read.
    #[error("cannot read {type_name} from empty source list")]
    EmptySources {
        /// Name of the type the reader would have produced
        type_name: String,
    },
    /// The requested degree of parallelism was zero.
    #[error("nproc must be at least 1, got {0}")]
    InvalidParallelism(usize),
    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    /// A worker finished without recording a result for its source.
    #[error("no result recorded for source #{index}")]
    MissingResult {
        /// Position of the source in the input list
        index: usize,
    },
}

/// Stage of a table read where an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while validating the source handle
    Resolve,
    /// Error while opening the stream
    Open,
    Parse,
    Combine,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Open => write!(f, "Open"),
            Stage::Parse => write!(f, "Parse"),
            Stage::Combine => write!(f, "Combine"),
        }
    }
}

/// Errors produced by [`TableReader`](crate::table::TableReader) and the
/// [`VStack`](crate::table::VStack) combiner.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The source handle cannot be read at all (e.g. an empty path).
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// No explicit format was given and none could be inferred.
    #[error("cannot determine format for '{0}'")]
    UnknownFormat(String),

    #[error("failed to open '{target}': {source}")]
    Open {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The content of the source is malformed for its format.
    #[error("failed to parse '{target}': {source}")]
    Parse {
        target: String,
        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl ReadError {
    /// The stage of the read this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            ReadError::Dispatch(_) | ReadError::InvalidSource(_) | ReadError::UnknownFormat(_) => {
                Stage::Resolve
            }
            ReadError::Open { .. } => Stage::Open,
            ReadError::Parse { .. } => Stage::Parse,
            ReadError::Table(_) => Stage::Combine,
        }
    }

    /// Identifier of the failing source, when the error is tied to one.
    pub fn target(&self) -> Option<&str> {
        match self {
            ReadError::Open { target, .. } => Some(target),
            ReadError::Parse { target, .. } => Some(target),
            ReadError::UnknownFormat(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
