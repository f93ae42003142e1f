//! CLI integration helpers for multiread.
//!
//! Converts command-line tokens into sources and a [`ReadConfig`]. The
//! `sarge` feature adds `ArgumentType` support for [`SourceArgs`].

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ReadConfig;
use crate::format::FormatKind;
use crate::io::{FileInput, InputProvider, StdinInput};
use crate::source::Sources;

#[cfg(feature = "sarge")]
mod sarge;

/// Source paths collected from the command line, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArgs(pub Vec<String>);

impl SourceArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source path.
    pub fn with_source(mut self, path: impl Into<String>) -> Self {
        self.0.push(path.into());
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into path sources, preserving order.
    pub fn to_sources(&self) -> Sources<PathBuf> {
        Sources::many(self.0.iter().map(PathBuf::from))
    }

    /// Convert into input providers, preserving order.
    ///
    /// `-` reads stdin; every other token is a file path.
    pub fn to_providers(&self) -> Sources<Arc<dyn InputProvider>> {
        Sources::many(self.0.iter().map(|token| -> Arc<dyn InputProvider> {
            if is_stdin(token) {
                Arc::new(StdinInput::new())
            } else {
                Arc::new(FileInput::new(token))
            }
        }))
    }
}

/// Options for a command-line multi-read.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadArgs {
    pub sources: SourceArgs,
    /// Number of worker threads.
    pub nproc: usize,
    /// Explicit format (overrides extension inference).
    pub format: Option<FormatKind>,
    pub verbose: bool,
}

impl Default for ReadArgs {
    fn default() -> Self {
        Self {
            sources: SourceArgs::default(),
            nproc: 1,
            format: None,
            verbose: false,
        }
    }
}

impl ReadArgs {
    /// Build the read configuration described by these arguments.
    pub fn to_config(&self) -> ReadConfig {
        let mut config = ReadConfig::new()
            .with_nproc(self.nproc)
            .with_verbose(self.verbose);
        config.table.format = self.format;
        config
    }
}

/// Whether a source token names stdin (`-` or `stdin`).
pub fn is_stdin(token: &str) -> bool {
    token == "-" || token.eq_ignore_ascii_case("stdin")
}

/// Parse a worker count; zero and non-numbers are rejected.
pub fn parse_nproc(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

/// Parse a format string into a FormatKind.
pub fn parse_format(s: &str) -> Option<FormatKind> {
    FormatKind::from_str(s.trim())
}
