//! Reader and combiner implementations for tables.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::Table;
use crate::config::TableReadOptions;
use crate::error::ReadError;
use crate::format::{FormatKind, decode_table};
use crate::io::{FileInput, InputProvider};
use crate::reader::{Combiner, Reader};

/// Reads one CSV or JSON source into a [`Table`].
///
/// The format comes from the options or, failing that, from the first
/// source's extension; it is resolved once per multi-read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableReader;

impl TableReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a table from any input provider.
    pub fn read_provider(
        &self,
        provider: &dyn InputProvider,
        options: &TableReadOptions,
    ) -> Result<Table, ReadError> {
        let target = provider.id();
        if target.is_empty() {
            return Err(ReadError::InvalidSource("source has an empty identifier".into()));
        }

        let kind = options
            .format
            .or_else(|| provider.format_hint())
            .ok_or_else(|| ReadError::UnknownFormat(target.to_string()))?;

        let mut reader = provider.open().map_err(|source| ReadError::Open {
            target: target.to_string(),
            source,
        })?;

        let table = decode_table(kind, &mut *reader, options).map_err(|source| ReadError::Parse {
            target: target.to_string(),
            source,
        })?;

        debug!(source = target, format = %kind, rows = table.len(), "decoded table");
        Ok(table)
    }
}

pub(crate) fn with_shared_format(
    mut options: TableReadOptions,
    first: Option<FormatKind>,
) -> TableReadOptions {
    if options.format.is_none() {
        options.format = first;
    }
    options
}

pub(crate) fn check_path(path: &Path) -> Result<(), ReadError> {
    if path.as_os_str().is_empty() {
        return Err(ReadError::InvalidSource("empty path".into()));
    }
    Ok(())
}

impl Reader<PathBuf, TableReadOptions> for TableReader {
    type Output = Table;
    type Error = ReadError;

    fn read(&self, source: &PathBuf, options: &TableReadOptions) -> Result<Table, ReadError> {
        check_path(source)?;
        self.read_provider(&FileInput::new(source.clone()), options)
    }

    fn prepare(
        &self,
        sources: &[PathBuf],
        options: TableReadOptions,
    ) -> Result<TableReadOptions, ReadError> {
        let first = sources.first().and_then(|p| FormatKind::from_path(p));
        Ok(with_shared_format(options, first))
    }
}

impl Reader<Arc<dyn InputProvider>, TableReadOptions> for TableReader {
    type Output = Table;
    type Error = ReadError;

    fn read(
        &self,
        source: &Arc<dyn InputProvider>,
        options: &TableReadOptions,
    ) -> Result<Table, ReadError> {
        self.read_provider(source.as_ref(), options)
    }

    fn prepare(
        &self,
        sources: &[Arc<dyn InputProvider>],
        options: TableReadOptions,
    ) -> Result<TableReadOptions, ReadError> {
        let first = sources.first().and_then(|p| p.format_hint());
        Ok(with_shared_format(options, first))
    }
}

/// Stacks per-source tables in source order.
#[derive(Debug, Clone, Copy, Default)]
pub struct VStack;

impl Combiner<Table> for VStack {
    type Output = Table;
    type Error = ReadError;

    fn combine(&self, parts: Vec<Table>) -> Result<Table, ReadError> {
        Ok(Table::vstack(parts)?)
    }
}
