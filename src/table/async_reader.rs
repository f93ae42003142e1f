//! Async table reader backed by tokio's file system API.

use std::path::PathBuf;

use async_trait::async_trait;

use super::Table;
use super::reader::{check_path, with_shared_format};
use crate::config::TableReadOptions;
use crate::engine_async::AsyncReader;
use crate::error::ReadError;
use crate::format::{FormatKind, decode_table};

/// Async counterpart of [`TableReader`](super::TableReader) for file paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncTableReader;

#[async_trait]
impl AsyncReader<PathBuf, TableReadOptions> for AsyncTableReader {
    type Output = Table;
    type Error = ReadError;

    async fn read(&self, source: &PathBuf, options: &TableReadOptions) -> Result<Table, ReadError> {
        check_path(source)?;
        let target = source.to_string_lossy().into_owned();

        let kind = options
            .format
            .or_else(|| FormatKind::from_path(source))
            .ok_or_else(|| ReadError::UnknownFormat(target.clone()))?;

        let bytes = tokio::fs::read(source).await.map_err(|e| ReadError::Open {
            target: target.clone(),
            source: e,
        })?;

        let mut slice = bytes.as_slice();
        decode_table(kind, &mut slice, options).map_err(|e| ReadError::Parse { target, source: e })
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
