//! # multiread
//!
//! Read many sources, optionally in parallel, and combine the results in
//! input order.
//!
//! ## Overview
//!
//! multiread provides:
//! - **Pluggable reading**: any `Fn(&S, &O) -> Result<R, E>` (or a [`Reader`]
//!   implementation) reads one source
//! - **Pluggable merging**: any `Fn(Vec<R>) -> Result<T, E>` (or a
//!   [`Combiner`]) merges the per-source results
//! - **Bounded parallelism**: `nproc > 1` reads on a per-call worker pool
//! - **Order preservation**: results are combined in source order, never in
//!   completion order
//! - **Error transparency**: reader and combiner errors reach the caller
//!   unchanged, from the sequential and the pooled path alike
//! - **Tables**: a built-in CSV/JSON `TableReader` and `VStack` combiner
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multiread::{TableReadOptions, TableReader, VStack, read_multi};
//!
//! fn main() -> Result<(), multiread::ReadError> {
//!     let table = read_multi(
//!         VStack,
//!         TableReader,
//!         vec!["a.csv".into(), "b.csv".into()],
//!         2,
//!         TableReadOptions::default(),
//!     )?;
//!     println!("{} rows", table.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! The core raises only [`DispatchError`]: an empty source list
//! (`cannot read <Type> from empty source list`), `nproc == 0`, or a worker
//! pool that fails to start. It reaches the caller through the reader's own
//! error type, which must implement `From<DispatchError>`. The combiner must
//! share the reader's error type.
//!
//! ## Features
//!
//! - `csv` - CSV tables (enabled by default)
//! - `json` - JSON tables and JSON configs (enabled by default)
//! - `yaml` - YAML configs
//! - `async` - `AsyncMultiReader` on top of Tokio
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - CLI argument types and the `multiread` binary

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;
pub mod reader;
pub mod source;
pub mod table;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod engine_async;

// Re-exports for convenience
pub use builder::MultiReaderBuilder;
pub use config::{ReadConfig, TableReadOptions};
pub use engine::MultiReader;
pub use error::{DispatchError, ReadError, Stage};
pub use format::{FormatError, FormatKind};
pub use io::{FileInput, InMemorySource, InputProvider, StdinInput};
pub use reader::{Combiner, Named, Reader, ReaderExt};
pub use source::Sources;
pub use table::{Cell, Table, TableError, TableReader, VStack};

// Async re-exports
#[cfg(feature = "async")]
pub use engine_async::{AsyncMultiReader, AsyncReader};
#[cfg(feature = "async")]
pub use table::AsyncTableReader;

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReadDiagnostic;

/// Read every source with `reader` and merge the results with `combiner`.
///
/// `sources` may be a single source or an ordered list. With `nproc == 1`
/// reads run sequentially on the calling thread; larger values read on a
/// pool of at most `nproc` threads that lives only for this call. The
/// combiner always receives results in source order.
///
/// Per-source progress is logged at debug level. For info-level progress
/// build the reader with [`MultiReaderBuilder::with_verbose`] instead.
pub fn read_multi<S, O, Rd, C>(
    combiner: C,
    reader: Rd,
    sources: impl Into<Sources<S>>,
    nproc: usize,
    options: O,
) -> Result<C::Output, Rd::Error>
where
    S: Sync,
    O: Clone + Sync,
    Rd: Reader<S, O>,
    Rd::Error: From<DispatchError>,
    C: Combiner<Rd::Output, Error = Rd::Error>,
{
    MultiReaderBuilder::new(reader, combiner)
        .with_options(options)
        .with_nproc(nproc)
        .build()?
        .read(sources)
}

/// Build a table `MultiReader` from a `ReadConfig`.
pub fn build_table_reader(
    config: ReadConfig,
) -> Result<MultiReader<TableReader, VStack, TableReadOptions>, DispatchError> {
    MultiReaderBuilder::new(TableReader, VStack)
        .with_options(config.table)
        .with_nproc(config.nproc)
        .with_verbose(config.verbose)
        .build()
}
