//! Asynchronous multi-source read engine.

use std::borrow::Cow;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::engine::{collect_slots, empty_sources, log_outcome};
use crate::error::DispatchError;
use crate::reader::{Combiner, short_type_name};
use crate::source::Sources;

/// Trait for asynchronous per-source readers.
#[async_trait]
pub trait AsyncReader<S, O>: Send + Sync
where
    S: Sync,
    O: Sync,
{
    type Output: Send;
    type Error: Send;

    /// Read one source.
    async fn read(&self, source: &S, options: &O) -> Result<Self::Output, Self::Error>;

    /// Resolve options shared by every read before dispatch.
    fn prepare(&self, _sources: &[S], options: O) -> Result<O, Self::Error> {
        Ok(options)
    }

    /// Human-readable name of the output type, used in error messages.
    fn output_name(&self) -> Cow<'static, str> {
        Cow::Owned(short_type_name::<Self::Output>())
    }
}

/// Async counterpart of [`MultiReader`](crate::MultiReader).
///
/// Up to `nproc` reads are in flight at once on the caller's runtime.
/// Results are stored by source index, so completion order never leaks into
/// the combined value.
#[derive(Debug, Clone)]
pub struct AsyncMultiReader<Rd, C, O> {
    reader: Rd,
    combiner: C,
    options: O,
    nproc: usize,
    verbose: bool,
}

impl<Rd, C, O> AsyncMultiReader<Rd, C, O> {
    /// Create a new async reader; `nproc` must be at least 1.
    pub fn new(reader: Rd, combiner: C, options: O, nproc: usize) -> Result<Self, DispatchError> {
        if nproc == 0 {
            return Err(DispatchError::InvalidParallelism(nproc));
        }

        Ok(Self {
            reader,
            combiner,
            options,
            nproc,
            verbose: false,
        })
    }

    /// Log every completed read at info level instead of debug.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn reader(&self) -> &Rd {
        &self.reader
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    pub fn nproc(&self) -> usize {
        self.nproc
    }

    /// Read every source and combine the results.
    pub async fn read<S>(&self, sources: impl Into<Sources<S>>) -> Result<C::Output, Rd::Error>
    where
        S: Sync,
        O: Clone + Sync,
        Rd: AsyncReader<S, O>,
        Rd::Error: From<DispatchError>,
        C: Combiner<Rd::Output, Error = Rd::Error>,
    {
        let sources = sources.into().into_vec();
        if sources.is_empty() {
            return Err(empty_sources(self.reader.output_name().into_owned()).into());
        }

        let options = self.reader.prepare(&sources, self.options.clone())?;
        let total = sources.len();
        let nproc = self.nproc.min(total);
        let verbose = self.verbose;
        let reader = &self.reader;
        let options = &options;
        debug!(sources = total, nproc, "dispatching async reads");

        let mut slots: Vec<Option<Result<Rd::Output, Rd::Error>>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        let mut completed = stream::iter(sources.iter().enumerate())
            .map(|(index, source)| async move { (index, reader.read(source, options).await) })
            .buffer_unordered(nproc);

        while let Some((index, result)) = completed.next().await {
            log_outcome(index, total, verbose, result.is_ok());
            slots[index] = Some(result);
        }
        drop(completed);

        let parts = collect_slots(slots)?;
        debug!(parts = parts.len(), "combining results");
        self.combiner.combine(parts)
    }
}
