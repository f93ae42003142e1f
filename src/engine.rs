//! Synchronous multi-source read engine.

use rayon::ThreadPoolBuilder;
use tracing::{debug, info, warn};

use crate::error::DispatchError;
use crate::reader::{Combiner, Reader};
use crate::source::Sources;

/// Reads many sources and combines the results in input order.
///
/// With `nproc == 1`, or a single source, every read runs on the caller's
/// thread. Otherwise each call builds a pool of `min(nproc, sources)` worker
/// threads, which is torn down before the call returns.
#[derive(Debug, Clone)]
pub struct MultiReader<Rd, C, O> {
    reader: Rd,
    combiner: C,
    options: O,
    nproc: usize,
    verbose: bool,
}

impl<Rd, C, O> MultiReader<Rd, C, O> {
    pub(crate) fn new(reader: Rd, combiner: C, options: O, nproc: usize, verbose: bool) -> Self {
        Self {
            reader,
            combiner,
            options,
            nproc,
            verbose,
        }
    }

    /// Get the per-source reader.
    pub fn reader(&self) -> &Rd {
        &self.reader
    }

    /// Get the combiner.
    pub fn combiner(&self) -> &C {
        &self.combiner
    }

    /// Get the options forwarded to every read.
    pub fn options(&self) -> &O {
        &self.options
    }

    /// Get the configured degree of parallelism.
    pub fn nproc(&self) -> usize {
        self.nproc
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Read every source and combine the results.
    ///
    /// Fails with [`DispatchError::EmptySources`] when there is nothing to
    /// read; neither the reader nor the combiner is invoked in that case.
    /// Reader and combiner errors are returned unchanged.
    pub fn read<S>(&self, sources: impl Into<Sources<S>>) -> Result<C::Output, Rd::Error>
    where
        S: Sync,
        O: Clone + Sync,
        Rd: Reader<S, O>,
        Rd::Error: From<DispatchError>,
        C: Combiner<Rd::Output, Error = Rd::Error>,
    {
        let sources = sources.into().into_vec();
        if sources.is_empty() {
            return Err(empty_sources(self.reader.output_name().into_owned()).into());
        }

        let options = self.reader.prepare(&sources, self.options.clone())?;
        let nproc = self.nproc.min(sources.len());
        debug!(sources = sources.len(), nproc, "dispatching reads");

        let parts = if nproc <= 1 {
            self.read_sequential(&sources, &options)?
        } else {
            self.read_pooled(&sources, &options, nproc)?
        };

        debug!(parts = parts.len(), "combining results");
        self.combiner.combine(parts)
    }

    fn read_sequential<S>(&self, sources: &[S], options: &O) -> Result<Vec<Rd::Output>, Rd::Error>
    where
        Rd: Reader<S, O>,
    {
        let total = sources.len();
        let mut parts = Vec::with_capacity(total);

        for (index, source) in sources.iter().enumerate() {
            let result = self.reader.read(source, options);
            log_outcome(index, total, self.verbose, result.is_ok());
            parts.push(result?);
        }

        Ok(parts)
    }

    fn read_pooled<S>(
        &self,
        sources: &[S],
        options: &O,
        nproc: usize,
    ) -> Result<Vec<Rd::Output>, Rd::Error>
    where
        S: Sync,
        O: Sync,
        Rd: Reader<S, O>,
        Rd::Error: From<DispatchError>,
    {
        let pool = ThreadPoolBuilder::new()
            .num_threads(nproc)
            .thread_name(|i| format!("multiread-worker-{i}"))
            .build()
            .map_err(DispatchError::from)?;

        let total = sources.len();
        let verbose = self.verbose;
        let reader = &self.reader;
        let mut slots: Vec<Option<Result<Rd::Output, Rd::Error>>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        // Returns only after every spawned read has finished.
        pool.scope(|scope| {
            for ((index, source), slot) in sources.iter().enumerate().zip(slots.iter_mut()) {
                scope.spawn(move |_| {
                    let result = reader.read(source, options);
                    log_outcome(index, total, verbose, result.is_ok());
                    *slot = Some(result);
                });
            }
        });
        drop(pool);

        collect_slots(slots)
    }
}

pub(crate) fn empty_sources(type_name: String) -> DispatchError {
    DispatchError::EmptySources { type_name }
}

/// Unpack result slots in index order, returning the lowest-index failure.
pub(crate) fn collect_slots<R, E>(slots: Vec<Option<Result<R, E>>>) -> Result<Vec<R>, E>
where
    E: From<DispatchError>,
{
    let mut parts = Vec::with_capacity(slots.len());
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(Ok(part)) => parts.push(part),
            Some(Err(e)) => return Err(e),
            None => return Err(DispatchError::MissingResult { index }.into()),
        }
    }
    Ok(parts)
}

pub(crate) fn log_outcome(index: usize, total: usize, verbose: bool, ok: bool) {
    if !ok {
        warn!(index, total, "source read failed");
    } else if verbose {
        info!(index, total, "read source {}/{}", index + 1, total);
    } else {
        debug!(index, total, "source read complete");
    }
}
