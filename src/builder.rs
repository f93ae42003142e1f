//! Builder for creating MultiReader instances.

use crate::engine::MultiReader;
use crate::error::DispatchError;

pub struct MultiReaderBuilder<Rd, C, O> {
    reader: Rd,
    combiner: C,
    options: O,
    nproc: usize,
    verbose: bool,
}

impl<Rd, C> MultiReaderBuilder<Rd, C, ()> {
    /// Start a builder with sequential reads and no options.
    pub fn new(reader: Rd, combiner: C) -> Self {
        Self {
            reader,
            combiner,
            options: (),
            nproc: 1,
            verbose: false,
        }
    }
}

impl<Rd, C, O> MultiReaderBuilder<Rd, C, O> {
    /// Set the options forwarded to every read.
    pub fn with_options<P>(self, options: P) -> MultiReaderBuilder<Rd, C, P> {
        MultiReaderBuilder {
            reader: self.reader,
            combiner: self.combiner,
            options,
            nproc: self.nproc,
            verbose: self.verbose,
        }
    }

    /// Set the number of worker threads; 1 means sequential.
    pub fn with_nproc(mut self, nproc: usize) -> Self {
        self.nproc = nproc;
        self
    }

    /// Log every completed read at info level instead of debug.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<MultiReader<Rd, C, O>, DispatchError> {
        if self.nproc == 0 {
            return Err(DispatchError::InvalidParallelism(self.nproc));
        }

        Ok(MultiReader::new(
            self.reader,
            self.combiner,
            self.options,
            self.nproc,
            self.verbose,
        ))
    }
}
