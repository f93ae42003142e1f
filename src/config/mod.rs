//! Configuration for multi-source reads.
//!
//! This module provides:
//! - `ReadConfig`: Parallelism and verbosity of a read, plus table options
//! - `TableReadOptions`: Options forwarded to every table read

mod read;

pub use read::{ReadConfig, TableReadOptions};
