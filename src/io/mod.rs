//! Input sources for the table reader.
//!
//! This module provides:
//! - `InputProvider`: Trait for byte-stream sources
//! - `FileInput` / `StdinInput`: Standard implementations
//! - `InMemorySource`: In-memory implementation for testing

mod input;
mod memory;
mod std_io;

pub use input::InputProvider;
pub use memory::InMemorySource;
pub use std_io::{FileInput, StdinInput};
