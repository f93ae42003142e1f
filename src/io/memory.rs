//! In-memory input source for testing.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use super::InputProvider;
use crate::format::FormatKind;

/// In-memory input source.
///
/// The buffer is shared, so clones are cheap and every `open` starts from
/// the first byte.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    id: String,
    data: Arc<[u8]>,
    format: Option<FormatKind>,
}

impl InMemorySource {
    /// Create a new in-memory source with the given data.
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            format: None,
        }
    }

    /// Create a new in-memory source from a string.
    pub fn from_string(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(id, data.into().into_bytes())
    }

    /// Declare the format of the data, overriding extension inference.
    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = Some(format);
        self
    }
}

impl InputProvider for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(Arc::clone(&self.data))))
    }

    fn format_hint(&self) -> Option<FormatKind> {
        self.format
            .or_else(|| FormatKind::from_path(std::path::Path::new(&self.id)))
    }
}
