//! Input provider trait definition.

use std::fmt::Debug;
use std::io::Read;
use std::path::Path;

use crate::format::FormatKind;

/// Trait for sources that can be opened as a byte stream.
///
/// Providers are shared with pool workers, so they must be `Send + Sync`.
pub trait InputProvider: Send + Sync + Debug {
    /// Returns an identifier for this source, used in errors and logs.
    ///
    /// Convention: "-" for stdin, file path for files.
    fn id(&self) -> &str;

    /// Open and return a new readable stream positioned at the beginning.
    fn open(&self) -> std::io::Result<Box<dyn Read + Send>>;

    /// Format suggested by the source itself, if any.
    fn format_hint(&self) -> Option<FormatKind> {
        FormatKind::from_path(Path::new(self.id()))
    }
}
