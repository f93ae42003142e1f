//! Normalization of the `sources` argument.

use std::path::{Path, PathBuf};

/// One source or an ordered list of sources.
///
/// A single value behaves exactly like a one-element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources<S> {
    Single(S),
    Many(Vec<S>),
}

impl<S> Sources<S> {
    /// Wrap a single source.
    pub fn single(source: S) -> Self {
        Sources::Single(source)
    }

    /// Wrap an ordered list of sources.
    pub fn many(sources: impl IntoIterator<Item = S>) -> Self {
        Sources::Many(sources.into_iter().collect())
    }

    /// Number of sources after normalization.
    pub fn len(&self) -> usize {
        match self {
            Sources::Single(_) => 1,
            Sources::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize into an ordered list.
    pub fn into_vec(self) -> Vec<S> {
        match self {
            Sources::Single(s) => vec![s],
            Sources::Many(v) => v,
        }
    }
}

impl Sources<PathBuf> {
    /// Split a delimiter-separated list of paths, e.g. `"a.csv,b.csv"`.
    ///
    /// Surrounding whitespace is trimmed and empty entries are dropped, so an
    /// empty string yields an empty list.
    pub fn from_delimited(list: &str, delimiter: char) -> Self {
        Sources::Many(
            list.split(delimiter)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect(),
        )
    }
}

impl<S> From<Vec<S>> for Sources<S> {
    fn from(sources: Vec<S>) -> Self {
        Sources::Many(sources)
    }
}

impl<S, const N: usize> From<[S; N]> for Sources<S> {
    fn from(sources: [S; N]) -> Self {
        Sources::Many(sources.into())
    }
}

impl<S: Clone> From<&[S]> for Sources<S> {
    fn from(sources: &[S]) -> Self {
        Sources::Many(sources.to_vec())
    }
}

impl From<PathBuf> for Sources<PathBuf> {
    fn from(path: PathBuf) -> Self {
        Sources::Single(path)
    }
}

impl From<&Path> for Sources<PathBuf> {
    fn from(path: &Path) -> Self {
        Sources::Single(path.to_path_buf())
    }
}

impl From<&str> for Sources<PathBuf> {
    fn from(path: &str) -> Self {
        Sources::Single(PathBuf::from(path))
    }
}

impl From<String> for Sources<PathBuf> {
    fn from(path: String) -> Self {
        Sources::Single(PathBuf::from(path))
    }
}
