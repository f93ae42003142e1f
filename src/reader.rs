//! Reader and combiner abstractions.
//!
//! A [`Reader`] turns one source plus a shared options value into a result.
//! A [`Combiner`] merges the per-source results, in source order, into one
//! value. Both are implemented for plain closures.

use std::borrow::Cow;

/// Trait for per-source readers.
///
/// Readers may be invoked from pool worker threads, so they must be `Sync`
/// and their results and errors must be `Send`. Every invocation receives the
/// same options value, unmodified.
pub trait Reader<S, O>: Sync {
    /// Value produced for one source.
    type Output: Send;
    /// Failure produced for one source.
    type Error: Send;

    /// Read one source.
    fn read(&self, source: &S, options: &O) -> Result<Self::Output, Self::Error>;

    /// Resolve options shared by every read before dispatch.
    ///
    /// Called once per multi-read with the full, non-empty source list.
    fn prepare(&self, _sources: &[S], options: O) -> Result<O, Self::Error> {
        Ok(options)
    }

    /// Human-readable name of the output type, used in error messages.
    fn output_name(&self) -> Cow<'static, str> {
        Cow::Owned(short_type_name::<Self::Output>())
    }
}

impl<S, O, R, E, F> Reader<S, O> for F
where
    F: Fn(&S, &O) -> Result<R, E> + Sync,
    R: Send,
    E: Send,
{
    type Output = R;
    type Error = E;

    fn read(&self, source: &S, options: &O) -> Result<R, E> {
        self(source, options)
    }
}

/// Trait for merging ordered per-source results.
pub trait Combiner<R> {
    type Output;
    type Error;

    /// Merge `parts`, which are in source order. Must accept a single part.
    fn combine(&self, parts: Vec<R>) -> Result<Self::Output, Self::Error>;
}

impl<R, T, E, F> Combiner<R> for F
where
    F: Fn(Vec<R>) -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    fn combine(&self, parts: Vec<R>) -> Result<T, E> {
        self(parts)
    }
}

/// A reader with an explicit output type name.
#[derive(Debug, Clone)]
pub struct Named<Rd> {
    inner: Rd,
    name: Cow<'static, str>,
}

impl<Rd> Named<Rd> {
    pub fn new(inner: Rd, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> Rd {
        self.inner
    }
}

impl<S, O, Rd> Reader<S, O> for Named<Rd>
where
    Rd: Reader<S, O>,
{
    type Output = Rd::Output;
    type Error = Rd::Error;

    fn read(&self, source: &S, options: &O) -> Result<Self::Output, Self::Error> {
        self.inner.read(source, options)
    }

    fn prepare(&self, sources: &[S], options: O) -> Result<O, Self::Error> {
        self.inner.prepare(sources, options)
    }

    fn output_name(&self) -> Cow<'static, str> {
        self.name.clone()
    }
}

/// Extension for tagging any reader with an output type name.
pub trait ReaderExt: Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }
}

impl<T> ReaderExt for T {}

/// `std::any::type_name` with every module path stripped.
///
/// `alloc::vec::Vec<core::option::Option<i64>>` becomes `Vec<Option<i64>>`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}
