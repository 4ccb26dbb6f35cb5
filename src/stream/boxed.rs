//! Type-erased streams and enumerators
use std::sync::Arc;

use super::core::{Enumerator, Stream};

/// An owned, type-erased enumerator.
pub type BoxEnumerator<T> = Box<dyn Enumerator<Item = T> + Send + 'static>;

trait DynStream<T>: Send + Sync {
    fn dyn_enumerator(&self) -> BoxEnumerator<T>;
}

impl<S> DynStream<S::Item> for S
where
    S: Stream + Send + Sync,
    S::Enumerator: Send + 'static,
{
    fn dyn_enumerator(&self) -> BoxEnumerator<S::Item> {
        Box::new(self.enumerator())
    }
}

/// A type-erased stream. Cloning shares the underlying stream.
pub struct BoxStream<T> {
    inner: Arc<dyn DynStream<T>>,
}

impl<T> Clone for BoxStream<T> {
    fn clone(&self) -> Self {
        BoxStream {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> BoxStream<T> {
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = T> + Send + Sync + 'static,
        S::Enumerator: Send + 'static,
    {
        BoxStream {
            inner: Arc::new(stream),
        }
    }
}

impl<T> Stream for BoxStream<T> {
    type Item = T;
    type Enumerator = BoxEnumerator<T>;

    fn enumerator(&self) -> BoxEnumerator<T> {
        self.inner.dyn_enumerator()
    }
}
