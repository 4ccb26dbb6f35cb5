//! Core stream traits and the element-wise combinators
//!
//! A [`Stream`] is an immutable, reusable description of a sequence. Every call
//! to [`Stream::enumerator`] hands out an independent [`Enumerator`] positioned
//! at the start; the stream itself never changes. Combinators wrap one upstream
//! stream and derive their enumerators from the upstream's, pulling one element
//! at a time.

use std::sync::Arc;

use serde::Serialize;

use super::boxed::BoxStream;
use super::select::{FieldSet, Projection, Select, SelectFields};
use super::utility::{self, Iter};
use crate::error::StreamResult;
use crate::stream_configuration::BufferConfig;
use crate::stream_performance_metrics::StreamMetrics;

/// A resettable cursor over the elements of a stream.
///
/// `move_next` returns `None` once the sequence is exhausted and keeps
/// returning `None` until [`reset`](Enumerator::reset) is called.
pub trait Enumerator {
    type Item;

    /// Advance by one element and return it, or `None` when exhausted.
    fn move_next(&mut self) -> Option<Self::Item>;

    /// Rewind to the position of a freshly produced enumerator.
    fn reset(&mut self);
}

/// A factory of enumerators over a (possibly infinite) sequence.
pub trait Stream {
    type Item;
    type Enumerator: Enumerator<Item = Self::Item>;

    /// Produce a new enumerator positioned at the first element.
    fn enumerator(&self) -> Self::Enumerator;
}

impl<E: Enumerator + ?Sized> Enumerator for Box<E> {
    type Item = E::Item;

    fn move_next(&mut self) -> Option<Self::Item> {
        (**self).move_next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<E: Enumerator + ?Sized> Enumerator for &mut E {
    type Item = E::Item;

    fn move_next(&mut self) -> Option<Self::Item> {
        (**self).move_next()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<S: Stream + ?Sized> Stream for &S {
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerator(&self) -> Self::Enumerator {
        (**self).enumerator()
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerator(&self) -> Self::Enumerator {
        (**self).enumerator()
    }
}

impl<S: Stream + ?Sized> Stream for Arc<S> {
    type Item = S::Item;
    type Enumerator = S::Enumerator;

    fn enumerator(&self) -> Self::Enumerator {
        (**self).enumerator()
    }
}

// ================================
// Map
// ================================

/// Applies a function to every element of the upstream stream.
pub struct Map<S, F> {
    upstream: S,
    f: Arc<F>,
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Map {
            upstream: self.upstream.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

/// Lazily apply `f` to each element of `upstream`.
pub fn map<S, B, F>(upstream: S, f: F) -> Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> B,
{
    Map {
        upstream,
        f: Arc::new(f),
    }
}

impl<S, B, F> Stream for Map<S, F>
where
    S: Stream,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Enumerator = MapEnumerator<S::Enumerator, F>;

    fn enumerator(&self) -> Self::Enumerator {
        MapEnumerator {
            inner: self.upstream.enumerator(),
            f: Arc::clone(&self.f),
            done: false,
        }
    }
}

pub struct MapEnumerator<E, F> {
    inner: E,
    f: Arc<F>,
    done: bool,
}

impl<E, B, F> Enumerator for MapEnumerator<E, F>
where
    E: Enumerator,
    F: Fn(E::Item) -> B,
{
    type Item = B;

    fn move_next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        match self.inner.move_next() {
            Some(item) => Some((self.f)(item)),
            None => {
                self.done = true;
                None
            }
        }
    }

    fn reset(&mut self) {
        self.done = false;
        self.inner.reset();
    }
}

// ================================
// Where
// ================================

/// Keeps only the upstream elements accepted by a predicate.
pub struct Where<S, P> {
    upstream: S,
    predicate: Arc<P>,
}

impl<S: Clone, P> Clone for Where<S, P> {
    fn clone(&self) -> Self {
        Where {
            upstream: self.upstream.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// Lazily keep the elements of `upstream` for which `predicate` holds.
///
/// Over an infinite upstream whose elements never match, `move_next` does not
/// return. Bounding the source is up to the caller.
pub fn filter<S, P>(upstream: S, predicate: P) -> Where<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool,
{
    Where {
        upstream,
        predicate: Arc::new(predicate),
    }
}

impl<S, P> Stream for Where<S, P>
where
    S: Stream,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Enumerator = WhereEnumerator<S::Enumerator, P>;

    fn enumerator(&self) -> Self::Enumerator {
        WhereEnumerator {
            inner: self.upstream.enumerator(),
            predicate: Arc::clone(&self.predicate),
            done: false,
        }
    }
}

pub struct WhereEnumerator<E, P> {
    inner: E,
    predicate: Arc<P>,
    done: bool,
}

impl<E, P> Enumerator for WhereEnumerator<E, P>
where
    E: Enumerator,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn move_next(&mut self) -> Option<E::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.inner.move_next() {
                Some(item) => {
                    if (self.predicate)(&item) {
                        return Some(item);
                    }
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.done = false;
        self.inner.reset();
    }
}

// ================================
// Fluent interface
// ================================

/// Extension trait chaining combinators and terminal operations on any stream.
///
/// Each method is the same operation as the free function of the same name:
/// `s.filter(p)` builds exactly what `filter(s, p)` builds. Nothing here
/// enumerates except the `to_array*` family.
pub trait StreamExt: Stream + Sized {
    /// Transform every element with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> B,
    {
        map(self, f)
    }

    /// Keep only the elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Where<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Narrow every record to the fields of the projection `P`.
    ///
    /// Field names are checked at compile time; see
    /// [`projection!`](crate::projection).
    fn select<P>(self) -> Select<Self, P>
    where
        P: Projection<Self::Item>,
    {
        super::select::select(self)
    }

    /// Narrow every record to the named fields, checked as each element is
    /// pulled.
    fn select_fields<I, K>(self, keys: I) -> SelectFields<Self>
    where
        Self::Item: Serialize,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        super::select::select_fields(self, FieldSet::new(keys))
    }

    /// Drain a fresh enumerator into a `Vec`.
    ///
    /// Does not return if the stream is infinite.
    fn to_array(&self) -> Vec<Self::Item> {
        utility::to_array(self)
    }

    /// Drain a fresh enumerator into a buffer shaped by `config`.
    fn to_array_with(&self, config: &BufferConfig) -> StreamResult<Vec<Self::Item>> {
        utility::to_array_with(self, config)
    }

    /// Drain a fresh enumerator and report how long it took.
    fn to_array_with_metrics(&self) -> (Vec<Self::Item>, StreamMetrics) {
        utility::to_array_with_metrics(self)
    }

    /// Iterate over a fresh enumerator with std adapters.
    fn iter(&self) -> Iter<Self::Enumerator> {
        Iter::new(self.enumerator())
    }

    /// Erase the concrete stream type.
    fn boxed(self) -> BoxStream<Self::Item>
    where
        Self: Send + Sync + 'static,
        Self::Enumerator: Send + 'static,
    {
        BoxStream::new(self)
    }
}

impl<S: Stream + Sized> StreamExt for S {}
