//! Stream constructors: from_array, singleton, infinite
use std::fmt;
use std::sync::Arc;

use super::core::{Enumerator, Stream};

// ================================
// Array-backed Constructors
// ================================

/// A finite stream over a snapshot of items.
///
/// The items are shared read-only between the stream and every enumerator it
/// produces; each enumerator keeps its own index.
pub struct FromArray<T> {
    pub(crate) items: Arc<[T]>,
}

impl<T> Clone for FromArray<T> {
    fn clone(&self) -> Self {
        FromArray {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FromArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromArray").field("items", &self.items).finish()
    }
}

impl<T> FromArray<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Build a finite stream over the given items, in order.
pub fn from_array<T, I>(items: I) -> FromArray<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    FromArray {
        items: items.into_iter().collect(),
    }
}

impl<T: Clone> From<Vec<T>> for FromArray<T> {
    fn from(items: Vec<T>) -> Self {
        FromArray {
            items: items.into(),
        }
    }
}

impl<T: Clone> FromIterator<T> for FromArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_array(iter)
    }
}

impl<T: Clone> Stream for FromArray<T> {
    type Item = T;
    type Enumerator = FromArrayEnumerator<T>;

    fn enumerator(&self) -> Self::Enumerator {
        FromArrayEnumerator {
            items: Arc::clone(&self.items),
            index: 0,
        }
    }
}

pub struct FromArrayEnumerator<T> {
    items: Arc<[T]>,
    index: usize,
}

impl<T: Clone> Enumerator for FromArrayEnumerator<T> {
    type Item = T;

    fn move_next(&mut self) -> Option<T> {
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

/// A stream of exactly one element.
pub type Singleton<T> = FromArray<T>;

/// Build a stream holding only `value`.
pub fn singleton<T: Clone>(value: T) -> Singleton<T> {
    from_array([value])
}

// ================================
// Function-based Constructors
// ================================

/// An unbounded stream computing each element from its index.
pub struct Infinite<F> {
    generator: Arc<F>,
}

impl<F> Clone for Infinite<F> {
    fn clone(&self) -> Self {
        Infinite {
            generator: Arc::clone(&self.generator),
        }
    }
}

/// Build an unbounded stream yielding `generator(0)`, `generator(1)`, ...
///
/// Resetting an enumerator calls the generator again from index 0, so a
/// generator that is not deterministic will not replay the same values.
pub fn infinite<T, F>(generator: F) -> Infinite<F>
where
    F: Fn(usize) -> T,
{
    Infinite {
        generator: Arc::new(generator),
    }
}

impl<T, F> Stream for Infinite<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;
    type Enumerator = InfiniteEnumerator<F>;

    fn enumerator(&self) -> Self::Enumerator {
        InfiniteEnumerator {
            generator: Arc::clone(&self.generator),
            index: 0,
        }
    }
}

pub struct InfiniteEnumerator<F> {
    generator: Arc<F>,
    index: usize,
}

impl<T, F> Enumerator for InfiniteEnumerator<F>
where
    F: Fn(usize) -> T,
{
    type Item = T;

    fn move_next(&mut self) -> Option<T> {
        let item = (self.generator)(self.index);
        self.index = self.index.wrapping_add(1);
        Some(item)
    }

    fn reset(&mut self) {
        log::trace!("infinite enumerator rewound from index {}", self.index);
        self.index = 0;
    }
}
