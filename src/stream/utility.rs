//! Terminal operations and the bridge to `std::iter`
use std::iter::FusedIterator;

use super::core::{Enumerator, Stream};
use crate::error::{StreamError, StreamResult};
use crate::stream_configuration::BufferConfig;
use crate::stream_performance_metrics::StreamMetrics;

// ================================
// Draining
// ================================

/// Drain a fresh enumerator of `stream` into a `Vec`, in order.
///
/// Never returns for an infinite stream; bound it first.
pub fn to_array<S>(stream: &S) -> Vec<S::Item>
where
    S: Stream + ?Sized,
{
    let mut enumerator = stream.enumerator();
    let mut items = Vec::new();
    while let Some(item) = enumerator.move_next() {
        items.push(item);
    }
    log::debug!("drained {} items", items.len());
    items
}

/// Upper bound on the buffer allocated before the first item is pulled.
const MAX_INITIAL_CAPACITY: usize = 4096;

/// Drain a fresh enumerator of `stream` into a buffer sized by `config`.
///
/// Fails with [`StreamError::CapacityExceeded`] as soon as the stream yields
/// more items than the configuration allows, and with
/// [`StreamError::AllocationFailed`] if a growth step cannot be allocated; the
/// enumerator is dropped at that point. The up-front allocation is capped, so
/// an oversized `initial_capacity` only costs memory once items arrive.
pub fn to_array_with<S>(stream: &S, config: &BufferConfig) -> StreamResult<Vec<S::Item>>
where
    S: Stream + ?Sized,
{
    let limit = config.limit();
    let mut enumerator = stream.enumerator();
    let initial = limit
        .map_or(config.initial_capacity, |l| l.min(config.initial_capacity))
        .min(MAX_INITIAL_CAPACITY);
    let mut items = Vec::with_capacity(initial);

    while let Some(item) = enumerator.move_next() {
        if let Some(limit) = limit {
            if items.len() >= limit {
                log::warn!("drain stopped: stream yields more than {} items", limit);
                return Err(StreamError::CapacityExceeded { limit });
            }
        }
        if items.len() == items.capacity() {
            let additional = config.grow_by(items.len());
            if let Err(e) = items.try_reserve_exact(additional) {
                log::warn!("drain stopped: cannot grow buffer by {} items: {}", additional, e);
                return Err(StreamError::AllocationFailed { requested: additional });
            }
        }
        items.push(item);
    }
    log::debug!("drained {} items", items.len());
    Ok(items)
}

/// Drain a fresh enumerator of `stream`, recording item count and drain time.
pub fn to_array_with_metrics<S>(stream: &S) -> (Vec<S::Item>, StreamMetrics)
where
    S: Stream + ?Sized,
{
    let mut metrics = StreamMetrics::new();
    let mut enumerator = stream.enumerator();
    let mut items = Vec::new();
    while let Some(item) = enumerator.move_next() {
        metrics.record_item();
        items.push(item);
    }
    metrics.finalize();
    log::debug!(
        "drained {} items in {:?}",
        metrics.items_processed,
        metrics.processing_time
    );
    (items, metrics)
}

// ================================
// Iterator bridge
// ================================

/// A `std::iter::Iterator` over an enumerator.
///
/// The [`FusedIterator`] impl relies on the [`Enumerator`] contract: once
/// `move_next` returns `None` it keeps doing so until `reset`. Every source and
/// combinator in this crate honours that; an enumerator written elsewhere must
/// too, or `Iterator::fuse` on this adapter will not guard against it.
pub struct Iter<E> {
    enumerator: E,
}

impl<E: Enumerator> Iter<E> {
    pub fn new(enumerator: E) -> Self {
        Iter { enumerator }
    }

    /// Rewind to the start of the sequence.
    pub fn reset(&mut self) {
        self.enumerator.reset();
    }

    pub fn into_inner(self) -> E {
        self.enumerator
    }
}

impl<E: Enumerator> Iterator for Iter<E> {
    type Item = E::Item;

    fn next(&mut self) -> Option<E::Item> {
        self.enumerator.move_next()
    }
}

impl<E: Enumerator> FusedIterator for Iter<E> {}
