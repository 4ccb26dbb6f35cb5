use crate::stream::{Enumerator, Stream};
use crate::stream_performance_metrics::StreamMetrics;

/// Extension trait for streams containing Result types
///
/// Fallible generators, mapping functions and [`select_fields`] produce
/// `Result` elements. These terminals stop at the first `Err` and hand it to
/// the caller unchanged; nothing is retried or skipped.
///
/// [`select_fields`]: crate::stream::select_fields
pub trait ResultStreamExt<T, E>: Stream<Item = Result<T, E>> {
    /// Drain into a `Vec` of values, or return the first error.
    ///
    /// Stops pulling as soon as an error is seen, so an infinite stream that
    /// eventually fails does terminate.
    fn try_to_array(&self) -> Result<Vec<T>, E> {
        let mut enumerator = self.enumerator();
        let mut items = Vec::new();
        while let Some(item) = enumerator.move_next() {
            items.push(item?);
        }
        log::debug!("drained {} items", items.len());
        Ok(items)
    }

    /// Like [`try_to_array`](Self::try_to_array), also reporting item and
    /// error counts and drain time.
    fn try_to_array_with_metrics(&self) -> (Result<Vec<T>, E>, StreamMetrics) {
        let mut metrics = StreamMetrics::new();
        let mut enumerator = self.enumerator();
        let mut items = Vec::new();
        let outcome = loop {
            match enumerator.move_next() {
                Some(Ok(item)) => {
                    metrics.record_item();
                    items.push(item);
                }
                Some(Err(e)) => {
                    metrics.record_error();
                    break Err(e);
                }
                None => break Ok(items),
            }
        };
        metrics.finalize();
        log::debug!(
            "drained {} items, {} errors in {:?}",
            metrics.items_processed,
            metrics.errors,
            metrics.processing_time
        );
        (outcome, metrics)
    }
}

impl<S, T, E> ResultStreamExt<T, E> for S where S: Stream<Item = Result<T, E>> + ?Sized {}
