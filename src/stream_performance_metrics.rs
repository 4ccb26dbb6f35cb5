//! Drain metrics for lazy streams
//!
//! Terminal operations that report metrics fill in a [`StreamMetrics`] while
//! pulling elements; nothing is measured on the lazy side of a chain.

use std::time::{Duration, Instant};

/// Metrics collected while draining a stream
#[derive(Debug, Clone, Default)]
pub struct StreamMetrics {
    pub items_processed: u64,
    pub errors: u64,
    pub processing_time: Duration,
    pub start_time: Option<Instant>,
}

impl StreamMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_item(&mut self) {
        self.items_processed += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn finalize(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.processing_time = start.elapsed();
        }
    }

    pub fn throughput_items_per_sec(&self) -> f64 {
        if self.processing_time.as_secs_f64() > 0.0 {
            self.items_processed as f64 / self.processing_time.as_secs_f64()
        } else {
            0.0
        }
    }
}
