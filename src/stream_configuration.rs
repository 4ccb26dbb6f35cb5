//! Configuration types for draining streams

/// Buffer configuration for [`to_array_with`](crate::stream::to_array_with)
#[derive(Debug, Clone, PartialEq)]
pub struct BufferConfig {
    pub initial_capacity: usize,
    pub max_capacity: Option<usize>,
    pub growth_strategy: GrowthStrategy,
}

/// Strategy for growing the output buffer once it is full
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthStrategy {
    /// Grow linearly by fixed amount
    Linear(usize),
    /// Grow exponentially by multiplier
    Exponential(f64),
    /// Fixed size, `initial_capacity` is a hard limit
    Fixed,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            max_capacity: None,
            growth_strategy: GrowthStrategy::Exponential(2.0),
        }
    }
}

impl BufferConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    pub fn with_growth_strategy(mut self, growth_strategy: GrowthStrategy) -> Self {
        self.growth_strategy = growth_strategy;
        self
    }

    /// The largest number of items a drain may hold, if any.
    pub fn limit(&self) -> Option<usize> {
        match self.growth_strategy {
            GrowthStrategy::Fixed => Some(
                self.max_capacity
                    .map_or(self.initial_capacity, |max| max.min(self.initial_capacity)),
            ),
            _ => self.max_capacity,
        }
    }

    /// How many additional slots to reserve when a buffer of `len` items is full.
    ///
    /// Always at least one, and never past [`limit`](Self::limit).
    pub fn grow_by(&self, len: usize) -> usize {
        let step = match self.growth_strategy {
            GrowthStrategy::Linear(n) => n,
            GrowthStrategy::Exponential(factor) => {
                let target = (len.max(1) as f64 * factor).ceil() as usize;
                target.saturating_sub(len)
            }
            GrowthStrategy::Fixed => 0,
        };
        let step = step.max(1);
        match self.limit() {
            Some(limit) => step.min(limit.saturating_sub(len)).max(1),
            None => step,
        }
    }
}
