//! Visualization support: metrics and rolling time series for the frontends.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::{Generation, TickDelta, Universe};

/// Real-time simulation metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeMetrics {
    /// Current generation.
    pub generation: u64,
    /// Live cell count.
    pub population: u32,
    /// Births in the last tick.
    pub births: u32,
    /// Deaths in the last tick.
    pub deaths: u32,
    /// Generations per second (throughput).
    pub generations_per_second: f64,
}

impl LifeMetrics {
    /// Create new empty metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the universe and the most recent tick delta.
    pub fn update_from_universe(
        &mut self,
        universe: &Universe,
        generation: Generation,
        delta: TickDelta,
    ) {
        self.generation = generation.count();
        self.population = universe.population();
        self.births = delta.births;
        self.deaths = delta.deaths;
    }

    /// Record throughput from wall-clock frame timing.
    ///
    /// `steps` generations were advanced in `elapsed`; a zero duration or a
    /// frame with no steps leaves the previous reading unchanged.
    pub fn record_throughput(&mut self, steps: u64, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        if steps > 0 && secs > 0.0 {
            self.generations_per_second = steps as f64 / secs;
        }
    }

    /// Fraction of cells alive, in [0, 1].
    #[must_use]
    pub fn density(&self, universe: &Universe) -> f64 {
        let cells = f64::from(universe.width()) * f64::from(universe.height());
        if cells == 0.0 {
            return 0.0;
        }
        f64::from(self.population) / cells
    }
}

/// Data point in a rolling series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    /// Generation the sample was taken at.
    pub generation: u64,
    /// Sampled value.
    pub value: f64,
}

/// Rolling capacity-bounded series of samples over generations.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    data: VecDeque<DataPoint>,
    capacity: usize,
    name: String,
}

impl TimeSeries {
    /// Create new time series with capacity.
    #[must_use]
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            name: name.into(),
        }
    }

    /// Push a new sample, evicting the oldest at capacity.
    pub fn push(&mut self, generation: u64, value: f64) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(DataPoint { generation, value });
    }

    /// Get all data points.
    #[must_use]
    pub const fn data(&self) -> &VecDeque<DataPoint> {
        &self.data
    }

    /// Get series name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get last value.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.data.back().map(|p| p.value)
    }

    /// Get min value.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.data
            .iter()
            .map(|p| p.value)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get max value.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.data
            .iter()
            .map(|p| p.value)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Values only, oldest first.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.value).collect()
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}
