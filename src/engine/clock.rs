//! Generation clock.
//!
//! Tracks how many generations the simulation has advanced, with an optional
//! upper bound.

use serde::{Deserialize, Serialize};

use crate::engine::Generation;

/// Generation counter with an optional bound.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenClock {
    /// Current generation.
    current: Generation,
    /// Maximum generation (optional limit).
    max: Option<Generation>,
}

impl GenClock {
    /// Create a new clock at generation zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Generation::ZERO,
            max: None,
        }
    }

    /// Create a clock bounded at `max` generations.
    #[must_use]
    pub const fn bounded(max: u64) -> Self {
        Self {
            current: Generation::ZERO,
            max: Some(Generation::new(max)),
        }
    }

    /// Get the current generation.
    #[must_use]
    pub const fn current(&self) -> Generation {
        self.current
    }

    /// Set the maximum generation.
    pub fn set_max(&mut self, max: Generation) {
        self.max = Some(max);
    }

    /// Get the bound, if any.
    #[must_use]
    pub const fn max(&self) -> Option<Generation> {
        self.max
    }

    /// Check if the clock has reached its bound.
    #[must_use]
    pub fn at_max(&self) -> bool {
        self.max.is_some_and(|max| self.current >= max)
    }

    /// Advance by one generation.
    ///
    /// Returns the new generation.
    pub fn tick(&mut self) -> Generation {
        self.current = self.current.add(1);
        self.current
    }

    /// Advance by multiple generations.
    ///
    /// Returns the new generation.
    pub fn tick_n(&mut self, n: u64) -> Generation {
        for _ in 0..n {
            self.tick();
        }
        self.current
    }

    /// Reset the clock to generation zero.
    pub fn reset(&mut self) {
        self.current = Generation::ZERO;
    }

    /// Generations remaining until the bound, if one is set.
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        self.max
            .map(|max| max.count().saturating_sub(self.current.count()))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: generation count equals number of ticks.
        #[test]
        fn prop_tick_count_accurate(ticks in 0u64..1000) {
            let mut clock = GenClock::new();
            clock.tick_n(ticks);
            prop_assert_eq!(clock.current().count(), ticks);
        }

        /// Falsification: a bounded clock reports at_max exactly at its bound.
        #[test]
        fn prop_at_max_exact(bound in 1u64..500) {
            let mut clock = GenClock::bounded(bound);
            clock.tick_n(bound - 1);
            prop_assert!(!clock.at_max());
            clock.tick();
            prop_assert!(clock.at_max());
        }
    }
}
