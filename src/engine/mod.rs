//! Core simulation engine.
//!
//! Owns the universe, the generation clock and the RNG, and applies the halt
//! policy after every step.

pub mod clock;
pub mod pattern;
pub mod rng;
pub mod universe;

use serde::{Deserialize, Serialize};

pub use clock::GenClock;
pub use pattern::Pattern;
pub use rng::LifeRng;
pub use universe::{TickDelta, Universe};

use crate::config::{HaltConfig, LifeConfig, SeedingMode};
use crate::error::LifeResult;

/// Generation counter.
///
/// The discrete time axis of the simulation; one tick advances exactly one
/// generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Generation {
    /// Generations since the initial seeding.
    count: u64,
}

impl Generation {
    /// Generation zero (the initial seeding).
    pub const ZERO: Self = Self { count: 0 };

    /// Create a generation from a count.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self { count }
    }

    /// Get the raw count.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Advance by `n` generations.
    #[must_use]
    pub const fn add(self, n: u64) -> Self {
        Self {
            count: self.count + n,
        }
    }

    /// Go back by `n` generations, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, n: u64) -> Self {
        Self {
            count: self.count.saturating_sub(n),
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen {}", self.count)
    }
}

/// Why the engine stopped advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// The configured generation bound was reached.
    MaxGenerations,
    /// Every cell died.
    Extinct,
    /// A tick changed no cell.
    Quiescent,
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MaxGenerations => write!(f, "generation bound reached"),
            Self::Extinct => write!(f, "universe went extinct"),
            Self::Quiescent => write!(f, "universe became quiescent"),
        }
    }
}

/// Main simulation engine.
///
/// Coordinates the universe, the generation clock, the RNG and the halt
/// policy.
pub struct LifeEngine {
    /// The cell universe.
    universe: Universe,
    /// Generation clock.
    clock: GenClock,
    /// Random number generator.
    rng: LifeRng,
    /// Halt policy.
    halt: HaltConfig,
    /// Why the engine halted, once it has.
    halted: Option<HaltReason>,
    /// Delta produced by the most recent tick.
    last_delta: TickDelta,
    /// Configuration (kept for reset).
    config: LifeConfig,
}

impl LifeEngine {
    /// Create a new engine from configuration.
    ///
    /// Seeds generation zero according to the configured seeding mode.
    ///
    /// # Errors
    ///
    /// Returns error if a pattern file cannot be read or does not fit the
    /// universe.
    pub fn new(config: LifeConfig) -> LifeResult<Self> {
        let mut rng = LifeRng::new(config.reproducibility.seed);
        let universe = Self::seed_universe(&config, &mut rng)?;

        let mut clock = GenClock::new();
        if let Some(max) = config.run.max_generations {
            clock.set_max(Generation::new(max));
        }

        Ok(Self {
            universe,
            clock,
            rng,
            halt: config.run.halt,
            halted: None,
            last_delta: TickDelta::default(),
            config,
        })
    }

    fn seed_universe(config: &LifeConfig, rng: &mut LifeRng) -> LifeResult<Universe> {
        let width = config.universe.width;
        let height = config.universe.height;

        match config.universe.seeding {
            SeedingMode::Moduli => Ok(Universe::with_moduli_seeding(width, height)),
            SeedingMode::Random => Ok(Universe::random(
                width,
                height,
                config.universe.density,
                rng,
            )),
            SeedingMode::Pattern => {
                // Config validation requires pattern_path in pattern mode
                let pattern = match &config.universe.pattern_path {
                    Some(path) => Pattern::load(path)?,
                    None => {
                        return Err(crate::error::LifeError::config(
                            "pattern seeding requires a pattern path",
                        ))
                    }
                };
                let mut universe = Universe::with_size(width, height);
                pattern.stamp_centered(&mut universe)?;
                Ok(universe)
            }
        }
    }

    /// Get the universe.
    #[must_use]
    pub const fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Get mutable access to the universe.
    #[must_use]
    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    /// Get the current generation.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.clock.current()
    }

    /// Get the configuration the engine was built from.
    #[must_use]
    pub const fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Get why the engine halted, if it has.
    #[must_use]
    pub const fn halted(&self) -> Option<HaltReason> {
        self.halted
    }

    /// Check whether the engine has halted.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Get the delta of the most recent tick.
    #[must_use]
    pub const fn last_delta(&self) -> TickDelta {
        self.last_delta
    }

    /// Render the current snapshot.
    #[must_use]
    pub fn render(&self) -> String {
        self.universe.render()
    }

    /// Advance the simulation by one generation.
    ///
    /// A halted engine stays halted; further steps are no-ops.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the `Result` keeps the seam for
    /// fallible universes.
    pub fn step(&mut self) -> LifeResult<()> {
        if self.halted.is_some() {
            return Ok(());
        }

        self.last_delta = self.universe.tick();
        self.clock.tick();

        // Halt policy, checked in priority order
        if self.clock.at_max() {
            self.halted = Some(HaltReason::MaxGenerations);
        } else if self.halt.on_extinction && self.universe.population() == 0 {
            self.halted = Some(HaltReason::Extinct);
        } else if self.halt.on_quiescence && self.last_delta.is_quiescent() {
            self.halted = Some(HaltReason::Quiescent);
        }

        Ok(())
    }

    /// Run for up to `generations` steps, stopping early on halt.
    ///
    /// Returns the generation reached.
    ///
    /// # Errors
    ///
    /// Returns error if any step fails.
    pub fn run_for(&mut self, generations: u64) -> LifeResult<Generation> {
        for _ in 0..generations {
            if self.is_halted() {
                break;
            }
            self.step()?;
        }
        Ok(self.generation())
    }

    /// Run until the predicate returns true or the engine halts.
    ///
    /// # Errors
    ///
    /// Returns error if any step fails.
    pub fn run_until<F>(&mut self, predicate: F) -> LifeResult<Generation>
    where
        F: Fn(&Universe) -> bool,
    {
        while !predicate(&self.universe) && !self.is_halted() {
            self.step()?;
        }
        Ok(self.generation())
    }

    /// Rebuild the engine from its configuration: fresh universe, clock and
    /// RNG sequence.
    ///
    /// # Errors
    ///
    /// Returns error if pattern seeding fails.
    pub fn reset(&mut self) -> LifeResult<()> {
        self.rng = LifeRng::new(self.config.reproducibility.seed);
        self.universe = Self::seed_universe(&self.config, &mut self.rng)?;
        self.clock.reset();
        self.halted = None;
        self.last_delta = TickDelta::default();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::HaltConfig;

    #[test]
    fn test_generation_creation() {
        let g = Generation::new(5);
        assert_eq!(g.count(), 5);
        assert_eq!(Generation::ZERO.count(), 0);
    }

    #[test]
    fn test_generation_arithmetic() {
        let g = Generation::new(10);
        assert_eq!(g.add(5).count(), 15);
        assert_eq!(g.saturating_sub(3).count(), 7);
        assert_eq!(g.saturating_sub(20), Generation::ZERO);
    }

    #[test]
    fn test_generation_ordering() {
        assert!(Generation::new(1) < Generation::new(2));
        assert_eq!(Generation::new(3), Generation::new(3));
    }

    #[test]
    fn test_generation_display() {
        assert_eq!(Generation::new(42).to_string(), "gen 42");
    }

    #[test]
    fn test_halt_reason_display() {
        assert!(HaltReason::Extinct.to_string().contains("extinct"));
        assert!(HaltReason::Quiescent.to_string().contains("quiescent"));
        assert!(HaltReason::MaxGenerations.to_string().contains("bound"));
    }

    #[test]
    fn test_engine_new() {
        let config = LifeConfig::builder().seed(42).build();
        let engine = LifeEngine::new(config);
        assert!(engine.is_ok());
    }

    #[test]
    fn test_engine_initial_state() {
        let config = LifeConfig::builder().seed(42).build();
        let engine = LifeEngine::new(config).unwrap();
        assert_eq!(engine.generation(), Generation::ZERO);
        assert!(!engine.is_halted());
        assert_eq!(engine.universe().width(), 64);
    }

    #[test]
    fn test_engine_step_advances_generation() {
        let config = LifeConfig::builder().seed(42).build();
        let mut engine = LifeEngine::new(config).unwrap();

        engine.step().unwrap();
        assert_eq!(engine.generation().count(), 1);

        engine.step().unwrap();
        assert_eq!(engine.generation().count(), 2);
    }

    #[test]
    fn test_engine_run_for() {
        let config = LifeConfig::builder().seed(42).build();
        let mut engine = LifeEngine::new(config).unwrap();

        let reached = engine.run_for(10).unwrap();
        assert_eq!(reached.count(), 10);
    }

    #[test]
    fn test_engine_halts_at_max_generations() {
        let config = LifeConfig::builder().seed(42).max_generations(5).build();
        let mut engine = LifeEngine::new(config).unwrap();

        let reached = engine.run_for(100).unwrap();
        assert_eq!(reached.count(), 5);
        assert_eq!(engine.halted(), Some(HaltReason::MaxGenerations));

        // Halted engine stays put
        engine.step().unwrap();
        assert_eq!(engine.generation().count(), 5);
    }

    #[test]
    fn test_engine_halts_on_extinction() {
        // Single live cell dies of underpopulation in one tick
        let config = LifeConfig::builder()
            .seed(1)
            .size(8, 8)
            .density(0.0)
            .seeding(SeedingMode::Random)
            .halt(HaltConfig {
                on_extinction: true,
                on_quiescence: false,
            })
            .build();
        let mut engine = LifeEngine::new(config).unwrap();
        engine.universe_mut().set_alive_at(4, 4, true);

        engine.run_for(10).unwrap();
        assert_eq!(engine.halted(), Some(HaltReason::Extinct));
        assert_eq!(engine.generation().count(), 1);
    }

    #[test]
    fn test_engine_halts_on_quiescence() {
        // A 2x2 block is stable from the first tick
        let config = LifeConfig::builder()
            .seed(1)
            .size(8, 8)
            .density(0.0)
            .seeding(SeedingMode::Random)
            .halt(HaltConfig {
                on_extinction: false,
                on_quiescence: true,
            })
            .build();
        let mut engine = LifeEngine::new(config).unwrap();
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            engine.universe_mut().set_alive_at(row, col, true);
        }

        engine.run_for(10).unwrap();
        assert_eq!(engine.halted(), Some(HaltReason::Quiescent));
        assert_eq!(engine.generation().count(), 1);
        assert_eq!(engine.universe().population(), 4);
    }

    #[test]
    fn test_engine_run_until() {
        let config = LifeConfig::builder().seed(42).build();
        let mut engine = LifeEngine::new(config).unwrap();

        // Predicate immediately true
        let reached = engine.run_until(|_| true).unwrap();
        assert_eq!(reached, Generation::ZERO);
    }

    #[test]
    fn test_engine_pattern_seeding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blinker.cells");
        std::fs::write(&path, "OOO\n").unwrap();

        let config = LifeConfig::builder().size(9, 9).pattern_path(&path).build();
        let engine = LifeEngine::new(config).unwrap();
        assert_eq!(engine.universe().population(), 3);
    }

    #[test]
    fn test_engine_pattern_seeding_missing_file() {
        let config = LifeConfig::builder()
            .size(9, 9)
            .pattern_path("/nonexistent/p.cells")
            .build();
        assert!(LifeEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_reset_reproduces_initial_universe() {
        let config = LifeConfig::builder()
            .seed(77)
            .size(16, 16)
            .seeding(SeedingMode::Random)
            .density(0.4)
            .build();
        let mut engine = LifeEngine::new(config).unwrap();
        let initial = engine.universe().clone();

        engine.run_for(20).unwrap();
        assert_ne!(engine.universe(), &initial);

        engine.reset().unwrap();
        assert_eq!(engine.universe(), &initial);
        assert_eq!(engine.generation(), Generation::ZERO);
        assert!(!engine.is_halted());
    }

    #[test]
    fn test_engine_determinism_across_instances() {
        let build = || {
            LifeEngine::new(
                LifeConfig::builder()
                    .seed(123)
                    .size(24, 24)
                    .seeding(SeedingMode::Random)
                    .density(0.5)
                    .build(),
            )
            .unwrap()
        };

        let mut a = build();
        let mut b = build();
        a.run_for(50).unwrap();
        b.run_for(50).unwrap();
        assert_eq!(a.universe(), b.universe());
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_engine_render_matches_universe() {
        let config = LifeConfig::builder().size(8, 8).build();
        let engine = LifeEngine::new(config).unwrap();
        assert_eq!(engine.render(), engine.universe().render());
    }

    #[test]
    fn test_engine_last_delta() {
        let config = LifeConfig::builder().seed(42).build();
        let mut engine = LifeEngine::new(config).unwrap();
        assert_eq!(engine.last_delta(), TickDelta::default());

        engine.step().unwrap();
        // The moduli seeding is dense; the first tick changes many cells
        assert!(!engine.last_delta().is_quiescent());
    }
}
