//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs
//! - Schema validation via serde + validator derives
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{LifeError, LifeResult};

/// Top-level simulation configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LifeConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Universe geometry and seeding.
    #[validate(nested)]
    #[serde(default)]
    pub universe: UniverseConfig,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Run control: bounds, refresh rate, halt policy.
    #[validate(nested)]
    #[serde(default)]
    pub run: RunConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl LifeConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> LifeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> LifeResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Schema constraints first, then semantics
        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> LifeConfigBuilder {
        LifeConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> LifeResult<()> {
        if !(0.0..=1.0).contains(&self.universe.density) {
            return Err(LifeError::config(format!(
                "Soup density must be within [0, 1], got {}",
                self.universe.density
            )));
        }

        if self.universe.seeding == SeedingMode::Pattern && self.universe.pattern_path.is_none() {
            return Err(LifeError::config(
                "Pattern seeding requires universe.pattern_path",
            ));
        }

        if self.run.max_generations == Some(0) {
            return Err(LifeError::config(
                "run.max_generations must be at least 1 when set",
            ));
        }

        Ok(())
    }

    /// Get the number of cells in the configured universe.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.universe.width as u64 * self.universe.height as u64
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            universe: UniverseConfig::default(),
            reproducibility: ReproducibilityConfig::default(),
            run: RunConfig::default(),
        }
    }
}

/// Universe geometry and initial population.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UniverseConfig {
    /// Grid width in cells.
    #[validate(range(min = 1, max = 4096))]
    #[serde(default = "default_dimension")]
    pub width: u32,

    /// Grid height in cells.
    #[validate(range(min = 1, max = 4096))]
    #[serde(default = "default_dimension")]
    pub height: u32,

    /// How the initial generation is populated.
    #[serde(default)]
    pub seeding: SeedingMode,

    /// Alive-cell probability for random soups.
    #[serde(default = "default_density")]
    pub density: f64,

    /// Pattern file for `SeedingMode::Pattern`.
    #[serde(default)]
    pub pattern_path: Option<PathBuf>,
}

fn default_dimension() -> u32 {
    64
}

fn default_density() -> f64 {
    0.5
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: default_dimension(),
            height: default_dimension(),
            seeding: SeedingMode::default(),
            density: default_density(),
            pattern_path: None,
        }
    }
}

/// Initial seeding strategy for generation zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMode {
    /// The classic fixed seeding: a cell is alive when its linear index is
    /// divisible by 2 or by 7.
    #[default]
    Moduli,
    /// Random soup drawn from the seeded RNG at the configured density.
    Random,
    /// Stamp a plaintext pattern file into the center of an empty universe.
    Pattern,
}

/// Reproducibility settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReproducibilityConfig {
    /// Master RNG seed. Identical seeds give bitwise-identical runs.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Run control.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Stop after this many generations. `None` runs indefinitely.
    #[serde(default)]
    pub max_generations: Option<u64>,

    /// Display refresh rate for the interactive frontend, in Hz.
    #[validate(range(min = 1, max = 240))]
    #[serde(default = "default_refresh_hz")]
    pub refresh_hz: u32,

    /// Halt policy checked after every step.
    #[serde(default)]
    pub halt: HaltConfig,
}

fn default_refresh_hz() -> u32 {
    30
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            refresh_hz: default_refresh_hz(),
            halt: HaltConfig::default(),
        }
    }
}

/// Stop-on-condition policy, checked by the engine after each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HaltConfig {
    /// Halt when the population reaches zero.
    #[serde(default)]
    pub on_extinction: bool,

    /// Halt when a tick changes no cell.
    #[serde(default)]
    pub on_quiescence: bool,
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct LifeConfigBuilder {
    seed: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
    seeding: Option<SeedingMode>,
    density: Option<f64>,
    max_generations: Option<u64>,
    refresh_hz: Option<u32>,
    halt: Option<HaltConfig>,
    pattern_path: Option<PathBuf>,
}

impl LifeConfigBuilder {
    /// Set the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set universe dimensions.
    #[must_use]
    pub const fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the seeding mode.
    #[must_use]
    pub const fn seeding(mut self, mode: SeedingMode) -> Self {
        self.seeding = Some(mode);
        self
    }

    /// Set the random soup density.
    #[must_use]
    pub const fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Set the generation bound.
    #[must_use]
    pub const fn max_generations(mut self, generations: u64) -> Self {
        self.max_generations = Some(generations);
        self
    }

    /// Set the display refresh rate.
    #[must_use]
    pub const fn refresh_hz(mut self, hz: u32) -> Self {
        self.refresh_hz = Some(hz);
        self
    }

    /// Set the halt policy.
    #[must_use]
    pub const fn halt(mut self, halt: HaltConfig) -> Self {
        self.halt = Some(halt);
        self
    }

    /// Set the pattern file path (implies `SeedingMode::Pattern`).
    #[must_use]
    pub fn pattern_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.pattern_path = Some(path.into());
        self.seeding = Some(SeedingMode::Pattern);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> LifeConfig {
        let mut config = LifeConfig::default();
        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }
        if let Some(width) = self.width {
            config.universe.width = width;
        }
        if let Some(height) = self.height {
            config.universe.height = height;
        }
        if let Some(seeding) = self.seeding {
            config.universe.seeding = seeding;
        }
        if let Some(density) = self.density {
            config.universe.density = density;
        }
        if let Some(path) = self.pattern_path {
            config.universe.pattern_path = Some(path);
        }
        config.run.max_generations = self.max_generations;
        if let Some(hz) = self.refresh_hz {
            config.run.refresh_hz = hz;
        }
        if let Some(halt) = self.halt {
            config.run.halt = halt;
        }
        config
    }
}
