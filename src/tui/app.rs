//! Life TUI application state and logic.
//!
//! State management for the interactive frontend: pausing, speed scaling,
//! reset, and per-frame metrics. The binary owns the terminal; within one
//! drawn frame the grid text is the snapshot taken before that frame's
//! step, preserving the present-then-step order of the render loop.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::config::LifeConfig;
use crate::engine::LifeEngine;
use crate::error::LifeResult;
use crate::visualization::{LifeMetrics, TimeSeries};

/// How many samples the population sparkline keeps.
const POPULATION_HISTORY: usize = 200;

/// Upper bound for the speed scale.
const MAX_STEPS_PER_FRAME: u32 = 64;

/// Application state for the life TUI.
pub struct LifeApp {
    /// Simulation engine.
    pub engine: LifeEngine,
    /// Whether the simulation is paused.
    pub paused: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Generations advanced per drawn frame.
    pub steps_per_frame: u32,
    /// Frame counter.
    pub frame_count: u64,
    /// Current metrics.
    pub metrics: LifeMetrics,
    /// Population history for the sparkline.
    pub population_series: TimeSeries,
    /// Status message.
    pub status: String,
}

impl LifeApp {
    /// Create an app with the default configuration.
    ///
    /// # Panics
    ///
    /// Never in practice: the default config uses moduli seeding and reads
    /// no files.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::from_config(LifeConfig::default()).expect("default config is self-contained")
    }

    /// Create from a specific configuration.
    ///
    /// # Errors
    ///
    /// Returns error if engine construction fails (for example a missing
    /// pattern file).
    pub fn from_config(config: LifeConfig) -> LifeResult<Self> {
        let engine = LifeEngine::new(config)?;
        let mut metrics = LifeMetrics::new();
        metrics.update_from_universe(
            engine.universe(),
            engine.generation(),
            engine.last_delta(),
        );

        Ok(Self {
            engine,
            paused: false,
            should_quit: false,
            steps_per_frame: 1,
            frame_count: 0,
            metrics,
            population_series: TimeSeries::new("population", POPULATION_HISTORY),
            status: "Ready".to_string(),
        })
    }

    /// Display refresh rate from the configuration, in Hz.
    #[must_use]
    pub fn refresh_hz(&self) -> u32 {
        self.engine.config().run.refresh_hz
    }

    /// The grid text to draw this frame.
    #[must_use]
    pub fn grid_text(&self) -> String {
        self.engine.render()
    }

    /// Update the simulation for one frame.
    pub fn update(&mut self) {
        if self.paused {
            return;
        }

        let before = self.engine.generation().count();
        let started = Instant::now();
        for _ in 0..self.steps_per_frame {
            if self.engine.is_halted() {
                break;
            }
            if self.engine.step().is_err() {
                self.paused = true;
                self.status = "Engine error; paused".to_string();
                break;
            }
        }
        let stepped = self.engine.generation().count() - before;

        if let Some(reason) = self.engine.halted() {
            self.status = format!("Halted: {reason}");
        }

        self.metrics.update_from_universe(
            self.engine.universe(),
            self.engine.generation(),
            self.engine.last_delta(),
        );
        self.metrics.record_throughput(stepped, started.elapsed());
        self.population_series.push(
            self.engine.generation().count(),
            f64::from(self.metrics.population),
        );

        self.frame_count += 1;
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                self.status = if self.paused {
                    "Paused by user".to_string()
                } else {
                    "Resumed".to_string()
                };
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('+' | '=') => {
                self.steps_per_frame = (self.steps_per_frame * 2).min(MAX_STEPS_PER_FRAME);
            }
            KeyCode::Char('-') => {
                self.steps_per_frame = (self.steps_per_frame / 2).max(1);
            }
            _ => {}
        }
    }

    /// Reset the simulation to generation zero.
    pub fn reset(&mut self) {
        if self.engine.reset().is_err() {
            self.paused = true;
            self.status = "Reset failed; paused".to_string();
            return;
        }
        self.frame_count = 0;
        self.population_series.clear();
        self.metrics.update_from_universe(
            self.engine.universe(),
            self.engine.generation(),
            self.engine.last_delta(),
        );
        self.status = "Reset".to_string();
    }
}

impl Default for LifeApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::SeedingMode;
    use crate::engine::Generation;

    #[test]
    fn test_new_app() {
        let app = LifeApp::new();
        assert!(!app.paused);
        assert!(!app.should_quit);
        assert_eq!(app.frame_count, 0);
        assert_eq!(app.steps_per_frame, 1);
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn test_update_advances_one_generation_per_frame() {
        let mut app = LifeApp::new();
        app.update();
        assert_eq!(app.engine.generation().count(), 1);
        assert_eq!(app.frame_count, 1);

        app.update();
        assert_eq!(app.engine.generation().count(), 2);
    }

    #[test]
    fn test_update_respects_pause() {
        let mut app = LifeApp::new();
        app.paused = true;
        app.update();
        assert_eq!(app.engine.generation(), Generation::ZERO);
        assert_eq!(app.frame_count, 0);
    }

    #[test]
    fn test_update_tracks_metrics() {
        let mut app = LifeApp::new();
        app.update();
        assert_eq!(app.metrics.generation, 1);
        assert_eq!(app.population_series.len(), 1);
    }

    #[test]
    fn test_update_measures_throughput() {
        let mut app = LifeApp::new();
        assert!(app.metrics.generations_per_second.abs() < f64::EPSILON);

        for _ in 0..100 {
            app.update();
        }
        assert_eq!(app.metrics.generation, 100);
        assert!(app.metrics.generations_per_second > 0.0);
    }

    #[test]
    fn test_paused_update_leaves_throughput_untouched() {
        let mut app = LifeApp::new();
        app.update();
        let reading = app.metrics.generations_per_second;

        app.paused = true;
        app.update();
        assert!((app.metrics.generations_per_second - reading).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_text_matches_engine_render() {
        let app = LifeApp::new();
        assert_eq!(app.grid_text(), app.engine.render());
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = LifeApp::new();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_esc() {
        let mut app = LifeApp::new();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_key_pause_toggle() {
        let mut app = LifeApp::new();
        app.handle_key(KeyCode::Char(' '));
        assert!(app.paused);
        assert_eq!(app.status, "Paused by user");

        app.handle_key(KeyCode::Char(' '));
        assert!(!app.paused);
        assert_eq!(app.status, "Resumed");
    }

    #[test]
    fn test_handle_key_speed_scale() {
        let mut app = LifeApp::new();
        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.steps_per_frame, 2);

        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.steps_per_frame, 4);

        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.steps_per_frame, 2);
    }

    #[test]
    fn test_speed_scale_bounds() {
        let mut app = LifeApp::new();
        for _ in 0..20 {
            app.handle_key(KeyCode::Char('+'));
        }
        assert_eq!(app.steps_per_frame, MAX_STEPS_PER_FRAME);

        for _ in 0..20 {
            app.handle_key(KeyCode::Char('-'));
        }
        assert_eq!(app.steps_per_frame, 1);
    }

    #[test]
    fn test_handle_key_reset() {
        let mut app = LifeApp::new();
        for _ in 0..10 {
            app.update();
        }
        assert_eq!(app.frame_count, 10);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.frame_count, 0);
        assert_eq!(app.engine.generation(), Generation::ZERO);
        assert!(app.population_series.is_empty());
        assert_eq!(app.status, "Reset");
    }

    #[test]
    fn test_reset_reproduces_initial_grid() {
        let config = LifeConfig::builder()
            .seed(5)
            .size(16, 16)
            .seeding(SeedingMode::Random)
            .density(0.5)
            .build();
        let mut app = LifeApp::from_config(config).unwrap();
        let initial = app.grid_text();

        for _ in 0..5 {
            app.update();
        }
        app.reset();
        assert_eq!(app.grid_text(), initial);
    }

    #[test]
    fn test_halt_updates_status() {
        let config = LifeConfig::builder()
            .seed(42)
            .size(16, 16)
            .max_generations(2)
            .build();
        let mut app = LifeApp::from_config(config).unwrap();

        app.update();
        app.update();
        assert!(app.engine.is_halted());
        assert!(app.status.contains("Halted"));
    }

    #[test]
    fn test_steps_per_frame_multiplies_generations() {
        let mut app = LifeApp::new();
        app.steps_per_frame = 4;
        app.update();
        assert_eq!(app.engine.generation().count(), 4);
        assert_eq!(app.frame_count, 1);
    }

    #[test]
    fn test_refresh_hz_from_config() {
        let config = LifeConfig::builder().refresh_hz(60).build();
        let app = LifeApp::from_config(config).unwrap();
        assert_eq!(app.refresh_hz(), 60);
    }
}
