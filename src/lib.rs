//! # lifelab
//!
//! A deterministic Conway's Game of Life laboratory.
//!
//! lifelab couples a bit-packed toroidal universe with an explicit,
//! frame-driven render loop: every frame presents the current snapshot to an
//! injected output surface, then advances the universe by exactly one
//! generation. The same engine drives a headless CLI and an interactive
//! terminal frontend.
//!
//! ## Example
//!
//! ```rust
//! use lifelab::prelude::*;
//!
//! let config = LifeConfig::builder()
//!     .seed(42)
//!     .size(32, 32)
//!     .build();
//! let engine = LifeEngine::new(config).unwrap();
//! assert_eq!(engine.generation(), Generation::ZERO);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
    clippy::needless_range_loop,   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod visualization;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{LifeConfig, LifeConfigBuilder, SeedingMode};
    pub use crate::driver::{RenderLoop, Surface, TextSurface};
    pub use crate::engine::universe::Universe;
    pub use crate::engine::{Generation, HaltReason, LifeEngine};
    pub use crate::error::{LifeError, LifeResult};
}

/// Re-export for public API
pub use error::{LifeError, LifeResult};
