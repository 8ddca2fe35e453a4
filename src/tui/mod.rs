//! TUI module for lifelab.
//!
//! Contains the testable application state and logic for the interactive
//! frontend. Terminal I/O lives in `src/bin/life_tui.rs`; everything that
//! can be tested without a terminal lives here.

pub mod app;

pub use app::LifeApp;
