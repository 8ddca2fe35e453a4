//! The render loop.
//!
//! An explicit owner object replaces the self-rescheduling callback of the
//! original driver: the loop holds the engine and an injected output
//! surface, and each frame presents the current snapshot *before* advancing
//! the universe. The order within a frame is always present, then step,
//! never reordered.
//!
//! Unbounded recursion is replaced by explicit control: `run_frame` drives a
//! single frame, `run_frames` a bounded burst, and `run` continues until the
//! engine's halt policy fires.

use std::io::Write;

use crate::engine::{Generation, LifeEngine};
use crate::error::LifeResult;

/// An output surface the loop presents snapshots to.
///
/// The surface is injected at loop construction and must stay valid for the
/// life of the loop; a failed presentation stops the loop and propagates.
pub trait Surface {
    /// Present one rendered frame.
    ///
    /// # Errors
    ///
    /// Returns error if the frame cannot be written.
    fn present(&mut self, frame: &str) -> LifeResult<()>;
}

/// In-memory surface holding the most recent frame.
///
/// Used by the interactive frontend and by tests.
#[derive(Debug, Default)]
pub struct TextSurface {
    last: Option<String>,
    presented: u64,
}

impl TextSurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented frame, if any.
    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// How many frames have been presented.
    #[must_use]
    pub const fn presented(&self) -> u64 {
        self.presented
    }
}

impl Surface for TextSurface {
    fn present(&mut self, frame: &str) -> LifeResult<()> {
        self.last = Some(frame.to_string());
        self.presented += 1;
        Ok(())
    }
}

/// Surface that streams frames to a writer, separated by a blank line.
#[derive(Debug)]
pub struct WriterSurface<W: Write> {
    writer: W,
}

impl<W: Write> WriterSurface<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for WriterSurface<W> {
    fn present(&mut self, frame: &str) -> LifeResult<()> {
        writeln!(self.writer, "{frame}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// The frame-driven render loop.
///
/// Owns the simulation handle and the output surface for its whole lifetime.
pub struct RenderLoop<S: Surface> {
    engine: LifeEngine,
    surface: S,
    frames: u64,
}

impl<S: Surface> RenderLoop<S> {
    /// Create a loop over an engine and a surface.
    pub fn new(engine: LifeEngine, surface: S) -> Self {
        Self {
            engine,
            surface,
            frames: 0,
        }
    }

    /// Drive a single frame: present the current snapshot, then advance the
    /// universe by one generation.
    ///
    /// # Errors
    ///
    /// Returns error if presentation or stepping fails; the frame is not
    /// counted and the loop should not be driven further.
    pub fn run_frame(&mut self) -> LifeResult<()> {
        let snapshot = self.engine.render();
        self.surface.present(&snapshot)?;
        self.engine.step()?;
        self.frames += 1;
        Ok(())
    }

    /// Drive up to `n` frames, stopping early once the engine halts.
    ///
    /// Returns the number of frames actually driven.
    ///
    /// # Errors
    ///
    /// Returns error if any frame fails.
    pub fn run_frames(&mut self, n: u64) -> LifeResult<u64> {
        let mut driven = 0;
        for _ in 0..n {
            if self.engine.is_halted() {
                break;
            }
            self.run_frame()?;
            driven += 1;
        }
        Ok(driven)
    }

    /// Drive frames until the engine's halt policy fires.
    ///
    /// With no generation bound and no halt policy this loops forever, which
    /// matches the original driver's "repeat indefinitely" contract.
    ///
    /// # Errors
    ///
    /// Returns error if any frame fails.
    pub fn run(&mut self) -> LifeResult<u64> {
        while !self.engine.is_halted() {
            self.run_frame()?;
        }
        Ok(self.frames)
    }

    /// Total frames driven so far.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Generation the engine has reached.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.engine.generation()
    }

    /// Get the engine.
    #[must_use]
    pub const fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    /// Get the surface.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Take the loop apart.
    #[must_use]
    pub fn into_parts(self) -> (LifeEngine, S) {
        (self.engine, self.surface)
    }
}
