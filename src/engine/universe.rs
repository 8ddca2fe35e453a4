//! The cell universe: a bit-packed toroidal Game of Life grid.
//!
//! One bit per cell, most significant bit first within a byte. For a cell at
//! `(row, col)` the linear index is `row * width + col`; the bit lives in
//! byte `index / 8` at shift `7 - (index % 8)`.
//!
//! The update rule is the standard B3/S23:
//! - a live cell with fewer than two live neighbors dies (underpopulation)
//! - a live cell with two or three live neighbors survives
//! - a live cell with more than three live neighbors dies (overpopulation)
//! - a dead cell with exactly three live neighbors becomes alive (reproduction)
//!
//! Neighbor counting wraps around both axes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::rng::LifeRng;
use crate::error::{LifeError, LifeResult};

/// Glyph for a live cell in rendered snapshots.
pub const ALIVE_GLYPH: char = '◼';
/// Glyph for a dead cell in rendered snapshots.
pub const DEAD_GLYPH: char = '◻';

/// Cell changes produced by a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickDelta {
    /// Cells that went from dead to alive.
    pub births: u32,
    /// Cells that went from alive to dead.
    pub deaths: u32,
}

impl TickDelta {
    /// Whether the tick changed no cell at all.
    #[must_use]
    pub const fn is_quiescent(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// A toroidal Game of Life universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl Universe {
    /// Create the classic 64x64 universe with the fixed moduli seeding: a
    /// cell is alive when its linear index is divisible by 2 or by 7.
    #[must_use]
    pub fn new() -> Self {
        Self::with_moduli_seeding(64, 64)
    }

    /// Create an empty universe of the given size.
    ///
    /// Dimensions are assumed nonzero; the config layer enforces this.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        let byte_len = byte_len(width, height);
        Self {
            width,
            height,
            bytes: vec![0; byte_len],
        }
    }

    /// Create a universe with moduli seeding at an arbitrary size.
    #[must_use]
    pub fn with_moduli_seeding(width: u32, height: u32) -> Self {
        let mut universe = Self::with_size(width, height);
        let cells = u64::from(width) * u64::from(height);
        for index in 0..cells {
            if index % 2 == 0 || index % 7 == 0 {
                let row = (index / u64::from(width)) as u32;
                let col = (index % u64::from(width)) as u32;
                universe.set_alive_at(row, col, true);
            }
        }
        universe
    }

    /// Create a random soup: each cell is alive with probability `density`,
    /// drawn from the given RNG in row-major order.
    #[must_use]
    pub fn random(width: u32, height: u32, density: f64, rng: &mut LifeRng) -> Self {
        let mut universe = Self::with_size(width, height);
        for row in 0..height {
            for col in 0..width {
                if rng.gen_bool(density) {
                    universe.set_alive_at(row, col, true);
                }
            }
        }
        universe
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw bit-packed cell bytes.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// Coordinates must be in range; use [`Universe::get`] for a checked
    /// lookup.
    #[must_use]
    pub fn is_alive_at(&self, row: u32, col: u32) -> bool {
        let (index, shift) = index_and_shift(row, col, self.width);
        self.bytes[index] & (1 << shift) != 0
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Coordinates must be in range; use [`Universe::set`] for a checked
    /// write.
    pub fn set_alive_at(&mut self, row: u32, col: u32, alive: bool) {
        let (index, shift) = index_and_shift(row, col, self.width);
        if alive {
            self.bytes[index] |= 1 << shift;
        } else {
            self.bytes[index] &= !(1 << shift);
        }
    }

    /// Checked cell lookup.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::OutOfBounds` if the coordinate is outside the
    /// grid.
    pub fn get(&self, row: u32, col: u32) -> LifeResult<bool> {
        self.check_bounds(row, col)?;
        Ok(self.is_alive_at(row, col))
    }

    /// Checked cell write.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::OutOfBounds` if the coordinate is outside the
    /// grid.
    pub fn set(&mut self, row: u32, col: u32, alive: bool) -> LifeResult<()> {
        self.check_bounds(row, col)?;
        self.set_alive_at(row, col, alive);
        Ok(())
    }

    fn check_bounds(&self, row: u32, col: u32) -> LifeResult<()> {
        if row >= self.height || col >= self.width {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Count live neighbors of `(row, col)` with toroidal wraparound.
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0;
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }

                let neighbor_row = (row + delta_row) % self.height;
                let neighbor_col = (col + delta_col) % self.width;
                if self.is_alive_at(neighbor_row, neighbor_col) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance the universe by one generation.
    ///
    /// Returns the number of births and deaths the tick produced.
    pub fn tick(&mut self) -> TickDelta {
        let mut next = self.bytes.clone();
        let mut delta = TickDelta::default();

        for row in 0..self.height {
            for col in 0..self.width {
                let is_alive = self.is_alive_at(row, col);
                let live_neighbors = self.live_neighbor_count(row, col);

                let next_cell = match (is_alive, live_neighbors) {
                    (true, x) if x < 2 => false,
                    (true, 2 | 3) => true,
                    (true, x) if x > 3 => false,
                    (false, 3) => true,
                    (otherwise, _) => otherwise,
                };

                match (is_alive, next_cell) {
                    (false, true) => delta.births += 1,
                    (true, false) => delta.deaths += 1,
                    _ => {}
                }

                let (index, shift) = index_and_shift(row, col, self.width);
                if next_cell {
                    next[index] |= 1 << shift;
                } else {
                    next[index] &= !(1 << shift);
                }
            }
        }

        self.bytes = next;
        delta
    }

    /// Render a textual snapshot: one line per row, rows joined by `\n`.
    #[must_use]
    pub fn render(&self) -> String {
        // Glyphs are 3 bytes each in UTF-8
        let capacity = (self.width as usize * 3 + 1) * self.height as usize;
        let mut out = String::with_capacity(capacity);
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(if self.is_alive_at(row, col) {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                });
            }
            if row + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    ((u64::from(width) * u64::from(height) + 7) / 8) as usize
}

fn index_and_shift(row: u32, col: u32, width: u32) -> (usize, usize) {
    let index = (u64::from(row) * u64::from(width) + u64::from(col)) as usize;
    (index / 8, 7 - (index % 8))
}
