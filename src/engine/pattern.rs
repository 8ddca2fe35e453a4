//! Plaintext pattern support.
//!
//! Parses the plaintext `.cells` format: lines starting with `!` are
//! comments, `.` is a dead cell, `O` (or `*`) a live cell. Shorter lines are
//! padded with dead cells to the widest line.

use std::path::Path;

use crate::engine::universe::Universe;
use crate::error::{LifeError, LifeResult};

const GLIDER: &str = "\
!Name: Glider
.O.
..O
OOO
";

const BLINKER: &str = "\
!Name: Blinker
OOO
";

const TOAD: &str = "\
!Name: Toad
.OOO
OOO.
";

/// A parsed plaintext pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    width: u32,
    height: u32,
    /// Live cells as (row, col) offsets from the top-left corner.
    cells: Vec<(u32, u32)>,
}

impl Pattern {
    /// Parse a pattern from plaintext.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::PatternParse` on an unexpected character or an
    /// empty pattern.
    pub fn parse(name: impl Into<String>, text: &str) -> LifeResult<Self> {
        let mut cells = Vec::new();
        let mut width = 0u32;
        let mut row = 0u32;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.starts_with('!') {
                continue;
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    'O' | '*' => cells.push((row, col as u32)),
                    other => {
                        return Err(LifeError::pattern(
                            line_no + 1,
                            format!("unexpected character '{other}'"),
                        ));
                    }
                }
            }

            width = width.max(line.chars().count() as u32);
            row += 1;
        }

        if row == 0 || width == 0 {
            return Err(LifeError::pattern(1, "pattern has no cells"));
        }

        Ok(Self {
            name: name.into(),
            width,
            height: row,
            cells,
        })
    }

    /// Load a pattern from a `.cells` file.
    ///
    /// The pattern name is the file stem.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> LifeResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map_or_else(|| "pattern".to_string(), |s| s.to_string_lossy().into_owned());
        let text = std::fs::read_to_string(path)?;
        Self::parse(name, &text)
    }

    /// Look up a built-in pattern by name.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        let text = match name {
            "glider" => GLIDER,
            "blinker" => BLINKER,
            "toad" => TOAD,
            _ => return None,
        };
        // Built-in sources are known-good
        Self::parse(name, text).ok()
    }

    /// Names of all built-in patterns.
    #[must_use]
    pub fn builtin_names() -> &'static [&'static str] {
        &["glider", "blinker", "toad"]
    }

    /// Pattern name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding-box width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Bounding-box height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Live cells as (row, col) offsets.
    #[must_use]
    pub fn cells(&self) -> &[(u32, u32)] {
        &self.cells
    }

    /// Stamp the pattern onto a universe with its top-left corner at
    /// `(top, left)`.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::PatternDoesNotFit` if the bounding box exceeds the
    /// universe.
    pub fn stamp(&self, universe: &mut Universe, top: u32, left: u32) -> LifeResult<()> {
        let fits_vertically = top
            .checked_add(self.height)
            .is_some_and(|bottom| bottom <= universe.height());
        let fits_horizontally = left
            .checked_add(self.width)
            .is_some_and(|right| right <= universe.width());
        if !fits_vertically || !fits_horizontally {
            return Err(LifeError::PatternDoesNotFit {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
                row: top,
                col: left,
            });
        }

        for &(row, col) in &self.cells {
            universe.set_alive_at(top + row, left + col, true);
        }
        Ok(())
    }

    /// Stamp the pattern into the center of the universe.
    ///
    /// # Errors
    ///
    /// Returns `LifeError::PatternDoesNotFit` if the pattern is larger than
    /// the universe.
    pub fn stamp_centered(&self, universe: &mut Universe) -> LifeResult<()> {
        if self.height > universe.height() || self.width > universe.width() {
            return Err(LifeError::PatternDoesNotFit {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
                row: 0,
                col: 0,
            });
        }
        let top = (universe.height() - self.height) / 2;
        let left = (universe.width() - self.width) / 2;
        self.stamp(universe, top, left)
    }
}
