//! Ship definitions: length, orientation, hit counter and occupied cells.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coordinate;
use crate::config::DEFAULT_SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along increasing column from the origin.
    #[default]
    Horizontal,
    /// Extends along increasing row from the origin.
    Vertical,
}

impl Orientation {
    /// Coordinate `step` cells away from `origin` in this direction, or
    /// `None` on overflow.
    pub fn step(self, origin: Coordinate, step: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => origin
                .col
                .checked_add(step)
                .map(|col| Coordinate::new(origin.row, col)),
            Orientation::Vertical => origin
                .row
                .checked_add(step)
                .map(|row| Coordinate::new(row, origin.col)),
        }
    }

    /// Pick one of the two orientations with equal probability.
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A linear vessel. The ship does not own its cells, it records the
/// coordinates it occupies on the board it was placed on.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    hits: usize,
    cells: Vec<Coordinate>,
}

impl Ship {
    /// Create an unplaced ship. Length is checked at placement time.
    pub fn new(length: usize, orientation: Orientation) -> Self {
        Self {
            length,
            orientation,
            hits: 0,
            cells: Vec::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Number of hits taken so far. May exceed `length`.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Record a hit. Hits past `length` still count.
    pub fn register_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    /// Bind the cells this ship occupies, replacing any previous binding.
    pub fn assign_cells(&mut self, cells: Vec<Coordinate>) {
        self.cells = cells;
    }

    /// Occupied cells in order from the origin.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Origin cell, if placed.
    pub fn origin(&self) -> Option<Coordinate> {
        self.cells.first().copied()
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    pub fn occupies(&self, target: Coordinate) -> bool {
        self.cells.iter().any(|&c| c == target)
    }

    pub fn is_sunk(&self) -> bool {
        self.hits >= self.length
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new(DEFAULT_SHIP_LENGTH, Orientation::Horizontal)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, orientation: {:?}, hits: {}, origin: {:?} }}",
            self.length,
            self.orientation,
            self.hits,
            self.origin(),
        )
    }
}
