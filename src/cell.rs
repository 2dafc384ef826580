//! A single grid position and its status.

use crate::common::Coordinate;

/// What a cell currently shows.
///
/// Cells start as `Ocean` and move to `Ship` on placement or `Miss` on a
/// missed attack. Neither of those goes back to `Ocean`; only rebuilding the
/// board does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Ocean,
    Ship,
    Miss,
}

/// One position on a [`crate::Gameboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coordinates: Coordinate,
    status: CellStatus,
}

impl Cell {
    /// Create an ocean cell at `coordinates`.
    pub fn new(coordinates: Coordinate) -> Self {
        Self::with_status(coordinates, CellStatus::Ocean)
    }

    pub fn with_status(coordinates: Coordinate, status: CellStatus) -> Self {
        Self {
            coordinates,
            status,
        }
    }

    pub fn coordinates(&self) -> Coordinate {
        self.coordinates
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    /// Overwrite the status. No transition checks happen here; the board only
    /// ever calls this on ocean cells.
    pub fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    pub fn is_ocean(&self) -> bool {
        self.status == CellStatus::Ocean
    }
}
