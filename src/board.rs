//! Game board: a grid of cells, ship placement and attack resolution.

use alloc::{collections::BTreeSet, vec::Vec};
use rand::Rng;

use crate::cell::{Cell, CellStatus};
use crate::common::{AttackResult, BoardError, Coordinate};
use crate::config::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::ship::{Orientation, Ship};

/// Random origins tried per ship before falling back to first-fit.
const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// One player's grid. Cells are stored row-major and addressed by
/// `(row, col)` [`Coordinate`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gameboard {
    columns: usize,
    rows: usize,
    grid: Vec<Cell>,
    shots_fired: BTreeSet<Coordinate>,
    missed_shots: BTreeSet<Coordinate>,
}

impl Gameboard {
    /// Create a board filled with ocean cells.
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Self::ocean(columns, rows))
    }

    fn ocean(columns: usize, rows: usize) -> Self {
        let grid = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Cell::new(Coordinate::new(row, col))))
            .collect();
        Self {
            columns,
            rows,
            grid,
            shots_fired: BTreeSet::new(),
            missed_shots: BTreeSet::new(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.columns
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.row * self.columns + coord.col)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        self.index(coord).map(|i| &self.grid[i])
    }

    fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        let i = self.index(coord)?;
        Some(&mut self.grid[i])
    }

    pub fn status(&self, coord: Coordinate) -> Option<CellStatus> {
        self.cell(coord).map(Cell::status)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    /// Every coordinate this board has been attacked at.
    pub fn shots_fired(&self) -> &BTreeSet<Coordinate> {
        &self.shots_fired
    }

    /// The subset of [`Self::shots_fired`] that resolved as a miss.
    pub fn missed_shots(&self) -> &BTreeSet<Coordinate> {
        &self.missed_shots
    }

    pub fn has_fired_at(&self, coord: Coordinate) -> bool {
        self.shots_fired.contains(&coord)
    }

    /// Cells a ship of `length` would cover from `origin`, in order.
    pub fn span(
        &self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        (0..length)
            .map(|i| {
                orientation
                    .step(origin, i)
                    .filter(|&c| self.in_bounds(c))
                    .ok_or(BoardError::OutOfBounds)
            })
            .collect()
    }

    /// Cells the ship would cover, if they are all in bounds and ocean.
    fn free_span(
        &self,
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let span = self.span(origin, length, orientation)?;
        if span
            .iter()
            .any(|&c| self.status(c) != Some(CellStatus::Ocean))
        {
            return Err(BoardError::ShipOverlaps);
        }
        Ok(span)
    }

    /// Place `ship` with its origin at `origin`. On failure the board and the
    /// ship are left untouched. A ship already bound to cells is rejected, so
    /// every `Ship` cell keeps belonging to exactly one ship.
    pub fn place_ship(
        &mut self,
        ship: &mut Ship,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let span = self.free_span(origin, ship.length(), orientation)?;
        for &c in &span {
            if let Some(cell) = self.cell_mut(c) {
                cell.set_status(CellStatus::Ship);
            }
        }
        log::debug!(
            "placed ship of length {} at {} {:?}",
            ship.length(),
            origin,
            orientation
        );
        ship.set_orientation(orientation);
        ship.assign_cells(span);
        Ok(())
    }

    /// Place every ship at a uniformly random origin, keeping each ship's own
    /// orientation. Fails if some ship has no legal position left.
    pub fn place_ships_randomly<R: Rng>(
        &mut self,
        ships: &mut [Ship],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        if ships.iter().any(Ship::is_placed) {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        for ship in ships.iter_mut() {
            let fallback = self
                .find_first_legal_position(ship)
                .ok_or(BoardError::UnableToPlaceShip)?;
            let orientation = ship.orientation();
            let mut placed = false;
            for _ in 0..MAX_RANDOM_ATTEMPTS {
                let origin = Coordinate::new(
                    rng.random_range(0..self.rows),
                    rng.random_range(0..self.columns),
                );
                if self.place_ship(ship, origin, orientation).is_ok() {
                    placed = true;
                    break;
                }
            }
            if !placed {
                log::warn!(
                    "random placement gave up after {} attempts, using {}",
                    MAX_RANDOM_ATTEMPTS,
                    fallback
                );
                self.place_ship(ship, fallback, orientation)?;
            }
        }
        Ok(())
    }

    /// First origin, scanning rows then columns, where `ship` fits in its
    /// current orientation over ocean cells only.
    pub fn find_first_legal_position(&self, ship: &Ship) -> Option<Coordinate> {
        (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| Coordinate::new(row, col)))
            .find(|&origin| {
                self.free_span(origin, ship.length(), ship.orientation())
                    .is_ok()
            })
    }

    /// Resolve an attack at `target` against `defending_ships`.
    ///
    /// Repeated attacks are accepted: the shot history is a set, and a ship
    /// hit again takes another hit even when already sunk.
    pub fn resolve_attack(
        &mut self,
        target: Coordinate,
        defending_ships: &mut [Ship],
    ) -> Result<AttackResult, BoardError> {
        if !self.in_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        self.shots_fired.insert(target);

        if let Some(ship) = defending_ships.iter_mut().find(|s| s.occupies(target)) {
            ship.register_hit();
            log::debug!("attack at {} hit ({} hits)", target, ship.hits());
            return Ok(AttackResult::Hit);
        }

        self.record_miss(target);
        log::debug!("attack at {} missed", target);
        Ok(AttackResult::Miss)
    }

    /// Record an attack already resolved elsewhere, without touching any ship.
    /// Used to mirror incoming shots onto the defender's own board.
    pub fn mark_incoming(
        &mut self,
        target: Coordinate,
        result: AttackResult,
    ) -> Result<(), BoardError> {
        if !self.in_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        self.shots_fired.insert(target);
        if result == AttackResult::Miss {
            self.record_miss(target);
        }
        Ok(())
    }

    fn record_miss(&mut self, target: Coordinate) {
        if let Some(cell) = self.cell_mut(target) {
            if cell.is_ocean() {
                cell.set_status(CellStatus::Miss);
            }
        }
        self.missed_shots.insert(target);
    }
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::ocean(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}
