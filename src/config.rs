use alloc::{vec, vec::Vec};
use core::ops::RangeInclusive;

use crate::common::BoardError;

pub const DEFAULT_COLUMNS: usize = 9;
pub const DEFAULT_ROWS: usize = 9;
/// Rows are labelled `A` to `Z`.
pub const MAX_ROWS: usize = 26;
pub const DEFAULT_SHIP_LENGTH: usize = 2;
/// Number of ships in a fleet when every ship has the same length.
pub const DEFAULT_SHIP_COUNT: usize = 5;
pub const STANDARD_FLEET: [usize; 5] = [4, 4, 3, 3, 2];
/// Range of the CPU's artificial thinking time, in milliseconds.
pub const DEFAULT_CPU_DELAY_MS: RangeInclusive<u64> = 500..=2000;

/// Parameters of one game: board size, fleet composition and CPU pacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Ship lengths, in placement order.
    pub fleet: Vec<usize>,
    pub cpu_delay_ms: RangeInclusive<u64>,
}

impl GameConfig {
    /// 9x9 board with the `{4, 4, 3, 3, 2}` fleet.
    pub fn standard() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            fleet: STANDARD_FLEET.to_vec(),
            cpu_delay_ms: DEFAULT_CPU_DELAY_MS,
        }
    }

    /// 9x9 board with `count` ships of the same `length`.
    pub fn uniform(count: usize, length: usize) -> Self {
        Self {
            fleet: vec![length; count],
            ..Self::standard()
        }
    }

    pub fn with_dimensions(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn with_fleet(mut self, fleet: Vec<usize>) -> Self {
        self.fleet = fleet;
        self
    }

    /// `0..=0`, or an empty range, disables the CPU's thinking time.
    pub fn with_cpu_delay_ms(mut self, delay: RangeInclusive<u64>) -> Self {
        self.cpu_delay_ms = delay;
        self
    }

    /// Check that the board has positive dimensions, at most [`MAX_ROWS`]
    /// rows, and a non-empty fleet where every ship has a positive length
    /// that fits along at least one axis.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.columns == 0 || self.rows == 0 || self.rows > MAX_ROWS {
            return Err(BoardError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.fleet.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        for &len in &self.fleet {
            if len == 0 {
                return Err(BoardError::InvalidShipLength);
            }
            if len > self.columns && len > self.rows {
                return Err(BoardError::UnableToPlaceShip);
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
