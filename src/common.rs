//! Common types for the game core: coordinates, attack results and errors.

use core::fmt;

/// A `(row, col)` position on a board, zero based.
///
/// `Horizontal` ships extend along increasing `col`, `Vertical` ships along
/// increasing `row`. Placement and attack coordinates always use this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of resolving a single attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The target coordinate is occupied by one of the defending ships.
    Hit,
    /// Nothing was there.
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit)
    }
}

/// Errors returned by board placement and attack resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    InvalidDimensions { columns: usize, rows: usize },
    /// Ships must have a positive length.
    InvalidShipLength,
    /// Coordinate or ship span falls outside the grid.
    OutOfBounds,
    /// Ship placement overlaps a cell that is not ocean.
    ShipOverlaps,
    /// No legal position exists for the ship on this board.
    UnableToPlaceShip,
    /// Fleet index is out of range.
    InvalidIndex,
    /// The ship already sits on a board; its cells are never moved.
    ShipAlreadyPlaced,
    /// A fleet needs at least one ship.
    EmptyFleet,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions { columns, rows } => {
                write!(f, "Invalid board dimensions {}x{}", columns, rows)
            }
            BoardError::InvalidShipLength => write!(f, "Ship length must be positive"),
            BoardError::OutOfBounds => write!(f, "Coordinate is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on a board"),
            BoardError::EmptyFleet => write!(f, "Fleet has no ships"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by the turn loop in [`crate::GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Attacks are not accepted until the placement phase is finished.
    NotStarted,
    /// Placement is closed once the first shot can be fired.
    AlreadyStarted,
    /// The other side is to move.
    NotYourTurn,
    /// Somebody has already won.
    GameOver,
    /// The attacker has already fired at this coordinate.
    AlreadyTargeted,
    /// At least one human ship has not been placed yet.
    FleetNotPlaced,
    /// The ship at this fleet index is already on the board.
    ShipAlreadyPlaced,
    /// Every coordinate of the opponent board has been fired upon.
    BoardExhausted,
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "The game has not started yet"),
            GameError::AlreadyStarted => write!(f, "The game has already started"),
            GameError::NotYourTurn => write!(f, "It is not your turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::AlreadyTargeted => write!(f, "That coordinate was already targeted"),
            GameError::FleetNotPlaced => write!(f, "Not every ship has been placed"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            GameError::BoardExhausted => write!(f, "No untargeted coordinates remain"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
