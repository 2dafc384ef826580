//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackResult, BoardError, CellStatus, Coordinate, GameConfig, GameError, Gameboard,
    Orientation, Player, PlayerKind, Ship,
};

#[cfg(feature = "std")]
pub use crate::{AttackReport, CliGame, GameSession, GameStatus, NoDelay, TokioPacer};
