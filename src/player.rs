//! Players: a fleet, the board it sits on, and a board tracking shots fired.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Gameboard;
use crate::common::{AttackResult, BoardError, Coordinate};
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship};

/// Who is behind the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    #[default]
    Human,
    Cpu,
}

/// One contestant.
///
/// Ships live on `ship_board`. Attacks this player sends are recorded on
/// `target_board`, while the hit itself lands on the defender's ships.
#[derive(Debug, Clone)]
pub struct Player {
    kind: PlayerKind,
    fleet: Vec<usize>,
    ships: Vec<Ship>,
    ship_board: Gameboard,
    target_board: Gameboard,
}

impl Player {
    /// Human player with an unplaced fleet; ships get placed by the caller.
    pub fn human(config: &GameConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self {
            kind: PlayerKind::Human,
            fleet: config.fleet.clone(),
            ships: config
                .fleet
                .iter()
                .map(|&len| Ship::new(len, Orientation::Horizontal))
                .collect(),
            ship_board: Gameboard::new(config.columns, config.rows)?,
            target_board: Gameboard::new(config.columns, config.rows)?,
        })
    }

    /// CPU player whose ships get random orientations and are placed at once.
    pub fn cpu<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let mut player = Self::human(config)?;
        player.kind = PlayerKind::Cpu;
        player.randomize_fleet(rng)?;
        Ok(player)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn ship_board(&self) -> &Gameboard {
        &self.ship_board
    }

    pub fn target_board(&self) -> &Gameboard {
        &self.target_board
    }

    /// Place the ship at `index` of the fleet on this player's own board.
    pub fn place_ship(
        &mut self,
        index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.ships.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        self.ship_board.place_ship(ship, origin, orientation)
    }

    /// Throw away both boards and the fleet and build them fresh.
    pub fn reset_fleet(&mut self) {
        let columns = self.ship_board.columns();
        let rows = self.ship_board.rows();
        self.ships = self
            .fleet
            .iter()
            .map(|&len| Ship::new(len, Orientation::Horizontal))
            .collect();
        self.ship_board = Gameboard::new(columns, rows).unwrap_or_default();
        self.target_board = Gameboard::new(columns, rows).unwrap_or_default();
    }

    /// Reset, then place a fresh fleet with random orientations and origins.
    pub fn randomize_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        self.reset_fleet();
        self.place_unplaced_randomly(rng)
    }

    /// Random orientation and origin for every ship not on the board yet.
    pub fn place_unplaced_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let columns = self.ship_board.columns();
        let rows = self.ship_board.rows();
        for ship in self.ships.iter_mut().filter(|s| !s.is_placed()) {
            let orientation = if ship.length() > columns {
                Orientation::Vertical
            } else if ship.length() > rows {
                Orientation::Horizontal
            } else {
                Orientation::random(rng)
            };
            ship.set_orientation(orientation);
            self.ship_board
                .place_ships_randomly(core::slice::from_mut(ship), rng)?;
        }
        Ok(())
    }

    /// Fire at `target` on `defender`.
    ///
    /// The shot is resolved on this player's target board against the
    /// defender's ships, then mirrored onto the defender's own board so it
    /// shows incoming misses too.
    pub fn send_attack(
        &mut self,
        target: Coordinate,
        defender: &mut Player,
    ) -> Result<AttackResult, BoardError> {
        let result = self.target_board.resolve_attack(target, &mut defender.ships)?;
        defender.ship_board.mark_incoming(target, result)?;
        Ok(result)
    }

    /// Random coordinate on the opponent's board this player has not fired
    /// at yet, or `None` once every coordinate has been tried.
    pub fn choose_target<R: Rng>(&self, opponent: &Player, rng: &mut R) -> Option<Coordinate> {
        let rows = opponent.ship_board.rows();
        let columns = opponent.ship_board.columns();
        let remaining = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Coordinate::new(row, col)))
            .any(|c| !self.target_board.has_fired_at(c));
        if !remaining {
            return None;
        }
        loop {
            let target = Coordinate::new(rng.random_range(0..rows), rng.random_range(0..columns));
            if !self.target_board.has_fired_at(target) {
                return Some(target);
            }
        }
    }

    pub fn fleet_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// True when every ship is sunk. Vacuously true for an empty fleet.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}
