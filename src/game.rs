#![cfg(feature = "std")]
//! Human versus CPU turn loop.

use std::boxed::Box;

use rand::Rng;
use tokio::time::Duration;

use crate::{
    common::{AttackResult, BoardError, Coordinate, GameError},
    config::GameConfig,
    pacing::Pacer,
    player::Player,
    ship::Orientation,
};

/// Status of a game, seen from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    /// Human fleet is still being placed.
    Setup,
    InProgress,
    Won,
    Lost,
}

/// Whose shot is next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Turn {
    Human,
    Cpu,
}

/// Outcome of one shot, with the consequences the UI needs to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttackReport {
    pub target: Coordinate,
    pub result: AttackResult,
    /// A ship was sunk by this very shot.
    pub sunk: bool,
    /// Every defending ship is now sunk.
    pub victory: bool,
}

pub struct GameSession {
    config: GameConfig,
    human: Player,
    cpu: Player,
    turn: Turn,
    status: GameStatus,
    pacer: Box<dyn Pacer>,
}

impl GameSession {
    /// Build both players. The CPU fleet is placed right away; the human
    /// fleet waits for [`Self::place_human_ship`] or
    /// [`Self::randomize_human_fleet`].
    pub fn new<R: Rng>(
        config: GameConfig,
        rng: &mut R,
        pacer: Box<dyn Pacer>,
    ) -> Result<Self, GameError> {
        let human = Player::human(&config)?;
        let cpu = Player::cpu(&config, rng)?;
        log::debug!(
            "new session {}x{} with fleet {:?}",
            config.columns,
            config.rows,
            config.fleet
        );
        Ok(Self {
            config,
            human,
            cpu,
            turn: Turn::Human,
            status: GameStatus::Setup,
            pacer,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn cpu(&self) -> &Player {
        &self.cpu
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn ensure_setup(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => Ok(()),
            GameStatus::InProgress => Err(GameError::AlreadyStarted),
            GameStatus::Won | GameStatus::Lost => Err(GameError::GameOver),
        }
    }

    pub fn place_human_ship(
        &mut self,
        index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.ensure_setup()?;
        let ship = self
            .human
            .ships()
            .get(index)
            .ok_or(BoardError::InvalidIndex)?;
        if ship.is_placed() {
            return Err(GameError::ShipAlreadyPlaced);
        }
        self.human.place_ship(index, origin, orientation)?;
        Ok(())
    }

    /// Discard the human fleet and place a fresh one at random.
    pub fn randomize_human_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.randomize_fleet(rng)?;
        Ok(())
    }

    /// Random placement for the ships not placed yet, keeping the others.
    pub fn place_remaining_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.place_unplaced_randomly(rng)?;
        Ok(())
    }

    pub fn clear_human_fleet(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;
        self.human.reset_fleet();
        Ok(())
    }

    /// Leave the placement phase. The human shoots first.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_setup()?;
        if !self.human.fleet_placed() {
            return Err(GameError::FleetNotPlaced);
        }
        self.status = GameStatus::InProgress;
        self.turn = Turn::Human;
        log::info!("game started");
        Ok(())
    }

    fn ensure_turn(&self, turn: Turn) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => return Err(GameError::NotStarted),
            GameStatus::Won | GameStatus::Lost => return Err(GameError::GameOver),
            GameStatus::InProgress => {}
        }
        if self.turn != turn {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Fire the human's shot at the CPU board.
    pub fn human_attack(&mut self, target: Coordinate) -> Result<AttackReport, GameError> {
        self.ensure_turn(Turn::Human)?;
        if !self.human.target_board().in_bounds(target) {
            return Err(BoardError::OutOfBounds.into());
        }
        if self.human.target_board().has_fired_at(target) {
            return Err(GameError::AlreadyTargeted);
        }
        let report = fire(&mut self.human, &mut self.cpu, target)?;
        log::info!("human fires at {}: {:?}", target, report.result);
        if report.victory {
            self.status = GameStatus::Won;
            log::info!("human wins");
        } else {
            self.turn = Turn::Cpu;
        }
        Ok(report)
    }

    /// Let the CPU think for a moment, then fire at a fresh coordinate.
    pub async fn cpu_turn<R: Rng>(&mut self, rng: &mut R) -> Result<AttackReport, GameError> {
        self.ensure_turn(Turn::Cpu)?;
        let range = self.config.cpu_delay_ms.clone();
        let delay = if range.is_empty() {
            0
        } else {
            rng.random_range(range)
        };
        self.pacer.pause(Duration::from_millis(delay)).await;

        let target = self
            .cpu
            .choose_target(&self.human, rng)
            .ok_or(GameError::BoardExhausted)?;
        let report = fire(&mut self.cpu, &mut self.human, target)?;
        log::info!("cpu fires at {}: {:?}", target, report.result);
        if report.victory {
            self.status = GameStatus::Lost;
            log::info!("cpu wins");
        } else {
            self.turn = Turn::Human;
        }
        Ok(report)
    }
}

/// Apply one shot and work out whether it sank a ship or ended the game.
pub fn fire(
    attacker: &mut Player,
    defender: &mut Player,
    target: Coordinate,
) -> Result<AttackReport, BoardError> {
    let struck = defender
        .ships()
        .iter()
        .position(|s| s.occupies(target))
        .filter(|&i| !defender.ships()[i].is_sunk());
    let result = attacker.send_attack(target, defender)?;
    let sunk = struck.is_some_and(|i| defender.ships()[i].is_sunk());
    Ok(AttackReport {
        target,
        result,
        sunk,
        victory: defender.all_ships_sunk(),
    })
}

/// Result of a CPU versus CPU match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchSummary {
    /// Index of the winning player, 0 or 1.
    pub winner: usize,
    /// Shots fired by each player.
    pub shots: [usize; 2],
}

/// Play two CPU players against each other without any delay. Player 0
/// shoots first. `on_shot` sees the shooter's index and each report.
pub fn cpu_match<R: Rng>(
    config: &GameConfig,
    rngs: [&mut R; 2],
    mut on_shot: impl FnMut(usize, &AttackReport),
) -> Result<MatchSummary, GameError> {
    let [rng_a, rng_b] = rngs;
    let mut players = [Player::cpu(config, &mut *rng_a)?, Player::cpu(config, &mut *rng_b)?];
    let mut rngs = [rng_a, rng_b];
    let mut shots = [0usize; 2];
    let mut shooter = 0;
    loop {
        let (left, right) = players.split_at_mut(1);
        let (attacker, defender) = if shooter == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        };
        let target = attacker
            .choose_target(defender, &mut *rngs[shooter])
            .ok_or(GameError::BoardExhausted)?;
        let report = fire(attacker, defender, target)?;
        shots[shooter] += 1;
        on_shot(shooter, &report);
        if report.victory {
            log::info!("player {} wins after {} shots", shooter + 1, shots[shooter]);
            return Ok(MatchSummary {
                winner: shooter,
                shots,
            });
        }
        shooter = 1 - shooter;
    }
}
