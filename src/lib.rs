#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod pacing;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use pacing::{NoDelay, Pacer, TokioPacer};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
