//! Coiner - catch the coins, dodge the ghosts
//!
//! A robot walks along the bottom of the window collecting falling coins.
//! Every `points_per_level` points the difficulty goes up: one coin turns into
//! a ghost and everything falls faster. Touching a ghost loses the round;
//! scoring past the top difficulty wins it.
//!
//! Core modules:
//! - `game`: the round simulation ([`GameSession`]) and the main loop ([`Game`])
//! - `player`, `faller`, `entity`, `collision`: what's on the playfield
//! - `render`, `gui`, `text`: frame drawing against an abstract [`render::Surface`]
//! - `input_system`: window events to game actions
//! - `config`, `assets`, `error`, `clock`: startup and pacing
//! - `platform`: SDL2 implementations (feature `sdl`)

pub mod assets;
pub mod clock;
pub mod collision;
pub mod config;
pub mod entity;
pub mod error;
pub mod faller;
pub mod game;
pub mod gui;
pub mod input_system;
pub mod player;
pub mod render;
pub mod text;

#[cfg(feature = "sdl")]
pub mod platform;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameSession, GameStatus};
