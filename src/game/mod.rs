// Game module - the round itself and the loop that drives it
//
// This module contains:
// - session.rs: GameSession, the per-tick simulation
// - difficulty.rs: when difficulty steps up and what a step does
// - types.rs: GameStatus and TickReport
// - runner.rs: Game, the input -> tick -> render -> wait loop

pub mod difficulty;
pub mod runner;
pub mod session;
pub mod types;

pub use difficulty::DifficultyRules;
pub use runner::{Game, RunStats};
pub use session::GameSession;
pub use types::*;
