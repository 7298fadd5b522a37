// GameSession - one running round of Coiner
//
// The session owns the robot, the coins and the ghosts, plus score, difficulty
// and status. The driver calls `tick()` once per frame; everything else
// (drawing, input, pacing) happens outside.

use rand::Rng;

use crate::assets::SpriteSizes;
use crate::collision::colliding_indices;
use crate::config::GameConfig;
use crate::entity::Playfield;
use crate::error::GameError;
use crate::faller::{Faller, FallerKind};
use crate::player::{Direction, Player};

use super::difficulty::DifficultyRules;
use super::types::{GameStatus, TickReport};

/// Difficulty every round starts on
pub const STARTING_DIFFICULTY: u32 = 1;

pub struct GameSession<R: Rng> {
    playfield: Playfield,
    sprites: SpriteSizes,
    rules: DifficultyRules,
    player: Player,
    coins: Vec<Faller>,
    ghosts: Vec<Faller>,
    score: u32,
    difficulty: u32,
    status: GameStatus,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Sets up a fresh round.
    ///
    /// `rng` drives every spawn position, so a seeded generator replays the
    /// same game for the same inputs.
    pub fn new(config: &GameConfig, sprites: SpriteSizes, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let playfield = Playfield::from_config(config);
        sprites.check_fits(&playfield)?;

        let mut session = GameSession {
            playfield,
            sprites,
            rules: DifficultyRules::from_config(config),
            player: Player::new(sprites.robot, config.player_step, &playfield),
            coins: Vec::new(),
            ghosts: Vec::new(),
            score: 0,
            difficulty: STARTING_DIFFICULTY,
            status: GameStatus::Ongoing,
            rng,
        };
        session.spawn_fallers();

        Ok(session)
    }

    fn spawn_fallers(&mut self) {
        for _ in 0..self.rules.initial_coins {
            let coin = Faller::spawn(FallerKind::Coin, self.sprites.coin, &self.playfield, &mut self.rng);
            self.coins.push(coin);
        }
        for _ in 0..self.rules.initial_ghosts {
            let ghost = Faller::spawn(FallerKind::Ghost, self.sprites.monster, &self.playfield, &mut self.rng);
            self.ghosts.push(ghost);
        }
    }

    /// Advances the round by one tick.
    ///
    /// Order: move the robot, check for a difficulty step, then handle each
    /// coin (collect, recycle or fall) and each ghost (hit, recycle or fall).
    /// Does nothing once the round is won or lost.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.is_ongoing() {
            return report;
        }
        report.advanced = true;

        self.player.advance(&self.playfield);

        if self.rules.should_escalate(self.score, self.difficulty) && self.escalate_difficulty() {
            report.levels_gained = 1;
        }

        // A collected coin goes straight back up; it doesn't also fall this tick
        let collected = colliding_indices(&self.player, &self.coins);
        for (index, coin) in self.coins.iter_mut().enumerate() {
            if collected.contains(&index) || coin.is_below(&self.playfield) {
                coin.respawn(&self.playfield, &mut self.rng);
            } else {
                coin.advance();
            }
        }
        if !collected.is_empty() {
            self.score += collected.len() as u32;
            report.coins_collected = collected.len() as u32;
        }

        if !colliding_indices(&self.player, &self.ghosts).is_empty() {
            self.finish(GameStatus::Lost);
        }
        for ghost in &mut self.ghosts {
            if ghost.is_below(&self.playfield) {
                ghost.respawn(&self.playfield, &mut self.rng);
            } else {
                ghost.advance();
            }
        }

        if self.status.is_terminal() {
            report.finished = Some(self.status);
        }

        report
    }

    /// Steps the difficulty up one level, or wins the round from the top level.
    ///
    /// Returns true if a level was gained. A level swaps the last coin for a
    /// freshly spawned ghost and sets every faller's speed to the new level.
    pub fn escalate_difficulty(&mut self) -> bool {
        if self.rules.is_max(self.difficulty) {
            self.finish(GameStatus::Won);
            return false;
        }

        self.difficulty += 1;
        self.coins.pop();
        let ghost = Faller::spawn(FallerKind::Ghost, self.sprites.monster, &self.playfield, &mut self.rng);
        self.ghosts.push(ghost);

        let speed = self.difficulty as i32;
        for faller in self.coins.iter_mut().chain(self.ghosts.iter_mut()) {
            faller.set_fall_speed(speed);
        }

        log::info!(
            "Difficulty {} at score {}: {} coins, {} ghosts",
            self.difficulty,
            self.score,
            self.coins.len(),
            self.ghosts.len()
        );
        true
    }

    // First terminal state wins; a round can't be both won and lost
    fn finish(&mut self, status: GameStatus) {
        if self.status != GameStatus::Ongoing {
            return;
        }
        self.status = status;
        match status {
            GameStatus::Won => log::info!("Round won with score {}", self.score),
            GameStatus::Lost => log::info!(
                "Round lost at difficulty {} with score {}",
                self.difficulty,
                self.score
            ),
            GameStatus::Ongoing => {}
        }
    }

    /// Throws away the current round and starts over.
    ///
    /// Held movement keys stay held; the RNG stream continues.
    pub fn new_game(&mut self) {
        self.coins.clear();
        self.ghosts.clear();
        self.spawn_fallers();
        self.player.respawn(&self.playfield);
        self.score = 0;
        self.difficulty = STARTING_DIFFICULTY;
        self.status = GameStatus::Ongoing;

        log::info!("New game started");
    }

    pub fn set_player_moving(&mut self, direction: Direction, active: bool) {
        self.player.set_moving(direction, active);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == GameStatus::Ongoing
    }

    pub fn has_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn has_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn coins(&self) -> &[Faller] {
        &self.coins
    }

    pub fn ghosts(&self) -> &[Faller] {
        &self.ghosts
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }
}
