//! Game configuration
//!
//! Everything tunable about a round of Coiner lives in [`GameConfig`]. The
//! binary reads it from `assets/config/coiner.json`; every field has a default,
//! so the file only needs to list what it changes.
//!
//! ```json
//! { "seed": 42, "initial_coins": 12 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/coiner.json";

/// Image paths for each sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub robot: String,
    pub coin: String,
    pub monster: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            robot: "assets/sprites/robot.png".to_string(),
            coin: "assets/sprites/coin.png".to_string(),
            monster: "assets/sprites/monster.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,

    /// Height of the black strip at the bottom the robot stands on
    pub scoreboard_height: u32,

    /// Pixels the robot moves per tick while a direction key is held
    pub player_step: i32,

    /// Target ticks per second
    pub frame_rate: u32,

    pub initial_coins: usize,
    pub initial_ghosts: usize,

    /// Reaching this level and scoring the next threshold wins the game
    pub max_difficulty: u32,

    /// Score needed per difficulty level
    pub points_per_level: u32,

    /// Fixed RNG seed; a random one is picked at startup when absent
    pub seed: Option<u64>,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_width: 1000,
            window_height: 613,
            window_title: "Coiner".to_string(),
            scoreboard_height: 50,
            player_step: 5,
            frame_rate: 60,
            initial_coins: 10,
            initial_ghosts: 1,
            max_difficulty: 10,
            points_per_level: 10,
            seed: None,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but can't be parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::Config("window size must be non-zero".to_string()));
        }
        if self.scoreboard_height >= self.window_height {
            return Err(GameError::Config(format!(
                "scoreboard height {} leaves no room in a {}px window",
                self.scoreboard_height, self.window_height
            )));
        }
        if self.player_step <= 0 {
            return Err(GameError::Config(format!(
                "player_step must be positive, got {}",
                self.player_step
            )));
        }
        if self.frame_rate == 0 {
            return Err(GameError::Config("frame_rate must be positive".to_string()));
        }
        if self.max_difficulty == 0 {
            return Err(GameError::Config("max_difficulty must be at least 1".to_string()));
        }
        if self.points_per_level == 0 {
            return Err(GameError::Config("points_per_level must be positive".to_string()));
        }
        Ok(())
    }
}
