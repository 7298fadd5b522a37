// Difficulty rules
//
// Difficulty climbs one level every `points_per_level` points. Each level swaps
// a coin for a ghost and speeds every faller up to the new level number.
// Scoring the next threshold on the top level wins.

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRules {
    pub max_difficulty: u32,
    pub points_per_level: u32,
    pub initial_coins: usize,
    pub initial_ghosts: usize,
}

impl DifficultyRules {
    pub fn from_config(config: &GameConfig) -> Self {
        DifficultyRules {
            max_difficulty: config.max_difficulty,
            points_per_level: config.points_per_level,
            initial_coins: config.initial_coins,
            initial_ghosts: config.initial_ghosts,
        }
    }

    /// Whether the current score calls for a difficulty step.
    ///
    /// The score must be a positive multiple of `points_per_level` and at least
    /// the threshold of the current level. Nothing records that a threshold
    /// was already handled, so if several coins in one tick jump past a
    /// multiple, the check keeps firing on later ticks at the next multiple
    /// until the level catches up.
    pub fn should_escalate(&self, score: u32, difficulty: u32) -> bool {
        score != 0
            && score % self.points_per_level == 0
            && score >= difficulty * self.points_per_level
    }

    pub fn is_max(&self, difficulty: u32) -> bool {
        difficulty >= self.max_difficulty
    }
}

impl Default for DifficultyRules {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_first_threshold() {
        let rules = DifficultyRules::default();
        assert!(!rules.should_escalate(0, 1));
        assert!(!rules.should_escalate(9, 1));
        assert!(rules.should_escalate(10, 1));
        assert!(!rules.should_escalate(11, 1));
    }

    #[test]
    fn test_does_not_refire_after_level_up() {
        let rules = DifficultyRules::default();
        assert!(rules.should_escalate(10, 1));
        assert!(!rules.should_escalate(10, 2));
        assert!(!rules.should_escalate(15, 2));
        assert!(rules.should_escalate(20, 2));
    }

    #[test]
    fn test_catches_up_after_skipped_threshold() {
        // Score jumped 9 -> 11, so level 1 -> 2 waits for 20 and then fires twice
        let rules = DifficultyRules::default();
        assert!(rules.should_escalate(20, 1));
        assert!(rules.should_escalate(20, 2));
        assert!(!rules.should_escalate(20, 3));
    }

    #[test]
    fn test_custom_points_per_level() {
        let rules = DifficultyRules {
            points_per_level: 3,
            ..DifficultyRules::default()
        };
        assert!(rules.should_escalate(3, 1));
        assert!(!rules.should_escalate(4, 1));
        assert!(rules.should_escalate(6, 2));
    }

    #[test]
    fn test_is_max() {
        let rules = DifficultyRules::default();
        assert!(!rules.is_max(9));
        assert!(rules.is_max(10));
    }
}
