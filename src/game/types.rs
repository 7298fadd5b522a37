// Shared enums and result structs for the game session

/// Where a round stands.
///
/// `Won` and `Lost` freeze the simulation until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub coins_collected: u32,
    pub levels_gained: u32,
    /// Set when this tick ended the round
    pub finished: Option<GameStatus>,
    /// False when the session was already frozen and nothing moved
    pub advanced: bool,
}
