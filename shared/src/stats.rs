use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub played: u32,
    pub win_percentage: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl PlayerStats {
    /// Fixed record served until stats are persisted by the auth service.
    pub fn placeholder() -> Self {
        Self {
            played: 10,
            win_percentage: 80,
            current_streak: 3,
            max_streak: 5,
        }
    }
}
