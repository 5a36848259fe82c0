pub mod auth_state;
pub mod use_player_stats;
pub mod use_question;

pub use auth_state::*;
pub use use_player_stats::*;
pub use use_question::*;
