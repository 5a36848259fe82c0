pub mod constants;
pub mod quiz;
pub mod session;
pub mod stats;
pub mod validation;

pub use quiz::{Attempt, Feedback, GameState, Question, QuestionSummary, QuizError, QuizSession};
pub use stats::PlayerStats;
