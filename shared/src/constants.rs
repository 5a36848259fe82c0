pub const MAX_ATTEMPTS: usize = 3;

pub const CORRECT_POINTS: i64 = 100;
pub const WRONG_POSITION_PENALTY: i64 = 50;
pub const INCORRECT_PENALTY: i64 = 25;

pub const SHARE_TITLE: &str = "QuizX";
pub const LONG_QUESTION_CHARS: usize = 100;
pub const MAX_ANSWER_CHARS: usize = 64;

// Older question rows store a missing image as the literal string "NULL".
pub const NULL_IMAGE_URL: &str = "NULL";

pub const DEFAULT_ARCHIVE_LIMIT: i64 = 30;
pub const MAX_ARCHIVE_LIMIT: i64 = 100;

pub const TOKEN_STORAGE_KEY: &str = "token";

pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const NO_QUESTION_ERROR: &str = "No question is available right now.";
