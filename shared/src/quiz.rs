use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    CORRECT_POINTS, INCORRECT_PENALTY, LONG_QUESTION_CHARS, MAX_ATTEMPTS, NULL_IMAGE_URL,
    SHARE_TITLE, WRONG_POSITION_PENALTY,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub explanation: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Question {
    /// The image to show next to the question, if the record really has one.
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != NULL_IMAGE_URL)
    }

    /// Long questions start expanded but get a collapse toggle.
    pub fn is_long(&self) -> bool {
        self.question.chars().count() > LONG_QUESTION_CHARS
    }

    pub fn summary(&self) -> QuestionSummary {
        QuestionSummary {
            id: self.id,
            question: self.question.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

// Archive entries never carry the answer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionSummary {
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Feedback {
    Correct,
    WrongPosition,
    Incorrect,
}

impl Feedback {
    pub fn emoji(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::WrongPosition => '🟨',
            Feedback::Incorrect => '⬛',
        }
    }

    fn points(self) -> i64 {
        match self {
            Feedback::Correct => CORRECT_POINTS,
            Feedback::WrongPosition => -WRONG_POSITION_PENALTY,
            Feedback::Incorrect => -INCORRECT_PENALTY,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Finished,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("the quiz is already finished")]
    NotPlaying,
    #[error("the answer needs {expected} letters but only {filled} were entered")]
    Incomplete { filled: usize, expected: usize },
    #[error("there is no answer slot at position {0}")]
    OutOfRange(usize),
    #[error("position {0} is a word separator")]
    Separator(usize),
}

fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

// Any whitespace in an answer becomes a plain space separator.
fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { to_upper(c) })
        .collect()
}

/// Character kept from an input box: the last non-whitespace one, upper-cased.
pub fn typed_char(value: &str) -> Option<char> {
    value.chars().rev().find(|c| !c.is_whitespace()).map(to_upper)
}

/// Scores `guess` against `answer`, one entry per guess character.
///
/// Exact positional matches are resolved first and consume their answer
/// position. Remaining guess letters then claim the first unconsumed answer
/// position holding the same letter, left to right, so a repeated letter is
/// only reported as misplaced as often as the answer still contains it.
/// Comparison ignores case.
pub fn evaluate(answer: &str, guess: &str) -> Vec<Feedback> {
    evaluate_chars(&normalize(answer), &normalize(guess))
}

fn evaluate_chars(answer: &[char], guess: &[char]) -> Vec<Feedback> {
    let mut feedback = vec![Feedback::Incorrect; guess.len()];
    let mut remaining: Vec<Option<char>> = answer.iter().copied().map(Some).collect();

    for (i, &letter) in guess.iter().enumerate() {
        if answer.get(i) == Some(&letter) {
            feedback[i] = Feedback::Correct;
            remaining[i] = None;
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if feedback[i] == Feedback::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
            feedback[i] = Feedback::WrongPosition;
            *slot = None;
        }
    }

    log::debug!(
        "evaluated guess {:?}: {:?}",
        guess.iter().collect::<String>(),
        feedback
    );
    feedback
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attempt {
    pub letters: Vec<char>,
    pub feedback: Vec<Feedback>,
}

impl Attempt {
    pub fn word(&self) -> String {
        self.letters.iter().collect()
    }

    /// Letter/feedback pairs, separators included.
    pub fn tiles(&self) -> impl Iterator<Item = (char, Feedback)> + '_ {
        self.letters.iter().copied().zip(self.feedback.iter().copied())
    }

    fn points(&self) -> i64 {
        self.tiles()
            .filter(|(letter, _)| *letter != ' ')
            .map(|(_, feedback)| feedback.points())
            .sum()
    }

    fn emoji_row(&self) -> String {
        self.tiles()
            .map(|(letter, feedback)| if letter == ' ' { ' ' } else { feedback.emoji() })
            .collect()
    }
}

/// One play-through of a single question.
///
/// Answer positions holding a space are word separators: they are never
/// typed, always count as matched, and are left out of the score.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    question: Question,
    answer: Vec<char>,
    entry: Vec<Option<char>>,
    attempts: Vec<Attempt>,
    state: GameState,
    elapsed_secs: u32,
}

impl QuizSession {
    pub fn new(question: Question) -> Self {
        let answer = normalize(&question.answer);
        let entry = Self::blank_entry(&answer);
        Self {
            question,
            answer,
            entry,
            attempts: Vec::new(),
            state: GameState::Playing,
            elapsed_secs: 0,
        }
    }

    fn blank_entry(answer: &[char]) -> Vec<Option<char>> {
        answer
            .iter()
            .map(|&c| if c == ' ' { Some(' ') } else { None })
            .collect()
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_separator(&self, index: usize) -> bool {
        self.answer.get(index) == Some(&' ')
    }

    /// Character currently typed at `index`, separators read as `None`.
    pub fn entry_at(&self, index: usize) -> Option<char> {
        if self.is_separator(index) {
            return None;
        }
        self.entry.get(index).copied().flatten()
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    fn letter_slots(&self) -> usize {
        self.answer.iter().filter(|&&c| c != ' ').count()
    }

    fn filled_slots(&self) -> usize {
        self.entry
            .iter()
            .zip(&self.answer)
            .filter(|(slot, answer)| **answer != ' ' && slot.is_some())
            .count()
    }

    /// Types `value` into slot `index`, keeping only its last character.
    ///
    /// An empty value clears the slot. Filling the last open slot submits
    /// the entry and returns the resulting state.
    pub fn set_char(&mut self, index: usize, value: &str) -> Result<Option<GameState>, QuizError> {
        if !self.is_playing() {
            return Err(QuizError::NotPlaying);
        }
        if index >= self.answer.len() {
            return Err(QuizError::OutOfRange(index));
        }
        if self.is_separator(index) {
            return Err(QuizError::Separator(index));
        }

        self.entry[index] = typed_char(value);

        if self.filled_slots() == self.letter_slots() {
            return self.submit().map(Some);
        }
        Ok(None)
    }

    pub fn submit(&mut self) -> Result<GameState, QuizError> {
        if !self.is_playing() {
            return Err(QuizError::NotPlaying);
        }

        let filled = self.filled_slots();
        let expected = self.letter_slots();
        if filled < expected {
            return Err(QuizError::Incomplete { filled, expected });
        }

        let letters: Vec<char> = self.entry.iter().map(|c| c.unwrap_or(' ')).collect();
        let feedback = evaluate_chars(&self.answer, &letters);
        let solved = letters == self.answer;

        self.attempts.push(Attempt { letters, feedback });
        self.entry = Self::blank_entry(&self.answer);

        if solved || self.attempts.len() >= MAX_ATTEMPTS {
            self.state = GameState::Finished;
            log::info!(
                "question {} finished after {} attempt(s), solved: {}",
                self.question.id,
                self.attempts.len(),
                solved
            );
        }
        Ok(self.state)
    }

    /// Advances the clock by one second; the clock stops once finished.
    pub fn tick(&mut self) -> bool {
        if self.is_playing() {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// 1-based number of the attempt that matched the answer.
    pub fn solved_on(&self) -> Option<usize> {
        self.attempts
            .iter()
            .position(|attempt| attempt.letters == self.answer)
            .map(|i| i + 1)
    }

    pub fn score(&self) -> u32 {
        let points: i64 = self.attempts.iter().map(Attempt::points).sum();
        let score = points - i64::from(self.elapsed_secs);
        u32::try_from(score.max(0)).unwrap_or(u32::MAX)
    }

    pub fn share_text(&self) -> String {
        let result = self
            .solved_on()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "X".to_string());
        let rows: Vec<String> = self.attempts.iter().map(Attempt::emoji_row).collect();

        format!(
            "{} #{}\n{}/{} Score: {}\n{}",
            SHARE_TITLE,
            self.question.id,
            result,
            MAX_ATTEMPTS,
            self.score(),
            rows.join("\n")
        )
    }
}

pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Feedback::{Correct as C, Incorrect as I, WrongPosition as W};

    fn question(answer: &str) -> Question {
        Question {
            id: 7,
            question: "Which bird?".to_string(),
            answer: answer.to_string(),
            explanation: "Because.".to_string(),
            image_url: None,
            created_at: None,
        }
    }

    fn type_word(session: &mut QuizSession, word: &str) -> Option<GameState> {
        let mut last = None;
        for (i, c) in word.chars().enumerate() {
            if session.is_separator(i) {
                continue;
            }
            last = session.set_char(i, &c.to_string()).unwrap();
        }
        last
    }

    #[test]
    fn test_evaluate_marks_exact_and_misplaced() {
        assert_eq!(evaluate("CRANE", "CARTE"), vec![C, W, W, I, C]);
    }

    #[test]
    fn test_evaluate_repeated_letters_consume_answer() {
        assert_eq!(evaluate("APPLE", "PAPAL"), vec![W, W, C, I, W]);
        // Only one E in the answer, already claimed by the exact match.
        assert_eq!(evaluate("CRANE", "EERIE"), vec![I, I, W, I, C]);
    }

    #[test]
    fn test_evaluate_ignores_case() {
        assert_eq!(evaluate("Heron", "hERON"), vec![C; 5]);
    }

    #[test]
    fn test_feedback_serializes_kebab_case() {
        let json = serde_json::to_string(&vec![C, W, I]).unwrap();
        assert_eq!(json, r#"["correct","wrong-position","incorrect"]"#);
    }

    #[test]
    fn test_typing_full_entry_auto_submits() {
        let mut session = QuizSession::new(question("crane"));
        assert_eq!(session.set_char(0, "c").unwrap(), None);
        assert_eq!(session.entry_at(0), Some('C'));

        let state = type_word(&mut session, "CARTE");
        assert_eq!(state, Some(GameState::Playing));
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.attempts()[0].word(), "CARTE");
        assert_eq!(session.entry_at(0), None);
        assert_eq!(session.remaining_attempts(), 2);
    }

    #[test]
    fn test_set_char_keeps_last_character_and_clears_on_empty() {
        let mut session = QuizSession::new(question("CRANE"));
        session.set_char(1, "ab").unwrap();
        assert_eq!(session.entry_at(1), Some('B'));
        session.set_char(1, "").unwrap();
        assert_eq!(session.entry_at(1), None);
    }

    #[test]
    fn test_set_char_rejects_bad_positions() {
        let mut session = QuizSession::new(question("NEW YORK"));
        assert_eq!(session.set_char(3, "x"), Err(QuizError::Separator(3)));
        assert_eq!(session.set_char(8, "x"), Err(QuizError::OutOfRange(8)));
    }

    #[test]
    fn test_submit_requires_complete_entry() {
        let mut session = QuizSession::new(question("CRANE"));
        session.set_char(0, "C").unwrap();
        assert_eq!(
            session.submit(),
            Err(QuizError::Incomplete { filled: 1, expected: 5 })
        );
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn test_solving_finishes_game() {
        let mut session = QuizSession::new(question("CRANE"));
        assert_eq!(type_word(&mut session, "crane"), Some(GameState::Finished));
        assert_eq!(session.solved_on(), Some(1));
        assert_eq!(session.set_char(0, "A"), Err(QuizError::NotPlaying));
    }

    #[test]
    fn test_third_miss_finishes_game() {
        let mut session = QuizSession::new(question("CAT"));
        assert_eq!(type_word(&mut session, "DOG"), Some(GameState::Playing));
        assert_eq!(type_word(&mut session, "DOG"), Some(GameState::Playing));
        assert_eq!(type_word(&mut session, "DOG"), Some(GameState::Finished));
        assert_eq!(session.solved_on(), None);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn test_clock_stops_when_finished() {
        let mut session = QuizSession::new(question("CAT"));
        assert!(session.tick());
        assert!(session.tick());
        type_word(&mut session, "CAT");
        assert!(!session.tick());
        assert_eq!(session.elapsed_secs(), 2);
    }

    #[test]
    fn test_score_counts_feedback_and_time() {
        let mut session = QuizSession::new(question("CRANE"));
        for _ in 0..10 {
            session.tick();
        }
        type_word(&mut session, "CARTE");
        assert_eq!(session.score(), 65);
        type_word(&mut session, "CRANE");
        assert_eq!(session.score(), 565);
    }

    #[test]
    fn test_score_never_negative() {
        let mut session = QuizSession::new(question("CAT"));
        for _ in 0..3 {
            type_word(&mut session, "DOG");
        }
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_share_text_solved() {
        let mut session = QuizSession::new(question("CRANE"));
        for _ in 0..10 {
            session.tick();
        }
        type_word(&mut session, "CARTE");
        type_word(&mut session, "CRANE");
        assert_eq!(
            session.share_text(),
            "QuizX #7\n2/3 Score: 565\n🟩🟨🟨⬛🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn test_share_text_unsolved() {
        let mut session = QuizSession::new(question("CAT"));
        for _ in 0..3 {
            type_word(&mut session, "DOG");
        }
        assert_eq!(session.share_text(), "QuizX #7\nX/3 Score: 0\n⬛⬛⬛\n⬛⬛⬛\n⬛⬛⬛");
    }

    #[test]
    fn test_separators_are_skipped() {
        let mut session = QuizSession::new(question("New York"));
        assert_eq!(session.answer_len(), 8);
        assert_eq!(type_word(&mut session, "NEW YORK"), Some(GameState::Finished));
        assert_eq!(session.score(), 700);
        assert!(session.share_text().ends_with("🟩🟩🟩 🟩🟩🟩🟩"));
    }

    #[test]
    fn test_any_whitespace_in_answer_is_a_separator() {
        let mut session = QuizSession::new(question("A\u{a0}B\tC"));
        assert!(session.is_separator(1));
        assert!(session.is_separator(3));
        assert_eq!(session.set_char(1, "\u{a0}"), Err(QuizError::Separator(1)));
        assert_eq!(type_word(&mut session, "A B C"), Some(GameState::Finished));
        assert_eq!(session.solved_on(), Some(1));
    }

    #[test]
    fn test_typed_char_drops_whitespace() {
        assert_eq!(typed_char("ab"), Some('B'));
        assert_eq!(typed_char("c "), Some('C'));
        assert_eq!(typed_char(" "), None);
        assert_eq!(typed_char("\u{a0}"), None);
        assert_eq!(typed_char(""), None);
    }

    #[test]
    fn test_question_image_and_length() {
        let mut q = question("CAT");
        assert_eq!(q.image(), None);
        q.image_url = Some("NULL".to_string());
        assert_eq!(q.image(), None);
        q.image_url = Some("https://img.example/cat.png".to_string());
        assert_eq!(q.image(), Some("https://img.example/cat.png"));

        assert!(!q.is_long());
        q.question = "x".repeat(101);
        assert!(q.is_long());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(75), "01:15");
        assert_eq!(format_time(3600), "60:00");
    }
}
