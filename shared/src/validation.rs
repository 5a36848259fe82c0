use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_ANSWER_CHARS, NULL_IMAGE_URL};
use crate::quiz::Question;

static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("image url pattern is valid")
});

pub fn validate_answer(answer: &str) -> Result<(), ValidationError> {
    if answer.trim().is_empty() {
        return Err(ValidationError::new("empty_answer"));
    }
    if answer.chars().count() > MAX_ANSWER_CHARS {
        return Err(ValidationError::new("answer_too_long"));
    }
    Ok(())
}

pub fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() || url == NULL_IMAGE_URL || IMAGE_URL.is_match(url) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_image_url"))
}

pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.question.trim().is_empty() {
        return Err(ValidationError::new("empty_question"));
    }
    validate_answer(&question.answer)?;
    if let Some(url) = &question.image_url {
        validate_image_url(url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str, image_url: Option<&str>) -> Question {
        Question {
            id: 1,
            question: "What is the capital of France?".to_string(),
            answer: answer.to_string(),
            explanation: "It is Paris.".to_string(),
            image_url: image_url.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_answer_rules() {
        assert!(validate_answer("PARIS").is_ok());
        assert!(validate_answer("NEW YORK").is_ok());
        assert_eq!(validate_answer("   ").unwrap_err().code, "empty_answer");
        assert_eq!(
            validate_answer(&"A".repeat(MAX_ANSWER_CHARS + 1)).unwrap_err().code,
            "answer_too_long"
        );
    }

    #[test]
    fn test_image_url_rules() {
        assert!(validate_image_url("https://cdn.example.com/paris.png").is_ok());
        assert!(validate_image_url("NULL").is_ok());
        assert!(validate_image_url("").is_ok());
        assert!(validate_image_url("ftp://cdn.example.com/x.png").is_err());
        assert!(validate_image_url("not a url").is_err());
    }

    #[test]
    fn test_question_rules() {
        assert!(validate_question(&question("PARIS", Some("NULL"))).is_ok());
        assert!(validate_question(&question("", None)).is_err());

        let mut blank = question("PARIS", None);
        blank.question = String::new();
        assert_eq!(validate_question(&blank).unwrap_err().code, "empty_question");
    }
}
