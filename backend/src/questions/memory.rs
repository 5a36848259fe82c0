use axum::async_trait;
use shared::{Question, QuestionSummary};

use super::QuestionStore;
use crate::error::Error;

/// Fixed set of questions kept in memory, used when no database is configured.
pub struct MemoryQuestionStore {
    // Newest first.
    questions: Vec<Question>,
}

impl MemoryQuestionStore {
    pub fn new(mut questions: Vec<Question>) -> Self {
        questions.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Self { questions }
    }

    pub fn sample() -> Self {
        Self::new(vec![Question {
            id: 1,
            question: "Which planet in our solar system has the shortest day, spinning once on its axis in under ten hours?".to_string(),
            answer: "JUPITER".to_string(),
            explanation: "Jupiter completes a rotation in about 9 hours and 56 minutes, the fastest of any planet.".to_string(),
            image_url: None,
            created_at: Some("2024-10-12 00:00:00+00".to_string()),
        }])
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn latest(&self) -> Result<Option<Question>, Error> {
        Ok(self.questions.first().cloned())
    }

    async fn by_id(&self, id: i64) -> Result<Option<Question>, Error> {
        Ok(self.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<QuestionSummary>, Error> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .questions
            .iter()
            .take(limit)
            .map(Question::summary)
            .collect())
    }
}
