use axum::async_trait;
use shared::{Question, QuestionSummary};
use sqlx::PgPool;

use super::QuestionStore;
use crate::error::Error;

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    explanation: String,
    image_url: Option<String>,
    created_at: Option<String>,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            explanation: row.explanation,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    question: String,
    created_at: Option<String>,
}

pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn latest(&self) -> Result<Option<Question>, Error> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, explanation, image_url, created_at::TEXT AS created_at
            FROM question
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    async fn by_id(&self, id: i64) -> Result<Option<Question>, Error> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, explanation, image_url, created_at::TEXT AS created_at
            FROM question
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    async fn recent(&self, limit: i64) -> Result<Vec<QuestionSummary>, Error> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, question, created_at::TEXT AS created_at
            FROM question
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| QuestionSummary {
                id: row.id,
                question: row.question,
                created_at: row.created_at,
            })
            .collect())
    }
}
