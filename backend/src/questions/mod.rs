use axum::{
    async_trait,
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shared::constants::{DEFAULT_ARCHIVE_LIMIT, MAX_ARCHIVE_LIMIT};
use shared::validation::validate_question;
use shared::{Question, QuestionSummary};
use tracing::{error, info};

use crate::error::Error;
use crate::AppState;

mod memory;
mod postgres;

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

/// Read access to the question-of-the-day records, newest first.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn latest(&self) -> Result<Option<Question>, Error>;
    async fn by_id(&self, id: i64) -> Result<Option<Question>, Error>;
    async fn recent(&self, limit: i64) -> Result<Vec<QuestionSummary>, Error>;
}

fn checked(question: Question) -> Result<Json<Question>, Error> {
    if let Err(e) = validate_question(&question) {
        error!("question {} failed validation: {}", question.id, e.code);
        return Err(Error::InvalidQuestion);
    }
    Ok(Json(question))
}

async fn latest_question(State(state): State<AppState>) -> Result<Json<Question>, Error> {
    let question = state.questions.latest().await?.ok_or(Error::NotFound)?;
    info!("serving question of the day #{}", question.id);
    checked(question)
}

async fn question_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Question>, Error> {
    let question = state.questions.by_id(id).await?.ok_or(Error::NotFound)?;
    checked(question)
}

#[derive(Debug, Deserialize)]
pub struct ArchiveQuery {
    pub limit: Option<i64>,
}

fn archive_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_ARCHIVE_LIMIT)
        .clamp(1, MAX_ARCHIVE_LIMIT)
}

async fn recent_questions(
    State(state): State<AppState>,
    Query(params): Query<ArchiveQuery>,
) -> Result<Json<Vec<QuestionSummary>>, Error> {
    let questions = state.questions.recent(archive_limit(params.limit)).await?;
    Ok(Json(questions))
}

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(recent_questions))
        .route("/latest", get(latest_question))
        .route("/:id", get(question_by_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_limit_is_clamped() {
        assert_eq!(archive_limit(None), DEFAULT_ARCHIVE_LIMIT);
        assert_eq!(archive_limit(Some(0)), 1);
        assert_eq!(archive_limit(Some(5)), 5);
        assert_eq!(archive_limit(Some(10_000)), MAX_ARCHIVE_LIMIT);
    }
}
