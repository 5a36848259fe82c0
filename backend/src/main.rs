use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::middleware::require_auth;
use crate::config::Config;
use crate::questions::{MemoryQuestionStore, PgQuestionStore, QuestionStore};

mod auth;
mod config;
mod error;
mod logging;
mod questions;
mod stats;

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionStore>,
    pub jwt_secret: Option<Arc<str>>,
}

pub async fn health_check() -> impl IntoResponse {
    "OK"
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    // Unknown paths fall through to index.html so client-side routes load.
    let index = config.static_dir.join("index.html");
    let static_service = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
    .layer(ServeDir::new(&config.static_dir).fallback(ServeFile::new(index)));

    let protected_routes = Router::new()
        .route("/stats/me", get(stats::my_stats))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Unknown API paths answer JSON 404 instead of the frontend shell.
    let api_routes = Router::new()
        .route("/health_check", get(health_check))
        .nest("/questions", questions::create_router())
        .merge(protected_routes)
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn question_store(config: &Config) -> Result<Arc<dyn QuestionStore>, Box<dyn std::error::Error>> {
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("connected to question database");
            Ok(Arc::new(PgQuestionStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set, serving the built-in sample question");
            Ok(Arc::new(MemoryQuestionStore::sample()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::setup();

    let config = Config::from_env()?;
    if config.jwt_secret.is_none() {
        warn!("JWT_SECRET_KEY not set, /api/stats/me will answer 503");
    }

    let state = AppState {
        questions: question_store(&config).await?,
        jwt_secret: config.jwt_secret.as_deref().map(Arc::from),
    };

    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::path::PathBuf;
    use serde_json::Value;
    use shared::{PlayerStats, Question, QuestionSummary};
    use tower::ServiceExt;

    use crate::auth::tests::{token_for, SECRET};

    fn question(id: i64, answer: &str, created_at: &str) -> Question {
        Question {
            id,
            question: format!("Question number {}?", id),
            answer: answer.to_string(),
            explanation: "See the notes.".to_string(),
            image_url: Some("NULL".to_string()),
            created_at: Some(created_at.to_string()),
        }
    }

    fn test_config_with(static_dir: PathBuf) -> Config {
        Config {
            database_url: None,
            jwt_secret: Some(SECRET.to_string()),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            static_dir,
            allowed_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        }
    }

    fn test_config() -> Config {
        test_config_with(std::env::temp_dir().join("quix-missing-static"))
    }

    fn static_dir_with_index() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quix-static-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.join("app.js"), "console.log(1);").unwrap();
        dir
    }

    fn memory_state() -> AppState {
        AppState {
            questions: Arc::new(MemoryQuestionStore::sample()),
            jwt_secret: Some(Arc::from(SECRET)),
        }
    }

    fn app_with(questions: Vec<Question>, jwt_secret: Option<&str>) -> Router {
        let state = AppState {
            questions: Arc::new(MemoryQuestionStore::new(questions)),
            jwt_secret: jwt_secret.map(Arc::from),
        };
        build_router(state, &test_config())
    }

    fn app() -> Router {
        app_with(
            vec![
                question(1, "PARIS", "2024-10-01 00:00:00+00"),
                question(2, "NEW YORK", "2024-10-02 00:00:00+00"),
                question(3, "OSLO", "2024-10-03 00:00:00+00"),
            ],
            Some(SECRET),
        )
    }

    async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(app(), "/api/health_check", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn test_latest_question_is_newest() {
        let (status, body) = get(app(), "/api/questions/latest", None).await;
        assert_eq!(status, StatusCode::OK);
        let question: Question = serde_json::from_slice(&body).unwrap();
        assert_eq!(question.id, 3);
        assert_eq!(question.answer, "OSLO");
    }

    #[tokio::test]
    async fn test_question_by_id() {
        let (status, body) = get(app(), "/api/questions/2", None).await;
        assert_eq!(status, StatusCode::OK);
        let question: Question = serde_json::from_slice(&body).unwrap();
        assert_eq!(question.answer, "NEW YORK");
        assert_eq!(question.image(), None);
    }

    #[tokio::test]
    async fn test_unknown_question_is_404() {
        let (status, body) = get(app(), "/api/questions/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Question not found");
    }

    #[tokio::test]
    async fn test_no_questions_is_404() {
        let (status, _) = get(app_with(vec![], Some(SECRET)), "/api/questions/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_question_is_rejected() {
        let app = app_with(vec![question(1, "  ", "2024-10-01 00:00:00+00")], Some(SECRET));
        let (status, _) = get(app, "/api/questions/latest", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_archive_lists_newest_first_without_answers() {
        let (status, body) = get(app(), "/api/questions?limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        let summaries: Vec<QuestionSummary> = serde_json::from_slice(&body).unwrap();
        assert_eq!(summaries.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 2]);

        let raw: Value = serde_json::from_slice(&body).unwrap();
        assert!(raw[0].get("answer").is_none());
    }

    #[tokio::test]
    async fn test_stats_require_token() {
        let (status, _) = get(app(), "/api/stats/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let bad = token_for(&uuid::Uuid::new_v4().to_string(), 600, "wrong-secret");
        let (status, _) = get(app(), "/api/stats/me", Some(&bad)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_stats_for_signed_in_player() {
        let token = token_for(&uuid::Uuid::new_v4().to_string(), 600, SECRET);
        let (status, body) = get(app(), "/api/stats/me", Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        let stats: PlayerStats = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats, PlayerStats::placeholder());
    }

    #[tokio::test]
    async fn test_stats_unavailable_without_secret() {
        let token = token_for(&uuid::Uuid::new_v4().to_string(), 600, SECRET);
        let app = app_with(vec![], None);
        let (status, _) = get(app, "/api/stats/me", Some(&token)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let dir = static_dir_with_index();
        let app = build_router(memory_state(), &test_config_with(dir.clone()));
        let (status, body) = get(app, "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Not found");
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_client_routes_serve_index() {
        let dir = static_dir_with_index();
        let config = test_config_with(dir.clone());

        let (status, body) = get(build_router(memory_state(), &config), "/archive", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>app</html>");

        let (status, body) = get(build_router(memory_state(), &config), "/app.js", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log(1);");

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_only() {
        let request = |origin: &'static str| {
            Request::builder()
                .uri("/api/health_check")
                .header("Origin", origin)
                .body(Body::empty())
                .unwrap()
        };

        let response = app().oneshot(request("http://localhost:3000")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response.headers().get("access-control-allow-credentials").unwrap(),
            "true"
        );

        let response = app().oneshot(request("https://elsewhere.example")).await.unwrap();
        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
