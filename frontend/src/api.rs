use std::fmt;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::session::AuthUser;
use shared::{PlayerStats, Question, QuestionSummary};

use crate::config::{anon_key, get_api_base_url, get_auth_base_url};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Status(code) => write!(f, "unexpected status {}", code),
            Self::Decode(e) => write!(f, "could not read response: {}", e),
        }
    }
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(404))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401))
    }
}

async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>, with_api_key: bool) -> Result<T, ApiError> {
    let mut request = Request::get(url).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    if with_api_key {
        if let Some(key) = anon_key() {
            request = request.header("apikey", key);
        }
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_latest_question() -> Result<Question, ApiError> {
    get_json(&format!("{}/api/questions/latest", get_api_base_url()), None, false).await
}

pub async fn fetch_question(id: i64) -> Result<Question, ApiError> {
    get_json(&format!("{}/api/questions/{}", get_api_base_url(), id), None, false).await
}

pub async fn fetch_archive(limit: i64) -> Result<Vec<QuestionSummary>, ApiError> {
    get_json(&format!("{}/api/questions?limit={}", get_api_base_url(), limit), None, false).await
}

pub async fn fetch_stats(token: &str) -> Result<PlayerStats, ApiError> {
    get_json(&format!("{}/api/stats/me", get_api_base_url()), Some(token), false).await
}

pub async fn fetch_user(token: &str) -> Result<AuthUser, ApiError> {
    get_json(&format!("{}/user", get_auth_base_url()), Some(token), true).await
}
