use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::{validate_jwt, AuthError};
use crate::AppState;

#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let secret = state.jwt_secret.as_deref().ok_or(AuthError::NotConfigured)?;
    let token = bearer_token(&request).ok_or(AuthError::MissingToken)?;

    let user_id = validate_jwt(token, secret).map_err(|e| {
        tracing::debug!("rejected bearer token: {}", e);
        e
    })?;

    request.extensions_mut().insert(UserId(user_id));
    Ok(next.run(request).await)
}
