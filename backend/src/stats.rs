use axum::{Extension, Json};
use shared::PlayerStats;
use tracing::info;

use crate::auth::middleware::UserId;

// Stats persistence lives with the auth service; signed-in players get the
// fixed record until it is wired up.
pub async fn my_stats(Extension(user_id): Extension<UserId>) -> Json<PlayerStats> {
    info!("stats requested by {}", user_id.0);
    Json(PlayerStats::placeholder())
}
