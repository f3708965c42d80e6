//! Route definitions for the `/performance-scores` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::scores;
use crate::state::AppState;

/// Routes mounted at `/performance-scores`.
///
/// ```text
/// GET  /                 -> list_scores
/// POST /                 -> create_score
/// GET  /user/{user_id}   -> list_scores_for_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(scores::list_scores).post(scores::create_score),
        )
        .route("/user/{user_id}", get(scores::list_scores_for_user))
}
