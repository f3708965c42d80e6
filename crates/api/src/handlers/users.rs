//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use perftrack_db::models::user::InternSummary;
use perftrack_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireScorer;
use crate::state::AppState;

/// GET /api/users/interns
///
/// List every user with the `intern` role, for the score-entry dropdown.
pub async fn list_interns(
    RequireScorer(_user): RequireScorer,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InternSummary>>> {
    let interns = UserRepo::list_interns(&state.pool).await?;
    Ok(Json(interns))
}
