//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::Json;
use perftrack_db::models::task::Task;
use perftrack_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/tasks
///
/// List all tasks. Any authenticated user may read these.
pub async fn list_tasks(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}
