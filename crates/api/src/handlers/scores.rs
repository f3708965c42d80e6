//! Handlers for the `/performance-scores` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use perftrack_core::error::CoreError;
use perftrack_core::roles::ROLE_INTERN;
use perftrack_core::scoring::validate_score;
use perftrack_core::types::DbId;
use perftrack_db::models::score::{CreateScore, Score, ScoreHistoryEntry};
use perftrack_db::repositories::ScoreRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireScorer};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/performance-scores`.
#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    pub user_id: DbId,
    pub task_id: DbId,
    pub week_number: i32,
    pub score: i32,
    pub feedback: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/performance-scores
///
/// Record a score for an intern on a task. Returns 201 with the created row.
pub async fn create_score(
    RequireScorer(user): RequireScorer,
    State(state): State<AppState>,
    Json(input): Json<CreateScoreRequest>,
) -> AppResult<(StatusCode, Json<Score>)> {
    validate_score(input.score)?;

    let create = CreateScore {
        user_id: input.user_id,
        task_id: input.task_id,
        week_number: input.week_number,
        score: input.score,
        feedback: input.feedback,
    };
    let score = ScoreRepo::create(&state.pool, &create).await?;

    tracing::info!(
        score_id = score.id,
        user_id = score.user_id,
        task_id = score.task_id,
        week_number = score.week_number,
        scored_by = user.user_id,
        "Performance score recorded"
    );

    Ok((StatusCode::CREATED, Json(score)))
}

/// GET /api/performance-scores
///
/// Full score history joined with task titles and intern names, newest first.
pub async fn list_scores(
    RequireScorer(_user): RequireScorer,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ScoreHistoryEntry>>> {
    let scores = ScoreRepo::list_all(&state.pool).await?;
    Ok(Json(scores))
}

/// GET /api/performance-scores/user/{user_id}
///
/// One user's score history. Interns may only read their own; a nonexistent
/// user id yields an empty list.
pub async fn list_scores_for_user(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<ScoreHistoryEntry>>> {
    if user.role == ROLE_INTERN && user.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    let scores = ScoreRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(scores))
}
