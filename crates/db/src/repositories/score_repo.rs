//! Repository for the `performance_scores` table.

use perftrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{CreateScore, Score, ScoreHistoryEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, task_id, week_number, score, feedback, created_at";

/// Joined column list for history queries: the score row plus the task
/// title and the scored user's full name.
const HISTORY_COLUMNS: &str = "ps.id, ps.user_id, ps.task_id, ps.week_number, ps.score, \
                                ps.feedback, ps.created_at, t.title AS task_title, u.full_name";

/// Provides CRUD operations for performance scores.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert a new score, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateScore) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO performance_scores (user_id, task_id, week_number, score, feedback)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.user_id)
            .bind(input.task_id)
            .bind(input.week_number)
            .bind(input.score)
            .bind(&input.feedback)
            .fetch_one(pool)
            .await
    }

    /// List every score joined with task title and user name, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ScoreHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {HISTORY_COLUMNS}
             FROM performance_scores ps
             JOIN tasks t ON ps.task_id = t.id
             JOIN users u ON ps.user_id = u.id
             ORDER BY ps.created_at DESC"
        );
        sqlx::query_as::<_, ScoreHistoryEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one user's scores joined as in [`Self::list_all`], most recent
    /// week first, then newest submission first within a week.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ScoreHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {HISTORY_COLUMNS}
             FROM performance_scores ps
             JOIN tasks t ON ps.task_id = t.id
             JOIN users u ON ps.user_id = u.id
             WHERE ps.user_id = $1
             ORDER BY ps.week_number DESC, ps.created_at DESC"
        );
        sqlx::query_as::<_, ScoreHistoryEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
