//! Performance score entity model and DTOs.

use perftrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A performance score row from the `performance_scores` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Score {
    pub id: DbId,
    pub user_id: DbId,
    pub task_id: DbId,
    pub week_number: i32,
    /// Integer in `0..=10`; see `perftrack_core::scoring`.
    pub score: i32,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
}

/// A score row joined with the task title and the scored user's full name,
/// as rendered by the history table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScoreHistoryEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub task_id: DbId,
    pub week_number: i32,
    pub score: i32,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub task_title: String,
    pub full_name: String,
}

/// DTO for inserting a new performance score.
#[derive(Debug)]
pub struct CreateScore {
    pub user_id: DbId,
    pub task_id: DbId,
    pub week_number: i32,
    pub score: i32,
    pub feedback: Option<String>,
}
