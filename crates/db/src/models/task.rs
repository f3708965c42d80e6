//! Task entity model and DTOs.

use perftrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A task row from the `tasks` table, serialized as-is by the listing
/// endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new task (operator/test provisioning; there is no
/// task-creation endpoint).
#[derive(Debug)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
}
