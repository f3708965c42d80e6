//! Repository for the `tasks` table.

use sqlx::PgPool;

use crate::models::task::{CreateTask, Task};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all tasks ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }
}
