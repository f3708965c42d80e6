//! Repository for the `users` table.

use perftrack_core::roles::ROLE_INTERN;
use sqlx::PgPool;

use crate::models::user::{CreateUser, InternSummary, User};

/// Column list shared across queries to avoid repetition.
///
/// Never add `password` here; see [`User`].
const COLUMNS: &str = "id, username, email, full_name, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, full_name, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List every user with the `intern` role, ordered by full name for
    /// stable dropdown rendering.
    pub async fn list_interns(pool: &PgPool) -> Result<Vec<InternSummary>, sqlx::Error> {
        sqlx::query_as::<_, InternSummary>(
            "SELECT id, username, email, full_name FROM users
             WHERE role = $1
             ORDER BY full_name ASC",
        )
        .bind(ROLE_INTERN)
        .fetch_all(pool)
        .await
    }
}
