//! User entity model and DTOs.

use perftrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
///
/// The table's `password` column is deliberately absent: nothing in the
/// service reads or compares it, so it is never selected.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// One of `"admin"`, `"group_leader"`, `"intern"`.
    pub role: String,
    pub created_at: Timestamp,
}

/// The subset of user fields the intern listing exposes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InternSummary {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// DTO for creating a new user (operator/test provisioning; there is no
/// user-creation endpoint).
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}
