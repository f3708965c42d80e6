//! Row models (`sqlx::FromRow`) and create-DTOs for each table.

pub mod score;
pub mod task;
pub mod user;
