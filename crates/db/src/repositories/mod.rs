//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod score_repo;
pub mod task_repo;
pub mod user_repo;

pub use score_repo::ScoreRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
