//! Domain error type shared by the database and API layers.

/// Error conditions the tracker's domain logic can raise.
///
/// The API layer maps these onto HTTP statuses (400 / 401 / 403); database
/// failures travel separately as `sqlx::Error`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
