//! Score range rule shared by the API handler and the schema.
//!
//! The same bounds are enforced twice: here (so the handler can return a
//! 400 before touching the database) and by the CHECK constraint on
//! `performance_scores.score`.

use crate::error::CoreError;

/// Lowest accepted performance score.
pub const MIN_SCORE: i32 = 0;

/// Highest accepted performance score.
pub const MAX_SCORE: i32 = 10;

/// Validate that a submitted score falls within `[MIN_SCORE, MAX_SCORE]`.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Validation(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}"
        )));
    }
    Ok(())
}
