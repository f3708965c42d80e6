//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use perftrack_core::error::CoreError;
use perftrack_core::roles::can_score;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `admin` or `group_leader` role. Rejects with 403 Forbidden otherwise.
///
/// These are the roles allowed to list interns, submit scores, and read the
/// full score history.
///
/// ```ignore
/// async fn scorer_only(RequireScorer(user): RequireScorer) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin or group leader here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireScorer(pub AuthUser);

impl FromRequestParts<AppState> for RequireScorer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !can_score(&user.role) {
            return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
        }
        Ok(RequireScorer(user))
    }
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
