pub mod auth;
pub mod health;
pub mod scores;
pub mod tasks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /login                             login (public, admin accounts only)
///
/// /users/interns                     list interns (admin | group_leader)
///
/// /tasks                             list tasks (any authenticated)
///
/// /performance-scores                list all (admin | group_leader),
///                                    create (admin | group_leader)
/// /performance-scores/user/{id}      one user's scores (interns: own only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login only; logout is the client dropping the token).
        .merge(auth::router())
        // Intern listing for the score-entry form.
        .nest("/users", users::router())
        // Task listing for the score-entry form.
        .nest("/tasks", tasks::router())
        // Score submission and history.
        .nest("/performance-scores", scores::router())
}
