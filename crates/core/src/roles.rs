//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260301000001_create_users_table.sql`. There is no roles table; the
//! role is a fixed string stored directly on the user row.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_GROUP_LEADER: &str = "group_leader";
pub const ROLE_INTERN: &str = "intern";

/// Whether a role may view all interns and scores and submit new scores.
pub fn can_score(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_GROUP_LEADER
}
