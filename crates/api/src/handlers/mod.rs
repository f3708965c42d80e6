//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod scores;
pub mod tasks;
pub mod users;
