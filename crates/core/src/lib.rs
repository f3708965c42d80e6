//! Shared domain types for the intern performance tracker.
//!
//! This crate is dependency-light on purpose: it holds the types and rules
//! that both the database layer and the API layer need to agree on.

pub mod error;
pub mod roles;
pub mod scoring;
pub mod types;
