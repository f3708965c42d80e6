//! Authentication primitives.
//!
//! - [`jwt`] -- access-token generation and validation.
//!
//! There is deliberately no password module: accounts are provisioned out
//! of band and the login endpoint does not verify the submitted password.

pub mod jwt;
