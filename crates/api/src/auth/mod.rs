//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed identity tokens issued on login.

pub mod jwt;
pub mod password;
