//! Domain building blocks shared by the Showtime crates.
//!
//! - [`error`] -- the domain error enum every layer maps into.
//! - [`types`] -- shared aliases for keys, timestamps and documents.
//! - [`filter`] -- query-string to document-filter coercion.
//! - [`credentials`] -- signup rules for usernames and passwords.

pub mod credentials;
pub mod error;
pub mod filter;
pub mod types;
