//! Signup rules for usernames and passwords.
//!
//! Lengths are counted in characters, not bytes, so multi-byte names are
//! judged by what the user typed.

use crate::error::CoreError;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum accepted username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 5;

/// Reported when a signup password is shorter than [`MIN_PASSWORD_LENGTH`].
pub const PASSWORD_TOO_SHORT: &str = "password must be at least 8 characters!!";

/// Reported when a signup username is shorter than [`MIN_USERNAME_LENGTH`].
pub const USERNAME_TOO_SHORT: &str = "username must be more than 4 characters long!!";

/// Check the length rules for a username that is not yet taken.
///
/// The password is checked first, so a short password is reported even when
/// the username is also too short.
pub fn validate_new_account(username: &str, password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(PASSWORD_TOO_SHORT.into()));
    }
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(CoreError::Validation(USERNAME_TOO_SHORT.into()));
    }
    Ok(())
}
