//! Validation for the profile screen's change-password form.
//!
//! No credential store exists; a successful check only clears the form.

use thiserror::Error;

use super::config::MIN_PASSWORD_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Passwords do not match!")]
    Mismatch,
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Email address is required")]
    MissingEmail,
}

/// Check a change request. Mismatch is reported before length so the user
/// sees the same message regardless of what they typed first.
pub fn validate_password_change(
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<(), PasswordError> {
    if password != confirmation {
        return Err(PasswordError::Mismatch);
    }
    if email.trim().is_empty() {
        return Err(PasswordError::MissingEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
