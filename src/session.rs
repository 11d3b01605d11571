// SPDX-License-Identifier: MPL-2.0
//! Signed-in identity.
//!
//! There is no backend: any well-formed email with a non-empty password
//! signs in a mock administrator named after the email's local part.

use crate::records::owner::is_valid_email;
use std::fmt;

/// The administrator currently using the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Why a sign-in attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    EmailRequired,
    InvalidEmail,
    PasswordRequired,
}

impl LoginError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LoginError::EmailRequired => "login-error-email-required",
            LoginError::InvalidEmail => "login-error-email-invalid",
            LoginError::PasswordRequired => "login-error-password-required",
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::EmailRequired => write!(f, "email is required"),
            LoginError::InvalidEmail => write!(f, "email is not valid"),
            LoginError::PasswordRequired => write!(f, "password is required"),
        }
    }
}

impl std::error::Error for LoginError {}

#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Validates the credentials and signs the user in.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(LoginError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(LoginError::PasswordRequired);
        }

        let user = User {
            name: display_name_from_email(email),
            email: email.to_string(),
        };
        tracing::info!(email = %user.email, "signed in");
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Clears the signed-in user, returning it if there was one.
    pub fn sign_out(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(user) = &user {
            tracing::info!(email = %user.email, "signed out");
        }
        user
    }
}

/// Builds a display name from an email local part: `jane.doe` -> `Jane Doe`.
#[must_use]
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let name = local
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        email.to_string()
    } else {
        name
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First letter of each whitespace-separated part, uppercased.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
