//! Sign-up Validation
//!
//! Client-side style field checking against the mock existing-users
//! list: required fields, email shape, uniqueness, length minimums,
//! password confirmation, and the age floor. All failures are
//! collected so every field can show its message at once.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Loose shape check, same as the prototype's `\S+@\S+\.\S+`
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern"))
}

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_AGE_YEARS: u32 = 13;

/// An already-registered account, for uniqueness checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingUser {
    pub email: String,
    pub phone: String,
    pub username: String,
}

impl ExistingUser {
    pub fn new(email: &str, phone: &str, username: &str) -> Self {
        Self {
            email: email.to_string(),
            phone: phone.to_string(),
            username: username.to_string(),
        }
    }
}

/// Incoming sign-up form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub phone: String,
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub confirm_password: String,
    pub birthday: Option<NaiveDate>,
}

/// An inline message attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl SignUpRequest {
    /// Run every field check, returning all failures
    pub fn validate(&self, existing: &[ExistingUser], today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !email_pattern().is_match(self.email.trim()) {
            errors.push(FieldError::new("email", "Email is invalid"));
        } else if existing.iter().any(|u| u.email == self.email.trim()) {
            errors.push(FieldError::new("email", "This email is already registered"));
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        } else if existing.iter().any(|u| u.phone == self.phone.trim()) {
            errors.push(FieldError::new("phone", "This phone number is already registered"));
        }

        if self.username.trim().is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        } else if self.username.trim().len() < MIN_USERNAME_LEN {
            errors.push(FieldError::new(
                "username",
                "Username must be at least 3 characters",
            ));
        } else if existing.iter().any(|u| u.username == self.username.trim()) {
            errors.push(FieldError::new("username", "This username is already taken"));
        }

        if self.display_name.trim().is_empty() {
            errors.push(FieldError::new("display_name", "Display name is required"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 8 characters",
            ));
        }

        if self.password != self.confirm_password {
            errors.push(FieldError::new("confirm_password", "Passwords do not match"));
        }

        match self.birthday {
            None => errors.push(FieldError::new("birthday", "Birthday is required")),
            Some(birthday) => {
                let age = today.years_since(birthday).unwrap_or(0);
                if age < MIN_AGE_YEARS {
                    errors.push(FieldError::new(
                        "birthday",
                        "You must be at least 13 years old",
                    ));
                }
            }
        }

        errors
    }
}
