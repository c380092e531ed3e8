//! User record model.
//!
//! # Responsibility
//! - Define the persisted `User` row and the `NewUser` insertion input.
//! - Reject blank names and emails before they reach storage.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes once assigned.
//! - `email` is unique across the store (enforced by SQLite, not here).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier (`users.id`, SQLite `INTEGER PRIMARY KEY`).
pub type UserId = i64;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Insert payload; `id` is left to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validation failures raised before a `NewUser` is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyEmail,
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::EmptyEmail => write!(f, "user email must not be empty"),
        }
    }
}

impl Error for UserValidationError {}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks that `name` and `email` carry non-whitespace content.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(())
    }

    /// Attaches the store-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

impl Display for User {
    /// Renders `(id, 'name', 'email')`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.id,
            quote_text(&self.name),
            quote_text(&self.email)
        )
    }
}

/// Quotes a text value as a tuple literal element.
///
/// Single quotes by default; double quotes when the text contains `'` but
/// no `"`. Backslash, the chosen quote and control whitespace are escaped.
pub(crate) fn quote_text(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}
