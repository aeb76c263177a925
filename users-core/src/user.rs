use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::validation::{validate_user_input, ValidationError};

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on creation; never changes afterwards.
    pub id: UserId,
    /// Display name, at most 255 bytes.
    pub name: String,
    /// Contact address, at most 255 bytes. The format is not checked.
    pub email: String,
    /// Age in years, at least 18.
    pub age: i32,
}

/// The writable fields of a user, as sent in create and update bodies.
///
/// Updates replace all three fields at once. Missing fields decode to their
/// empty value and are then caught by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl UserInput {
    /// Convenience constructor taking any string-like values.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Check every field constraint and return all violations found.
    ///
    /// An empty vector means the input is acceptable.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_user_input(&self.name, &self.email, self.age)
    }

    /// Build the stored record for this input under the given id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}
