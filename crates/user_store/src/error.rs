//! User store error types.

use thiserror::Error;
use uuid::Uuid;

/// A user record field covered by a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    PhoneNumber,
    Email,
}

impl UniqueField {
    /// The field name as it appears on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            UniqueField::PhoneNumber => "phoneNumber",
            UniqueField::Email => "email",
        }
    }
}

/// Errors that can occur during user store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given identifier.
    #[error("user not found: {id}")]
    NotFound { id: Uuid },

    /// Another record already holds this phone number or email.
    #[error("duplicate value for {}", field.wire_name())]
    Duplicate { field: UniqueField },

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    /// Creates a duplicate-field error.
    pub fn duplicate(field: UniqueField) -> Self {
        Self::Duplicate { field }
    }
}

/// Result type for user store operations.
pub type StoreResult<T> = Result<T, StoreError>;
