//! User record entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store on creation.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Phone number in `123-456-7890` form, unique across all records.
    pub phone_number: String,
    /// Email address, unique across all records.
    pub email: String,
    /// Free-form hobbies text.
    pub hobbies: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The four business fields of a user record, as submitted by a client.
///
/// A draft carries no identity and no timestamps; the store supplies both
/// when the draft is persisted. Call [`UserDraft::validate`] before handing
/// a draft to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub hobbies: String,
}

impl User {
    /// Materializes a draft into a record with a fresh identity.
    pub fn from_draft(draft: UserDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            phone_number: draft.phone_number,
            email: draft.email,
            hobbies: draft.hobbies,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all four business fields and bumps the update timestamp.
    ///
    /// Identity and creation time are preserved.
    pub fn apply_draft(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.phone_number = draft.phone_number;
        self.email = draft.email;
        self.hobbies = draft.hobbies;
        self.updated_at = Utc::now();
    }
}

impl UserDraft {
    /// Creates a draft from the four business fields.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        hobbies: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            hobbies: hobbies.into(),
        }
    }
}
