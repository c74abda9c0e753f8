//! API request types.

use entities::UserDraft;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four business fields of a user form, as a well-typed client sends them.
///
/// Used by the console client for create and update submissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitUserRequest {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub hobbies: String,
}

impl From<UserDraft> for SubmitUserRequest {
    fn from(draft: UserDraft) -> Self {
        Self {
            name: draft.name,
            phone_number: draft.phone_number,
            email: draft.email,
            hobbies: draft.hobbies,
        }
    }
}

/// A user form body as the server first sees it, fields still untyped.
///
/// The server accepts any JSON object here and only then checks that all
/// four fields are present and are strings, so a missing or non-string
/// field is a validation failure rather than a deserialization one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormBody {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub phone_number: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub hobbies: Option<Value>,
}

impl UserFormBody {
    /// Converts the body into a draft if all four fields are strings.
    pub fn into_draft(self) -> Option<UserDraft> {
        fn text(value: Option<Value>) -> Option<String> {
            match value {
                Some(Value::String(s)) => Some(s),
                _ => None,
            }
        }

        Some(UserDraft {
            name: text(self.name)?,
            phone_number: text(self.phone_number)?,
            email: text(self.email)?,
            hobbies: text(self.hobbies)?,
        })
    }
}
