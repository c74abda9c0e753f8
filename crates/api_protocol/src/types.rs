//! Shared wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user record as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub hobbies: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entities::User> for ApiUser {
    fn from(user: entities::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone_number: user.phone_number,
            email: user.email,
            hobbies: user.hobbies,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
