//! API response types.

use serde::{Deserialize, Serialize};

use crate::types::ApiUser;

/// Response envelope for create and read-one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: ApiUser,
}

/// Response envelope for list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<ApiUser>,
}

/// Response envelope for update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUserResponse {
    pub updated_user: ApiUser,
}

/// Generic message envelope, used for delete acknowledgments and all errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
