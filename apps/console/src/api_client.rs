//! Client for communication with the Rolodex API server.

use api_protocol::{
    requests::SubmitUserRequest,
    responses::{MessageResponse, UpdatedUserResponse, UserResponse, UsersResponse},
    types::ApiUser,
};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Fallback shown when the server gives no usable message.
const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, try again later.";

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ClientError {
    /// The message to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Client for the user record API.
pub struct ApiClient {
    /// Server base URL.
    base_url: String,
    /// HTTP client.
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new API client.
    pub fn new(server_url: &str) -> Self {
        Self {
            base_url: server_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Decodes a success body, or turns a non-success status into
    /// [`ClientError::Api`] carrying the server's message.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| GENERIC_ERROR_MESSAGE.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// Fetches all user records.
    pub async fn list_users(&self) -> Result<Vec<ApiUser>, ClientError> {
        debug!("Fetching user list");

        let response = self
            .http_client
            .get(format!("{}/api/users", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: UsersResponse = Self::decode(response).await?;
        Ok(body.users)
    }

    /// Fetches a single user record by ID.
    pub async fn get_user(&self, id: Uuid) -> Result<ApiUser, ClientError> {
        debug!(user_id = %id, "Fetching user");

        let response = self
            .http_client
            .get(format!("{}/api/users/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: UserResponse = Self::decode(response).await?;
        Ok(body.user)
    }

    /// Creates a user record and returns the persisted record.
    pub async fn create_user(&self, request: &SubmitUserRequest) -> Result<ApiUser, ClientError> {
        debug!("Creating user");

        let response = self
            .http_client
            .post(format!("{}/api/users", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: UserResponse = Self::decode(response).await?;
        Ok(body.user)
    }

    /// Replaces all four business fields of a user record.
    pub async fn update_user(
        &self,
        id: Uuid,
        request: &SubmitUserRequest,
    ) -> Result<ApiUser, ClientError> {
        debug!(user_id = %id, "Updating user");

        let response = self
            .http_client
            .patch(format!("{}/api/users/{id}", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: UpdatedUserResponse = Self::decode(response).await?;
        Ok(body.updated_user)
    }

    /// Deletes a user record, returning the server's acknowledgment message.
    pub async fn delete_user(&self, id: Uuid) -> Result<String, ClientError> {
        debug!(user_id = %id, "Deleting user");

        let response = self
            .http_client
            .delete(format!("{}/api/users/{id}", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: MessageResponse = Self::decode(response).await?;
        Ok(body.message)
    }
}
