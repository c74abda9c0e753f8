//! Transactional email sending for the selected subset.

use api_protocol::types::ApiUser;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::EmailConfig;

/// Mailer errors.
#[derive(Debug, Error)]
pub enum MailerError {
    /// Network-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The email service answered with a non-success status.
    #[error("email service returned status {0}")]
    Service(u16),
}

#[derive(Debug, Serialize)]
struct TemplateParams {
    from_name: String,
    to_name: String,
    message: String,
}

/// EmailJS-compatible send payload.
#[derive(Debug, Serialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

/// Formats the selected records as the email's message block.
pub fn format_selected_users(users: &[ApiUser]) -> String {
    let entries: Vec<String> = users
        .iter()
        .map(|u| {
            format!(
                "\nID: {}, Name: {}, Phone number: {}, Email: {}, Hobbies: {}",
                u.id, u.name, u.phone_number, u.email, u.hobbies
            )
        })
        .collect();

    format!("Here are the selected users: {}", entries.join(","))
}

/// Sends the selected subset through the configured email service.
pub struct Mailer {
    config: EmailConfig,
    http_client: reqwest::Client,
}

impl Mailer {
    /// Creates a mailer from email settings.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Sends one email describing the given records.
    pub async fn send_selected_users(&self, users: &[ApiUser]) -> Result<(), MailerError> {
        let request = SendRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            user_id: self.config.public_key.clone(),
            template_params: TemplateParams {
                from_name: self.config.from_name.clone(),
                to_name: self.config.to_name.clone(),
                message: format_selected_users(users),
            },
        };

        debug!(count = users.len(), "Sending selected users email");

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MailerError::Service(response.status().as_u16()));
        }
        Ok(())
    }
}
