//! Console configuration.

use std::env;

const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Transactional email service settings.
///
/// Only present when the service/template/public-key triple is fully
/// configured; a missing configuration surfaces when the user tries to
/// send, not at startup.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Email service endpoint URL.
    pub endpoint: String,
    /// Service identifier.
    pub service_id: String,
    /// Template identifier.
    pub template_id: String,
    /// Public (user) key.
    pub public_key: String,
    /// Sender display name.
    pub from_name: String,
    /// Recipient display name.
    pub to_name: String,
}

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the Rolodex API server.
    pub server_url: String,
    /// Email service settings, if configured.
    pub email: Option<EmailConfig>,
    /// Log level.
    pub log_level: String,
}

impl ConsoleConfig {
    /// Loads configuration from environment variables.
    pub fn load() -> Self {
        let email = match (
            env::var("ROLODEX_EMAILJS_SERVICE_ID").ok(),
            env::var("ROLODEX_EMAILJS_TEMPLATE_ID").ok(),
            env::var("ROLODEX_EMAILJS_PUBLIC_KEY").ok(),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailConfig {
                endpoint: env::var("ROLODEX_EMAILJS_ENDPOINT")
                    .unwrap_or_else(|_| DEFAULT_EMAILJS_ENDPOINT.to_string()),
                service_id,
                template_id,
                public_key,
                from_name: env::var("ROLODEX_EMAIL_FROM_NAME")
                    .unwrap_or_else(|_| "Rolodex".to_string()),
                to_name: env::var("ROLODEX_EMAIL_TO_NAME")
                    .unwrap_or_else(|_| "Team".to_string()),
            }),
            _ => None,
        };

        Self {
            server_url: env::var("ROLODEX_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            email,
            log_level: env::var("ROLODEX_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        }
    }
}
