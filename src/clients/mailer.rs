use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    models::mailer::{SendEmailRequest, SendEmailResponse},
};

/// Long-lived mail-API client. Constructed once at startup and shared for
/// the lifetime of the process.
pub struct MailerClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    sender_address: String,
}

impl MailerClient {
    pub fn new(config: &Config) -> Self {
        info!(sender = %config.sender_address, "Mail API client initialized");

        Self {
            http_client: Client::new(),
            base_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            sender_address: config.sender_address.clone(),
        }
    }

    /// Sends a single plain-text email. Returns the provider-assigned
    /// message id on success.
    pub async fn send_email(
        &self,
        to_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, Error> {
        debug!(to_address, subject, "Sending email via mail API");

        let request = SendEmailRequest {
            from: self.sender_address.clone(),
            to: vec![to_address.to_string()],
            subject: subject.to_string(),
            text: body.to_string(),
        };

        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let accepted: SendEmailResponse = response.json().await?;
            Ok(accepted.message_id)
        } else {
            let status = response.status();
            let error_text = response.text().await?;
            Err(anyhow!(
                "Mail API request failed with status {}: {}",
                status,
                error_text
            ))
        }
    }
}
