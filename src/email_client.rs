use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::WelcomeEmail;
use crate::email_template::RenderedMessage;

/// HTTP client for the transactional email provider.
///
/// Speaks the provider's `POST /emails` API: bearer token auth, a JSON body
/// with `from`, `to`, `subject`, `html` and `text`, and a JSON reply carrying
/// the id the provider assigned to the message.
#[derive(Debug)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: WelcomeEmail,
    api_key: SecretString,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("failed to talk to the email provider")]
    Transport(#[from] reqwest::Error),
    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl EmailClient {
    pub fn new(
        sender: WelcomeEmail,
        base_url: String,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
            sender,
            api_key,
        })
    }

    /// Sends `message` to `recipient` and returns the provider's message id.
    #[tracing::instrument(name = "Calling the email provider", skip(self, message))]
    pub async fn send_email(
        &self,
        recipient: &WelcomeEmail,
        message: &RenderedMessage,
    ) -> Result<String, EmailClientError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: [recipient.as_ref()],
            subject: &message.subject,
            html: &message.html_body,
            text: &message.text_body,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailClientError::Rejected { status, body });
        }

        let SendEmailResponse { id } = response.json().await?;
        tracing::info!(email_id = %id, "Email accepted by the provider");

        Ok(id)
    }
}
