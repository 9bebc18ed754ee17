//! Transactional-email delivery for the contact form.
//!
//! The form does not talk to a first-party backend; it hands a
//! [`ContactMessage`] to a [`DeliveryHandle`]. Two handles exist: the real
//! EmailJS-compatible HTTP adapter and a simulated one with a fixed delay,
//! so the UI reacts to one pending/success/failure shape either way.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use shared::domain::ContactMessage;
use shared::error::{DeliveryFailure, DeliveryFailureKind, DeliveryReceipt};
use thiserror::Error;
use url::Url;

/// Public EmailJS REST endpoint; overridable for self-hosted gateways and
/// tests.
pub const EMAILJS_API_BASE: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

/// How long the simulated backend pretends the send takes.
pub const SIMULATED_SEND_DELAY: Duration = Duration::from_millis(2000);

/// Fixed copy surfaced on a successful delivery.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
/// Fixed copy surfaced when the delivery call rejects.
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid delivery endpoint '{base}': {source}")]
    Endpoint {
        base: String,
        source: url::ParseError,
    },
}

impl DeliveryError {
    /// Channel-safe form for the UI side.
    pub fn failure(&self) -> DeliveryFailure {
        let kind = match self {
            Self::Rejected { .. } => DeliveryFailureKind::Rejected,
            Self::Transport(_) => DeliveryFailureKind::Transport,
            Self::Endpoint { .. } => DeliveryFailureKind::Config,
        };
        DeliveryFailure::new(kind, self.to_string())
    }
}

/// Service credentials and addressing for the EmailJS-compatible API.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_base: String,
}

/// Variables the delivery template consumes.
///
/// The template is expected to reference exactly these, e.g.
/// `New contact from {{firstName}} {{lastName}}` in the subject and
/// `{{email}}` / `{{subject}}` / `{{message}}` in the body.
#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> TemplateParams<'a> {
    pub fn from_message(message: &'a ContactMessage) -> Self {
        Self {
            first_name: &message.first_name,
            last_name: &message.last_name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[async_trait]
pub trait DeliveryHandle: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryReceipt, DeliveryError>;
}

/// The real adapter: one POST per submission, no retries.
pub struct EmailJsMailer {
    http: Client,
    endpoint: Url,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsMailer {
    pub fn new(config: MailerConfig) -> Result<Self, DeliveryError> {
        let base = Url::parse(&config.api_base).map_err(|source| DeliveryError::Endpoint {
            base: config.api_base.clone(),
            source,
        })?;
        let endpoint = base.join(SEND_PATH).map_err(|source| DeliveryError::Endpoint {
            base: config.api_base.clone(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            endpoint,
            service_id: config.service_id,
            template_id: config.template_id,
            public_key: config.public_key,
        })
    }
}

#[async_trait]
impl DeliveryHandle for EmailJsMailer {
    async fn send(&self, message: &ContactMessage) -> Result<DeliveryReceipt, DeliveryError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams::from_message(message),
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }
        tracing::info!(status = status.as_u16(), %text, "delivery accepted");
        Ok(DeliveryReceipt {
            status: status.as_u16(),
            text,
            completed_at: Utc::now(),
        })
    }
}

/// Stand-in backend used when no service credentials are configured. Takes
/// the fixed delay, never contacts anything, always succeeds.
pub struct SimulatedMailer {
    delay: Duration,
}

impl SimulatedMailer {
    pub fn new() -> Self {
        Self {
            delay: SIMULATED_SEND_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryHandle for SimulatedMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<DeliveryReceipt, DeliveryError> {
        tokio::time::sleep(self.delay).await;
        Ok(DeliveryReceipt {
            status: 200,
            text: "OK".to_string(),
            completed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests;
