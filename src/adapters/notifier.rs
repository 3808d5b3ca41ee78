use crate::adapters::http::build_client;
use crate::domain::model::SmsMessage;
use crate::domain::ports::Notifier;
use crate::utils::error::{HealthError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Relays SMS text through an HTTP webhook that accepts `{ "to", "message" }`.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout, &HashMap::new())?,
            webhook_url: webhook_url.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send_sms(&self, message: &SmsMessage) -> Result<()> {
        tracing::debug!("Sending SMS notification to {}", message.to);
        let response = self.client.post(&self.webhook_url).json(message).send().await?;

        // the webhook's reply body is not part of the contract
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("SMS webhook rejected message: {} {}", status, detail);
            return Err(HealthError::BackendError {
                endpoint: self.webhook_url.clone(),
                status: status.as_u16(),
                detail,
            });
        }
        Ok(())
    }
}
