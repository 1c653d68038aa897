//! Outbound trigger for the decoupled report job.

use async_trait::async_trait;

use crate::usecases::contracts::{ReportDelivery, ReportStrategy, ReportTriggerError};

const TRIGGER_ACK: &str = "On it! Triggering the report job now...";

/// Report strategy that wakes the out-of-process report job by POSTing to
/// its webhook URL. The job itself delivers the report to the chat.
#[derive(Debug, Clone)]
pub struct WebhookTrigger {
    http: reqwest::Client,
    url: Option<String>,
}

impl WebhookTrigger {
    pub fn new(url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ReportStrategy for WebhookTrigger {
    async fn trigger(&self) -> Result<ReportDelivery, ReportTriggerError> {
        let Some(url) = self.url.as_deref() else {
            return Err(ReportTriggerError::NotConfigured);
        };

        let response =
            self.http
                .post(url)
                .send()
                .await
                .map_err(|source| ReportTriggerError::Failed {
                    details: source.to_string(),
                })?;

        if response.status().is_success() {
            Ok(ReportDelivery::Dispatched {
                acknowledgement: TRIGGER_ACK.to_owned(),
            })
        } else {
            Err(ReportTriggerError::Failed {
                details: format!("webhook returned HTTP {}", response.status()),
            })
        }
    }
}
