//! Minimal Telegram Bot API client: long-poll updates in, messages out.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::{
    infra::{config::TelegramConfig, secrets},
    usecases::contracts::{MessageSink, MessageSinkError},
};

/// Extra headroom over the long-poll window so the server side, not the
/// client timeout, ends an idle poll.
const POLL_TIMEOUT_MARGIN_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum BotApiError {
    #[error("telegram transport failure: {details}")]
    Transport { details: String },
    #[error("telegram API rejected the call: {description}")]
    Api { description: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Every Bot API response wraps its payload in this envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_result(self) -> Result<T, BotApiError>
    where
        T: Default,
    {
        if self.ok {
            Ok(self.result.unwrap_or_default())
        } else {
            Err(BotApiError::Api {
                description: self
                    .description
                    .unwrap_or_else(|| "no description given".to_owned()),
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct BotApiClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl BotApiClient {
    pub fn from_config(config: &TelegramConfig) -> Result<Self, BotApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(
                config.poll_timeout_secs + POLL_TIMEOUT_MARGIN_SECS,
            ))
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            token: config.bot_token.clone(),
        })
    }

    /// Long-polls for updates past `offset`. An empty batch after the
    /// poll window elapses is the normal idle case, not an error.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, BotApiError> {
        let response = self
            .http
            .get(self.method_url("getUpdates"))
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", timeout_secs.to_string()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: ApiEnvelope<Vec<Update>> =
            response.json().await.map_err(transport_error)?;
        envelope.into_result()
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotApiError> {
        let payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: ApiEnvelope<serde_json::Value> =
            response.json().await.map_err(transport_error)?;
        envelope.into_result().map(|_| ())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }
}

/// reqwest errors carry the full request URL, token segment included, so
/// they are scrubbed before becoming part of any error value.
fn transport_error(source: reqwest::Error) -> BotApiError {
    BotApiError::Transport {
        details: secrets::redact_bot_path(&source.to_string()),
    }
}

#[async_trait]
impl MessageSink for BotApiClient {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), MessageSinkError> {
        self.send_message(chat_id, text)
            .await
            .map_err(|error| match error {
                BotApiError::Transport { details } => MessageSinkError::Transport { details },
                BotApiError::Api { description } => MessageSinkError::Rejected { description },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> TelegramConfig {
        TelegramConfig {
            bot_token: "123456:testtoken".to_owned(),
            admin_chat_id: 42,
            api_base: "https://api.telegram.org/".to_owned(),
            poll_timeout_secs: 30,
        }
    }

    #[test]
    fn method_url_joins_base_token_and_method() {
        let client = BotApiClient::from_config(&sample_config()).expect("client must build");

        assert_eq!(
            client.method_url("getUpdates"),
            "https://api.telegram.org/bot123456:testtoken/getUpdates"
        );
    }

    #[test]
    fn update_envelope_parses_a_getupdates_payload() {
        let raw = r#"{
            "ok": true,
            "result": [
                {
                    "update_id": 7,
                    "message": {
                        "message_id": 1,
                        "chat": {"id": 42, "type": "private"},
                        "text": "/checknow"
                    }
                },
                {"update_id": 8}
            ]
        }"#;

        let envelope: ApiEnvelope<Vec<Update>> =
            serde_json::from_str(raw).expect("envelope must parse");
        let updates = envelope.into_result().expect("envelope must be ok");

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].update_id, 7);
        let message = updates[0].message.as_ref().expect("first update message");
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/checknow"));
        assert!(updates[1].message.is_none());
    }

    #[test]
    fn error_envelope_surfaces_the_api_description() {
        let raw = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;

        let envelope: ApiEnvelope<Vec<Update>> =
            serde_json::from_str(raw).expect("envelope must parse");
        let error = envelope.into_result().expect_err("envelope must fail");

        assert!(matches!(
            error,
            BotApiError::Api { description } if description == "Unauthorized"
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_a_redacted_transport_error() {
        let config = TelegramConfig {
            api_base: "http://127.0.0.1:1".to_owned(),
            ..sample_config()
        };
        let client = BotApiClient::from_config(&config).expect("client must build");

        let error = client
            .send_message(42, "hello")
            .await
            .expect_err("send must fail");

        let BotApiError::Transport { details } = error else {
            panic!("expected transport error, got {error:?}");
        };
        assert!(!details.contains("testtoken"), "got: {details}");
    }
}
