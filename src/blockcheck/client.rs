//! Client for the remote "is this domain blocked" API.
//!
//! One GET per domain, one attempt, bounded timeout. Every failure mode
//! collapses into a `CheckOutcome` so the caller can keep walking the
//! rest of the collection.

use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{
        check::{CheckOutcome, CheckStatus},
        domain_name::DomainName,
    },
    infra::config::BlockCheckConfig,
    usecases::contracts::BlockStatusSource,
};

#[derive(Debug, Clone)]
pub struct BlockCheckClient {
    http: reqwest::Client,
    api_url: String,
}

enum FetchFailure {
    /// Network error or non-2xx status; the detail lands in the report.
    Transport(String),
    /// 2xx answer whose body is not JSON at all.
    MalformedBody,
}

impl BlockCheckClient {
    pub fn from_config(config: &BlockCheckConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    async fn fetch(&self, domain: &DomainName) -> Result<serde_json::Value, FetchFailure> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("domain", domain.as_str()), ("json", "true")])
            .send()
            .await
            .map_err(|source| FetchFailure::Transport(source.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|source| FetchFailure::Transport(source.to_string()))?;

        response
            .json()
            .await
            .map_err(|_| FetchFailure::MalformedBody)
    }
}

/// Extracts the per-domain `blocked` flag from a response body shaped as
/// `{"<domain>": {"blocked": <bool>, ...}, ...}`.
fn classify(domain: &DomainName, body: &serde_json::Value) -> CheckOutcome {
    match body
        .get(domain.as_str())
        .and_then(|entry| entry.get("blocked"))
        .and_then(serde_json::Value::as_bool)
    {
        Some(true) => CheckOutcome::clean(CheckStatus::Blocked),
        Some(false) => CheckOutcome::clean(CheckStatus::NotBlocked),
        None => CheckOutcome::clean(CheckStatus::InvalidResponse),
    }
}

#[async_trait]
impl BlockStatusSource for BlockCheckClient {
    async fn check(&self, domain: &DomainName) -> CheckOutcome {
        match self.fetch(domain).await {
            Ok(body) => classify(domain, &body),
            Err(FetchFailure::MalformedBody) => {
                CheckOutcome::clean(CheckStatus::InvalidResponse)
            }
            Err(FetchFailure::Transport(details)) => {
                CheckOutcome::with_detail(CheckStatus::RequestFailed, details)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn domain(name: &str) -> DomainName {
        DomainName::parse(name).expect("test domain must parse")
    }

    #[test]
    fn classifies_blocked_domain() {
        let body = json!({"example.com": {"blocked": true}});

        let outcome = classify(&domain("example.com"), &body);

        assert_eq!(outcome, CheckOutcome::clean(CheckStatus::Blocked));
    }

    #[test]
    fn classifies_unblocked_domain() {
        let body = json!({"example.com": {"blocked": false}});

        let outcome = classify(&domain("example.com"), &body);

        assert_eq!(outcome, CheckOutcome::clean(CheckStatus::NotBlocked));
    }

    #[test]
    fn missing_domain_entry_is_an_invalid_response() {
        let body = json!({"other.com": {"blocked": true}});

        let outcome = classify(&domain("example.com"), &body);

        assert_eq!(outcome.status, CheckStatus::InvalidResponse);
    }

    #[test]
    fn non_boolean_blocked_field_is_an_invalid_response() {
        let body = json!({"example.com": {"blocked": "yes"}});

        let outcome = classify(&domain("example.com"), &body);

        assert_eq!(outcome.status, CheckStatus::InvalidResponse);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_failure_with_detail() {
        let client = BlockCheckClient::from_config(&BlockCheckConfig {
            api_url: "http://127.0.0.1:1/".to_owned(),
            timeout_secs: 2,
        })
        .expect("client must build");

        let outcome = client.check(&domain("example.com")).await;

        assert_eq!(outcome.status, CheckStatus::RequestFailed);
        assert!(outcome.detail.is_some());
    }
}
