//! The scheduled one-shot report job (cron entry point).

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    domain::domain_name::DomainName,
    infra::{error::AppError, store::DomainStore},
    usecases::{
        build_report::build_report,
        contracts::{BlockStatusSource, MessageSink},
    },
};

#[derive(Debug, Error)]
pub enum ReportJobError {
    #[error("failed to load the domain collection: {0}")]
    Store(#[from] AppError),
    #[error("failed to deliver the report: {details}")]
    Delivery { details: String },
}

/// Runs one full report cycle: resolve the domain collection, check every
/// domain, deliver the rendered report to the admin chat.
///
/// When `domains_override` is set (the store-less deployment), the store
/// file is never touched; malformed entries in the override list are
/// skipped with a warning rather than failing the whole run.
pub async fn run(
    store: &DomainStore,
    domains_override: Option<&str>,
    admin_chat_id: i64,
    source: &dyn BlockStatusSource,
    sink: &dyn MessageSink,
) -> Result<(), ReportJobError> {
    let domains = match domains_override {
        Some(list) => parse_override(list),
        None => store.load()?,
    };

    let report = build_report(&domains, source).await;
    tracing::info!(domains = report.lines().len(), "report built, delivering");

    sink.send(admin_chat_id, &report.render())
        .await
        .map_err(|error| ReportJobError::Delivery {
            details: error.to_string(),
        })?;

    tracing::info!("report delivered");
    Ok(())
}

fn parse_override(list: &str) -> BTreeSet<DomainName> {
    list.split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .filter_map(|candidate| match DomainName::parse(candidate) {
            Ok(domain) => Some(domain),
            Err(reason) => {
                tracing::warn!(candidate, %reason, "skipping malformed domain in override list");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::{
        domain::check::{CheckOutcome, CheckStatus},
        usecases::contracts::MessageSinkError,
    };

    struct StubSource;

    #[async_trait]
    impl BlockStatusSource for StubSource {
        async fn check(&self, _domain: &DomainName) -> CheckOutcome {
            CheckOutcome::clean(CheckStatus::NotBlocked)
        }
    }

    struct StubSink {
        result: Result<(), MessageSinkError>,
        sent: Mutex<Option<(i64, String)>>,
    }

    impl StubSink {
        fn with_result(result: Result<(), MessageSinkError>) -> Self {
            Self {
                result,
                sent: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl MessageSink for StubSink {
        async fn send(&self, chat_id: i64, text: &str) -> Result<(), MessageSinkError> {
            *self.sent.lock().expect("sent lock") = Some((chat_id, text.to_owned()));
            self.result.clone()
        }
    }

    fn temp_store(dir: &tempfile::TempDir) -> DomainStore {
        DomainStore::new(dir.path().join("domains.json"))
    }

    #[tokio::test]
    async fn delivers_report_for_stored_domains_to_admin_chat() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = temp_store(&dir);
        store
            .add(&DomainName::parse("example.com").expect("must parse"))
            .expect("seed add");
        let sink = StubSink::with_result(Ok(()));

        run(&store, None, 42, &StubSource, &sink)
            .await
            .expect("job must succeed");

        let sent = sink.sent.lock().expect("sent lock").clone();
        let (chat_id, text) = sent.expect("a message must be sent");
        assert_eq!(chat_id, 42);
        assert!(text.contains("example.com: 🟢 Not Blocked"));
    }

    #[tokio::test]
    async fn empty_store_still_delivers_the_explanatory_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = temp_store(&dir);
        let sink = StubSink::with_result(Ok(()));

        run(&store, None, 42, &StubSource, &sink)
            .await
            .expect("job must succeed");

        let sent = sink.sent.lock().expect("sent lock").clone();
        let (_, text) = sent.expect("a message must be sent");
        assert!(text.contains("No domains configured."));
    }

    #[tokio::test]
    async fn override_list_bypasses_the_store_and_skips_malformed_entries() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = temp_store(&dir);
        let sink = StubSink::with_result(Ok(()));

        run(
            &store,
            Some("b.example.com, not a domain ,a.example.com,"),
            42,
            &StubSource,
            &sink,
        )
        .await
        .expect("job must succeed");

        let sent = sink.sent.lock().expect("sent lock").clone();
        let (_, text) = sent.expect("a message must be sent");
        assert!(text.contains("a.example.com"));
        assert!(text.contains("b.example.com"));
        assert!(!text.contains("not a domain"));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn corrupted_store_aborts_the_job() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = temp_store(&dir);
        std::fs::write(store.path(), "corrupted").expect("write fixture");
        let sink = StubSink::with_result(Ok(()));

        let result = run(&store, None, 42, &StubSource, &sink).await;

        assert!(matches!(result, Err(ReportJobError::Store(_))));
        assert!(sink.sent.lock().expect("sent lock").is_none());
    }

    #[tokio::test]
    async fn delivery_failure_is_surfaced() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = temp_store(&dir);
        let sink = StubSink::with_result(Err(MessageSinkError::Transport {
            details: "connection refused".to_owned(),
        }));

        let result = run(&store, None, 42, &StubSource, &sink).await;

        assert!(matches!(result, Err(ReportJobError::Delivery { .. })));
    }
}
