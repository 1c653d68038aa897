//! Report assembly: one sequential block-status check per stored domain.

use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;

use crate::{
    domain::{
        domain_name::DomainName,
        report::{Report, ReportLine},
    },
    infra::store::DomainStore,
    usecases::contracts::{
        BlockStatusSource, ReportDelivery, ReportStrategy, ReportTriggerError,
    },
};

/// Checks every domain in the collection, strictly sequentially and in
/// the collection's lexicographic order. A slow or failing lookup for one
/// domain delays, but never aborts, the rest: failures arrive as report
/// lines, not errors.
pub async fn build_report(
    domains: &BTreeSet<DomainName>,
    source: &dyn BlockStatusSource,
) -> Report {
    let mut lines = Vec::with_capacity(domains.len());

    for domain in domains {
        let outcome = source.check(domain).await;
        tracing::debug!(
            domain = %domain,
            status = outcome.status.as_label(),
            "domain checked"
        );
        lines.push(ReportLine {
            domain: domain.clone(),
            outcome,
        });
    }

    Report::new(lines)
}

/// Report strategy that runs the whole sequence in-process and hands the
/// rendered text straight back to the caller.
pub struct InProcessReport {
    store: DomainStore,
    source: Arc<dyn BlockStatusSource>,
}

impl InProcessReport {
    pub fn new(store: DomainStore, source: Arc<dyn BlockStatusSource>) -> Self {
        Self { store, source }
    }
}

#[async_trait]
impl ReportStrategy for InProcessReport {
    async fn trigger(&self) -> Result<ReportDelivery, ReportTriggerError> {
        let domains = self
            .store
            .load()
            .map_err(|source| ReportTriggerError::Store {
                details: source.to_string(),
            })?;

        let report = build_report(&domains, self.source.as_ref()).await;
        Ok(ReportDelivery::Text(report.render()))
    }
}
