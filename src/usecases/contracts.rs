use async_trait::async_trait;

use crate::domain::{check::CheckOutcome, domain_name::DomainName};

/// Source of block-status verdicts, one remote lookup per domain.
///
/// Infallible by contract: transport and parse failures are folded into
/// the returned outcome so one bad domain never aborts a report run.
#[async_trait]
pub trait BlockStatusSource: Send + Sync {
    async fn check(&self, domain: &DomainName) -> CheckOutcome;
}

/// Sink for outbound chat messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), MessageSinkError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSinkError {
    /// The transport could not complete the call.
    Transport { details: String },
    /// The messaging API answered but refused the call.
    Rejected { description: String },
}

impl std::fmt::Display for MessageSinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { details } => write!(f, "transport failure: {details}"),
            Self::Rejected { description } => write!(f, "rejected by the API: {description}"),
        }
    }
}

impl std::error::Error for MessageSinkError {}

/// Pluggable `/checknow` strategy: build the report in-process, or wake
/// the decoupled report job over a webhook.
#[async_trait]
pub trait ReportStrategy: Send + Sync {
    async fn trigger(&self) -> Result<ReportDelivery, ReportTriggerError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDelivery {
    /// The report was built in-process; the text goes straight back to
    /// the caller.
    Text(String),
    /// An external job was triggered and will deliver the report itself.
    Dispatched { acknowledgement: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTriggerError {
    /// The webhook deployment shape is selected but no URL is configured.
    NotConfigured,
    /// The trigger call itself failed.
    Failed { details: String },
    /// The in-process build could not read the domain store.
    Store { details: String },
}
