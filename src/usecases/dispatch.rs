//! Chat command dispatcher.
//!
//! Maps inbound slash commands to store and report operations under a
//! single-operator authorization gate. Every admin command checks the
//! caller's chat id first; a mismatch produces the fixed denial reply and
//! nothing else, no state change and no outbound call.

use crate::{
    infra::store::DomainStore,
    usecases::{
        contracts::{ReportDelivery, ReportStrategy, ReportTriggerError},
        manage_domains::{
            add_domain, delete_domain, list_domains, AddDomainOutcome, DeleteDomainOutcome,
        },
    },
};

pub const DENIAL_REPLY: &str = "Sorry, you are not authorized to use this command.";
pub const START_REPLY: &str = "Hello! I am the domain watch bot.\n\
    /checknow - run a block-status report\n\
    /add_domain <domain> - watch a domain\n\
    /delete_domain <domain> - stop watching a domain\n\
    /list_domains - show watched domains";
const UNKNOWN_REPLY: &str = "Unknown command. Send /start to see what I can do.";
const ADD_USAGE_REPLY: &str = "Usage: /add_domain <domain>";
const DELETE_USAGE_REPLY: &str = "Usage: /delete_domain <domain>";
const EMPTY_LIST_REPLY: &str = "No domains configured yet. Use /add_domain to add some.";
const STORE_FAILURE_REPLY: &str = "Error: the domain list is unavailable right now.";
const WEBHOOK_MISSING_REPLY: &str = "Error: The report webhook URL is not configured on my end.";
const TRIGGER_FAILURE_REPLY: &str = "Error: There was a problem triggering the report job.";

const UNAUTHORIZED_COMMAND: &str = "UNAUTHORIZED_COMMAND";
const STORE_COMMAND_FAILED: &str = "STORE_COMMAND_FAILED";
const REPORT_TRIGGER_FAILED: &str = "REPORT_TRIGGER_FAILED";

/// One inbound chat message: the sender's chat id and the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Start,
    CheckNow,
    AddDomain { argument: Option<String> },
    DeleteDomain { argument: Option<String> },
    ListDomains,
    Unknown,
}

/// Splits a message into a command and its first argument. Returns `None`
/// for plain text; the bot only ever reacts to slash commands.
fn parse_command(text: &str) -> Option<Command> {
    let mut parts = text.split_whitespace();
    let head = parts.next()?;
    let name = head.strip_prefix('/')?;
    // In group chats commands arrive as /command@botname.
    let name = name.split('@').next().unwrap_or_default();
    let argument = parts.next().map(ToOwned::to_owned);

    Some(match name {
        "start" => Command::Start,
        "checknow" => Command::CheckNow,
        "add_domain" => Command::AddDomain { argument },
        "delete_domain" => Command::DeleteDomain { argument },
        "list_domains" => Command::ListDomains,
        _ => Command::Unknown,
    })
}

pub struct Dispatcher<'a> {
    admin_chat_id: i64,
    store: &'a DomainStore,
    report: &'a dyn ReportStrategy,
}

impl<'a> Dispatcher<'a> {
    pub fn new(admin_chat_id: i64, store: &'a DomainStore, report: &'a dyn ReportStrategy) -> Self {
        Self {
            admin_chat_id,
            store,
            report,
        }
    }

    /// Handles one inbound message. `None` means the message was not a
    /// command and deserves no reply at all.
    pub async fn dispatch(&self, message: &IncomingMessage) -> Option<String> {
        let command = parse_command(&message.text)?;
        tracing::info!(chat_id = message.chat_id, command = ?command, "command received");

        let reply = match command {
            Command::Start => START_REPLY.to_owned(),
            Command::Unknown => UNKNOWN_REPLY.to_owned(),
            admin_command => {
                if message.chat_id != self.admin_chat_id {
                    tracing::warn!(
                        code = UNAUTHORIZED_COMMAND,
                        chat_id = message.chat_id,
                        "unauthorized caller denied"
                    );
                    DENIAL_REPLY.to_owned()
                } else {
                    match admin_command {
                        Command::CheckNow => self.handle_check_now().await,
                        Command::AddDomain { argument } => self.handle_add(argument.as_deref()),
                        Command::DeleteDomain { argument } => {
                            self.handle_delete(argument.as_deref())
                        }
                        Command::ListDomains => self.handle_list(),
                        Command::Start | Command::Unknown => unreachable!("handled above"),
                    }
                }
            }
        };

        Some(reply)
    }

    async fn handle_check_now(&self) -> String {
        match self.report.trigger().await {
            Ok(ReportDelivery::Text(text)) => text,
            Ok(ReportDelivery::Dispatched { acknowledgement }) => acknowledgement,
            Err(ReportTriggerError::NotConfigured) => {
                tracing::error!(
                    code = REPORT_TRIGGER_FAILED,
                    "webhook strategy selected but no webhook URL is configured"
                );
                WEBHOOK_MISSING_REPLY.to_owned()
            }
            Err(ReportTriggerError::Failed { details }) => {
                tracing::error!(code = REPORT_TRIGGER_FAILED, details = %details, "report trigger failed");
                TRIGGER_FAILURE_REPLY.to_owned()
            }
            Err(ReportTriggerError::Store { details }) => {
                tracing::error!(
                    code = STORE_COMMAND_FAILED,
                    details = %details,
                    "report build could not read the store"
                );
                STORE_FAILURE_REPLY.to_owned()
            }
        }
    }

    fn handle_add(&self, argument: Option<&str>) -> String {
        let Some(candidate) = argument else {
            return ADD_USAGE_REPLY.to_owned();
        };

        match add_domain(self.store, candidate) {
            Ok(AddDomainOutcome::Added(domain)) => {
                format!("Domain '{domain}' added successfully.")
            }
            Ok(AddDomainOutcome::AlreadyExists(domain)) => {
                format!("Domain '{domain}' already exists.")
            }
            Ok(AddDomainOutcome::Rejected { candidate, reason }) => {
                tracing::info!(%candidate, %reason, "rejected malformed domain");
                format!("'{candidate}' is not a valid domain name.")
            }
            Err(error) => self.store_failure_reply("add", &error),
        }
    }

    fn handle_delete(&self, argument: Option<&str>) -> String {
        let Some(candidate) = argument else {
            return DELETE_USAGE_REPLY.to_owned();
        };

        match delete_domain(self.store, candidate) {
            Ok(DeleteDomainOutcome::Deleted(domain)) => {
                format!("Domain '{domain}' deleted successfully.")
            }
            Ok(DeleteDomainOutcome::NotFound { name }) => {
                format!("Domain '{name}' not found.")
            }
            Err(error) => self.store_failure_reply("delete", &error),
        }
    }

    fn handle_list(&self) -> String {
        match list_domains(self.store) {
            Ok(domains) if domains.is_empty() => EMPTY_LIST_REPLY.to_owned(),
            Ok(domains) => {
                let mut reply = "Current domains:".to_owned();
                for domain in domains {
                    reply.push_str("\n- ");
                    reply.push_str(domain.as_str());
                }
                reply
            }
            Err(error) => self.store_failure_reply("list", &error),
        }
    }

    fn store_failure_reply(&self, operation: &str, error: &crate::infra::error::AppError) -> String {
        tracing::error!(
            code = STORE_COMMAND_FAILED,
            operation,
            error = %error,
            "store operation failed"
        );
        STORE_FAILURE_REPLY.to_owned()
    }
}
