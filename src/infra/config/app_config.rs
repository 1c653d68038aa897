use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub telegram: TelegramConfig,
    pub store: StoreConfig,
    pub blockcheck: BlockCheckConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub admin_chat_id: i64,
    pub api_base: String,
    pub poll_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            admin_chat_id: 0,
            api_base: "https://api.telegram.org".to_owned(),
            poll_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("domains.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockCheckConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for BlockCheckConfig {
    fn default() -> Self {
        Self {
            api_url: "https://check.skiddle.id/".to_owned(),
            timeout_secs: 10,
        }
    }
}

/// How `/checknow` produces its report: built in-process, or delegated to
/// the decoupled report job through a webhook.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStrategyKind {
    #[default]
    InProcess,
    Webhook,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportConfig {
    pub strategy: ReportStrategyKind,
    pub webhook_url: Option<String>,
    /// Comma-separated domain override for the store-less scheduled-job
    /// deployment. When set, the report job never touches the store file.
    pub domains: Option<String>,
}
