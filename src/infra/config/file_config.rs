use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{
    AppConfig, BlockCheckConfig, LogConfig, ReportConfig, ReportStrategyKind, StoreConfig,
    TelegramConfig,
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub telegram: Option<FileTelegramConfig>,
    pub store: Option<FileStoreConfig>,
    pub blockcheck: Option<FileBlockCheckConfig>,
    pub report: Option<FileReportConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(telegram) = self.telegram {
            telegram.merge_into(&mut config.telegram);
        }

        if let Some(store) = self.store {
            store.merge_into(&mut config.store);
        }

        if let Some(blockcheck) = self.blockcheck {
            blockcheck.merge_into(&mut config.blockcheck);
        }

        if let Some(report) = self.report {
            report.merge_into(&mut config.report);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTelegramConfig {
    pub bot_token: Option<String>,
    pub admin_chat_id: Option<i64>,
    pub api_base: Option<String>,
    pub poll_timeout_secs: Option<u64>,
}

impl FileTelegramConfig {
    fn merge_into(self, config: &mut TelegramConfig) {
        if let Some(bot_token) = self.bot_token {
            config.bot_token = bot_token;
        }

        if let Some(admin_chat_id) = self.admin_chat_id {
            config.admin_chat_id = admin_chat_id;
        }

        if let Some(api_base) = self.api_base {
            config.api_base = api_base;
        }

        if let Some(poll_timeout_secs) = self.poll_timeout_secs {
            config.poll_timeout_secs = poll_timeout_secs;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStoreConfig {
    pub path: Option<PathBuf>,
}

impl FileStoreConfig {
    fn merge_into(self, config: &mut StoreConfig) {
        if let Some(path) = self.path {
            config.path = path;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileBlockCheckConfig {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileBlockCheckConfig {
    fn merge_into(self, config: &mut BlockCheckConfig) {
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }

        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileReportConfig {
    pub strategy: Option<ReportStrategyKind>,
    pub webhook_url: Option<String>,
    pub domains: Option<String>,
}

impl FileReportConfig {
    fn merge_into(self, config: &mut ReportConfig) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }

        if let Some(webhook_url) = self.webhook_url {
            config.webhook_url = Some(webhook_url);
        }

        if let Some(domains) = self.domains {
            config.domains = Some(domains);
        }
    }
}
