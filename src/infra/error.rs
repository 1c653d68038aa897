use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("ADMIN_CHAT_ID must be a numeric chat identifier, got '{value}'")]
    AdminChatIdParse { value: String },
    #[error("telegram bot token is not configured")]
    MissingBotToken,
    #[error("authorized admin chat id is not configured")]
    MissingAdminChatId,
    #[error("failed to read domain store at {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("domain store at {path} is not a valid domain list: {source}")]
    StoreParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode domain store for {path}: {source}")]
    StoreEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write domain store at {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to replace domain store at {path}: {source}")]
    StoreReplace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
