use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment keys recognized by the overlay. Deployment secrets stay in
/// the environment; the config file carries everything else.
const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
const ENV_ADMIN_CHAT_ID: &str = "ADMIN_CHAT_ID";
const ENV_WEBHOOK_URL: &str = "WEBHOOK_URL";
const ENV_BLOCKCHECK_API_URL: &str = "BLOCKCHECK_API_URL";
const ENV_DOMAINS_FILE: &str = "DOMAINS_FILE";
const ENV_DOMAINS_OVERRIDE: &str = "BLOCKWATCH_DOMAINS";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if config_path.exists() {
        let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;

        let file_config: FileConfig =
            toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
                path: config_path,
                source,
            })?;

        file_config.merge_into(&mut config);
    }

    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut AppConfig) -> Result<(), AppError> {
    if let Some(token) = env_value(ENV_BOT_TOKEN) {
        config.telegram.bot_token = token;
    }

    if let Some(chat_id) = env_value(ENV_ADMIN_CHAT_ID) {
        config.telegram.admin_chat_id = chat_id
            .parse()
            .map_err(|_| AppError::AdminChatIdParse { value: chat_id })?;
    }

    if let Some(url) = env_value(ENV_WEBHOOK_URL) {
        config.report.webhook_url = Some(url);
    }

    if let Some(url) = env_value(ENV_BLOCKCHECK_API_URL) {
        config.blockcheck.api_url = url;
    }

    if let Some(path) = env_value(ENV_DOMAINS_FILE) {
        config.store.path = PathBuf::from(path);
    }

    if let Some(domains) = env_value(ENV_DOMAINS_OVERRIDE) {
        config.report.domains = Some(domains);
    }

    Ok(())
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
