use std::path::Path;

use crate::{
    infra::{self, config::AppConfig, error::AppError, store::DomainStore},
    usecases::context::AppContext,
};

const MISSING_CREDENTIAL: &str = "MISSING_CREDENTIAL";

/// Builds the application context, brings up logging, and enforces the
/// startup credential contract: without a bot token and an admin chat id
/// the process refuses to serve anything.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;
    require_credentials(&context.config)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;
    let store = DomainStore::new(config.store.path.clone());

    Ok(AppContext::new(config, store))
}

fn require_credentials(config: &AppConfig) -> Result<(), AppError> {
    if config.telegram.bot_token.trim().is_empty() {
        tracing::error!(
            code = MISSING_CREDENTIAL,
            "TELEGRAM_BOT_TOKEN is not set; refusing to start"
        );
        return Err(AppError::MissingBotToken);
    }

    if config.telegram.admin_chat_id == 0 {
        tracing::error!(
            code = MISSING_CREDENTIAL,
            "ADMIN_CHAT_ID is not set; refusing to start"
        );
        return Err(AppError::MissingAdminChatId);
    }

    Ok(())
}
