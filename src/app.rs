use std::{path::Path, sync::Arc};

use anyhow::Result;

use crate::{
    blockcheck::{self, BlockCheckClient},
    cli::{Cli, Command},
    domain,
    infra::{self, config::ReportStrategyKind, webhook::WebhookTrigger},
    telegram::{self, api::BotApiClient, poller::UpdatePoller},
    usecases::{
        self, bootstrap, build_report::InProcessReport, context::AppContext,
        contracts::ReportStrategy, dispatch::Dispatcher, report_job,
    },
};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Bot => run_bot(cli.config.as_deref()).await,
        Command::Report => run_report_job(cli.config.as_deref()).await,
    }
}

async fn run_bot(config_path: Option<&Path>) -> Result<()> {
    let context = bootstrap::bootstrap(config_path)?;
    log_module_boundaries();

    let client = BotApiClient::from_config(&context.config.telegram)?;
    let strategy = build_report_strategy(&context)?;
    let dispatcher = Dispatcher::new(
        context.config.telegram.admin_chat_id,
        &context.store,
        strategy.as_ref(),
    );
    let poller = UpdatePoller::new(client, context.config.telegram.poll_timeout_secs);

    tokio::select! {
        _ = poller.run(&dispatcher) => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received, stopping bot");
        }
    }

    Ok(())
}

async fn run_report_job(config_path: Option<&Path>) -> Result<()> {
    let context = bootstrap::bootstrap(config_path)?;
    log_module_boundaries();

    let client = BotApiClient::from_config(&context.config.telegram)?;
    let checker = BlockCheckClient::from_config(&context.config.blockcheck)?;

    report_job::run(
        &context.store,
        context.config.report.domains.as_deref(),
        context.config.telegram.admin_chat_id,
        &checker,
        &client,
    )
    .await?;

    Ok(())
}

fn build_report_strategy(context: &AppContext) -> Result<Box<dyn ReportStrategy>> {
    Ok(match context.config.report.strategy {
        ReportStrategyKind::InProcess => {
            let checker = BlockCheckClient::from_config(&context.config.blockcheck)?;
            Box::new(InProcessReport::new(
                context.store.clone(),
                Arc::new(checker),
            ))
        }
        ReportStrategyKind::Webhook => Box::new(WebhookTrigger::new(
            context.config.report.webhook_url.clone(),
        )),
    })
}

fn log_module_boundaries() {
    tracing::debug!(
        domain = domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        telegram = telegram::module_name(),
        blockcheck = blockcheck::module_name(),
        "module boundaries loaded"
    );
}
