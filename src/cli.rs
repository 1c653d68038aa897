use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blockwatch", about = "Domain block watcher (Telegram bot + report job)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive command bot
    Bot,
    /// Run one report cycle and exit (cron target)
    Report,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Bot)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_bot_when_command_is_missing() {
        let cli = Cli::parse_from(["blockwatch"]);

        assert!(matches!(cli.command_or_default(), Command::Bot));
    }

    #[test]
    fn parses_report_command_with_config_override() {
        let cli = Cli::parse_from(["blockwatch", "report", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Report));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }
}
