//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use tessera_core::config::AppConfig;
use tessera_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            validate(config)?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Suggestion limit", &config.suggestion.limit.to_string());
            output::print_kv(
                "Notifications",
                if config.notification.enabled {
                    "enabled"
                } else {
                    "disabled"
                },
            );
            output::print_kv("Recent limit", &config.notification.recent_limit.to_string());
            output::print_kv(
                "Logging",
                &format!("{} ({})", config.logging.level, config.logging.format),
            );
        }
    }

    Ok(())
}

/// Semantic checks the deserializer cannot express
fn validate(config: &AppConfig) -> Result<(), AppError> {
    if config.suggestion.limit == 0 {
        return Err(AppError::configuration("suggestion.limit must be at least 1"));
    }
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        return Err(AppError::configuration(format!(
            "logging.format must be 'json' or 'pretty', got '{}'",
            config.logging.format
        )));
    }
    Ok(())
}
