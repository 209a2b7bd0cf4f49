//! CLI command definitions and dispatch.

pub mod access;
pub mod config;
pub mod suggest;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use tessera_core::config::AppConfig;
use tessera_core::error::AppError;
use tessera_store::{MemoryWorkspace, WorkspaceSnapshot};

/// Tessera: permission-aware suggestions and access checks
#[derive(Debug, Parser)]
#[command(name = "tessera", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest resources matching a text
    Suggest(suggest::SuggestArgs),
    /// Access evaluation and grant diffs
    Access(access::AccessArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Suggest(args) => suggest::execute(args, app_config, self.format).await,
            Commands::Access(args) => access::execute(args, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, app_config, self.format),
        }
    }
}

/// Helper: load a workspace snapshot file
pub fn load_workspace(path: &Path) -> Result<MemoryWorkspace, AppError> {
    let snapshot = WorkspaceSnapshot::read(path).map_err(|e| {
        AppError::new(
            e.kind,
            format!("Failed to load workspace '{}': {}", path.display(), e.message),
        )
    })?;
    tracing::debug!(
        collections = snapshot.collections.len(),
        views = snapshot.views.len(),
        link_types = snapshot.link_types.len(),
        "Workspace loaded"
    );
    Ok(MemoryWorkspace::from_snapshot(snapshot))
}
