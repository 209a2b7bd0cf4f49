//! Access evaluation CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use tessera_auth::acl::{self, AccessDecision};
use tessera_core::error::AppError;
use tessera_entity::permission::PermissionSet;
use tessera_entity::resource::ResourceType;
use tessera_service::RequestContext;

/// Arguments for access commands
#[derive(Debug, Args)]
pub struct AccessArgs {
    /// Access subcommand
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access subcommands
#[derive(Debug, Subcommand)]
pub enum AccessCommand {
    /// Check what a user may do with a resource
    Check {
        /// Workspace snapshot (JSON)
        #[arg(short, long)]
        workspace: PathBuf,
        /// User id
        #[arg(short, long)]
        user: String,
        /// Resource type: organization, project, collection, view or link_type
        #[arg(long)]
        resource_type: String,
        /// Resource id
        #[arg(long)]
        resource_id: String,
    },
    /// Show which users gain or lose read access between two grant lists
    Diff {
        /// Grant list before the edit (JSON); a missing file means no snapshot
        #[arg(long)]
        before: PathBuf,
        /// Grant list after the edit (JSON); a missing file means no snapshot
        #[arg(long)]
        after: PathBuf,
    },
}

/// Access decision output
#[derive(Debug, Serialize, Tabled)]
struct AccessRow {
    /// User ID
    user: String,
    /// Resource type
    resource_type: String,
    /// Resource ID
    resource_id: String,
    /// Groups the user acts through
    groups: String,
    /// Manager bypass
    manager: bool,
    /// Read access
    can_read: bool,
    /// Manage access
    can_manage: bool,
}

/// Diff display row for table output
#[derive(Debug, Tabled)]
struct DiffRow {
    /// User ID
    user: String,
    /// Added or removed
    change: &'static str,
}

/// Execute access commands
pub async fn execute(args: &AccessArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        AccessCommand::Check {
            workspace,
            user,
            resource_type,
            resource_id,
        } => {
            let resource_type: ResourceType = resource_type.parse()?;
            let workspace = super::load_workspace(workspace)?;
            let permissions = workspace.permissions(resource_type, resource_id)?;
            let ctx = RequestContext::resolve(user, &workspace).await?;

            let AccessDecision {
                can_read,
                can_manage,
            } = acl::evaluate(&permissions, &ctx.user_id, &ctx.group_ids, ctx.is_manager);

            let row = AccessRow {
                user: ctx.user_id.clone(),
                resource_type: resource_type.to_string(),
                resource_id: resource_id.clone(),
                groups: ctx.group_ids.iter().cloned().collect::<Vec<_>>().join(", "),
                manager: ctx.is_manager,
                can_read,
                can_manage,
            };
            output::print_rows(std::slice::from_ref(&row), &row, format);
        }
        AccessCommand::Diff { before, after } => {
            let before = read_permissions(before)?;
            let after = read_permissions(after)?;
            let diff = acl::diff(before.as_ref(), after.as_ref());

            let rows: Vec<DiffRow> = diff
                .added_readers
                .iter()
                .map(|user| DiffRow {
                    user: user.clone(),
                    change: "added",
                })
                .chain(diff.removed_readers.iter().map(|user| DiffRow {
                    user: user.clone(),
                    change: "removed",
                }))
                .collect();
            output::print_rows(&rows, &diff, format);
        }
    }

    Ok(())
}

/// Read a grant list; a missing file is an absent snapshot
fn read_permissions(path: &Path) -> Result<Option<PermissionSet>, AppError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No grant list, treating as absent");
        return Ok(None);
    }
    let json = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&json)?))
}
