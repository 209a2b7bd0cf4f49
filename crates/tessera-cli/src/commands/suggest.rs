//! Suggestion CLI command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use tessera_core::config::AppConfig;
use tessera_core::error::AppError;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_service::{RequestContext, SuggestionService};

/// Arguments for the suggest command
#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Workspace snapshot (JSON)
    #[arg(short, long)]
    pub workspace: PathBuf,
    /// Acting user id
    #[arg(short, long)]
    pub user: String,
    /// Free text to match
    #[arg(short, long, default_value = "")]
    pub text: String,
    /// Suggestion type: all, attribute, collection, link or view
    #[arg(long = "type", default_value = "all")]
    pub kind: String,
    /// Priority collection ids (repeatable)
    #[arg(short, long)]
    pub priority: Vec<String>,
}

/// Suggestion display row for table output
#[derive(Debug, Tabled)]
struct SuggestionRow {
    /// Suggestion kind
    kind: &'static str,
    /// Resource ID
    id: String,
    /// Resource name
    name: String,
    /// Kind-specific detail
    detail: String,
}

/// Execute the suggest command
pub async fn execute(
    args: &SuggestArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let suggestion_type: SuggestionType = args.kind.parse()?;
    let workspace = Arc::new(super::load_workspace(&args.workspace)?);

    let ctx = RequestContext::resolve(&args.user, workspace.as_ref()).await?;
    let service = SuggestionService::new(
        workspace.clone(),
        workspace.clone(),
        workspace,
        &config.suggestion,
    );
    let query = SuggestionQuery::new(args.text.clone(), suggestion_type)
        .with_priority_collections(args.priority.iter().cloned());

    let suggestions = service.suggest(&ctx, &query).await?;
    output::print_rows(&rows(&suggestions), &suggestions, format);
    Ok(())
}

fn rows(suggestions: &Suggestions) -> Vec<SuggestionRow> {
    let views = suggestions.views.iter().map(|v| SuggestionRow {
        kind: "view",
        id: v.id.clone(),
        name: v.name.clone(),
        detail: v.collection_ids.join(", "),
    });
    let link_types = suggestions.link_types.iter().map(|l| SuggestionRow {
        kind: "link",
        id: l.id.clone(),
        name: l.name.clone(),
        detail: format!("{} <-> {}", l.collection_ids[0], l.collection_ids[1]),
    });
    let collections = suggestions.collections.iter().map(|c| SuggestionRow {
        kind: "collection",
        id: c.id.clone(),
        name: c.name.clone(),
        detail: c.code.clone(),
    });
    let attributes = suggestions.attributes.iter().map(|c| SuggestionRow {
        kind: "attribute",
        id: c.id.clone(),
        name: c.name.clone(),
        detail: c
            .attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    });

    views
        .chain(link_types)
        .chain(collections)
        .chain(attributes)
        .collect()
}
