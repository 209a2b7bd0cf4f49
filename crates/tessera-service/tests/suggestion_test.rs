//! Integration tests for quota-balanced suggestions.

mod helpers;

use std::sync::Arc;

use tessera_core::config::AppConfig;
use tessera_core::error::ErrorKind;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_service::SuggestionService;

fn ids<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    items.into_iter().collect()
}

fn collection_ids(suggestions: &[tessera_entity::resource::Collection]) -> Vec<&str> {
    ids(suggestions.iter().map(|c| c.id.as_str()))
}

async fn suggest(app: &helpers::TestApp, user: &str, query: SuggestionQuery) -> Suggestions {
    let ctx = app.context(user).await;
    app.suggestions
        .suggest(&ctx, &query)
        .await
        .expect("suggest failed")
}

#[tokio::test]
async fn test_all_types_share_the_budget() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "alice", SuggestionQuery::new("", SuggestionType::All)).await;

    assert_eq!(ids(result.views.iter().map(|v| v.id.as_str())), vec!["v2", "v1"]);
    assert_eq!(result.link_types.len(), 3);
    assert_eq!(collection_ids(&result.collections), vec!["c4", "c2", "c1"]);
    assert_eq!(result.attributes.len(), 3);
    assert_eq!(result.len(), 11);
    assert!(result.len() <= app.config.suggestion.limit);
}

#[tokio::test]
async fn test_attribute_cap_follows_remaining_budget() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "alice", SuggestionQuery::new("", SuggestionType::All)).await;

    // 2 views, 3 link types and 3 collections leave 4 units for 3 collections.
    for collection in &result.attributes {
        assert_eq!(collection.attributes.len(), 2, "{}", collection.id);
    }
}

#[tokio::test]
async fn test_priority_collections_drop_views() {
    let app = helpers::TestApp::new();
    let query = SuggestionQuery::new("", SuggestionType::All)
        .with_priority_collections(["c3"]);
    let result = suggest(&app, "alice", query).await;

    assert!(result.views.is_empty());
    // Link types touching the priority collection rank first.
    assert_eq!(
        ids(result.link_types.iter().map(|l| l.id.as_str())),
        vec!["l1", "l3", "l2"]
    );
    assert_eq!(result.collections.len(), 3);
    // 6 units left for 3 collections gives a cap of 3.
    let c1 = result
        .attributes
        .iter()
        .find(|c| c.id == "c1")
        .expect("c1 suggested");
    assert_eq!(c1.attributes.len(), 3);
}

#[tokio::test]
async fn test_collections_are_stripped_of_attributes() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "carol", SuggestionQuery::new("", SuggestionType::Collection)).await;

    assert_eq!(collection_ids(&result.collections), vec!["c4", "c2", "c1", "c3"]);
    assert!(result.collections.iter().all(|c| c.attributes.is_empty()));
    assert!(result.attributes.is_empty());
    assert!(result.views.is_empty());
    assert!(result.link_types.is_empty());
}

#[tokio::test]
async fn test_group_grant_reaches_collection_search() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "dave", SuggestionQuery::new("INV", SuggestionType::Collection)).await;
    assert_eq!(collection_ids(&result.collections), vec!["c1"]);
}

#[tokio::test]
async fn test_attribute_matches_are_narrowed() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "alice", SuggestionQuery::new("date", SuggestionType::Attribute)).await;

    assert_eq!(collection_ids(&result.attributes), vec!["c1"]);
    let names: Vec<&str> = result.attributes[0]
        .attributes
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Invoice date", "Due date"]);
}

#[tokio::test]
async fn test_manager_sees_attributes_everywhere() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "carol", SuggestionQuery::new("Date", SuggestionType::Attribute)).await;

    assert_eq!(collection_ids(&result.attributes), vec!["c1", "c3"]);
    assert_eq!(result.attributes[1].attributes.len(), 1);
}

#[tokio::test]
async fn test_link_types_need_a_readable_endpoint() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "bob", SuggestionQuery::new("", SuggestionType::Link)).await;
    assert_eq!(
        ids(result.link_types.iter().map(|l| l.id.as_str())),
        vec!["l1", "l3"]
    );
}

#[tokio::test]
async fn test_single_type_only_queries_its_kind() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "bob", SuggestionQuery::new("", SuggestionType::View)).await;
    assert_eq!(ids(result.views.iter().map(|v| v.id.as_str())), vec!["v3"]);
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_stranger_gets_nothing() {
    let app = helpers::TestApp::new();
    let result = suggest(&app, "eve", SuggestionQuery::new("", SuggestionType::All)).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_configured_limit() {
    let mut config = AppConfig::default();
    config.suggestion.limit = 4;
    let app = helpers::TestApp::with_config(config);
    assert_eq!(app.suggestions.limit(), 4);
    let result = suggest(&app, "alice", SuggestionQuery::new("", SuggestionType::All)).await;

    assert_eq!(result.views.len(), 1);
    assert_eq!(result.link_types.len(), 1);
    assert_eq!(result.collections.len(), 1);
    assert_eq!(result.attributes.len(), 1);
    assert_eq!(result.attributes[0].attributes.len(), 2);
}

#[tokio::test]
async fn test_storage_failure_reaches_caller_and_stops_the_run() {
    let app = helpers::TestApp::new();
    let collections = Arc::new(helpers::FailingCollections::default());
    let service = SuggestionService::new(
        collections.clone(),
        app.workspace.clone(),
        app.workspace.clone(),
        &app.config.suggestion,
    );
    let ctx = app.context("alice").await;

    let err = service
        .suggest(&ctx, &SuggestionQuery::new("", SuggestionType::All))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Storage);
    assert_eq!(err.message, helpers::FailingCollections::MESSAGE);
    // Link types fail on the collection lookup; collections and attributes never run.
    assert_eq!(collections.calls(), 1);
}

#[tokio::test]
async fn test_storage_failure_for_single_type() {
    let app = helpers::TestApp::new();
    let collections = Arc::new(helpers::FailingCollections::default());
    let service = SuggestionService::new(
        collections.clone(),
        app.workspace.clone(),
        app.workspace.clone(),
        &app.config.suggestion,
    );
    let ctx = app.context("carol").await;

    let err = service
        .suggest(&ctx, &SuggestionQuery::new("", SuggestionType::Attribute))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Storage);
    assert_eq!(err.message, helpers::FailingCollections::MESSAGE);
    assert_eq!(collections.calls(), 1);
}

#[tokio::test]
async fn test_link_types_not_searched_without_visible_collections() {
    let app = helpers::TestApp::new();
    let link_types = Arc::new(helpers::RecordingLinkTypes::new(app.workspace.clone()));
    let service = SuggestionService::new(
        app.workspace.clone(),
        app.workspace.clone(),
        link_types.clone(),
        &app.config.suggestion,
    );

    let eve = app.context("eve").await;
    for kind in [SuggestionType::Link, SuggestionType::All] {
        let result = service
            .suggest(&eve, &SuggestionQuery::new("", kind))
            .await
            .unwrap();
        assert!(result.link_types.is_empty());
    }
    assert_eq!(link_types.calls(), 0);

    let alice = app.context("alice").await;
    let result = service
        .suggest(&alice, &SuggestionQuery::new("", SuggestionType::Link))
        .await
        .unwrap();
    assert_eq!(result.link_types.len(), 3);
    assert_eq!(link_types.calls(), 1);
}
