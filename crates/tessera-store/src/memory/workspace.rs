//! In-memory workspace holding one organization and one project.

use std::collections::BTreeSet;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use tessera_auth::acl::evaluator::{can_manage, can_read};
use tessera_core::error::AppError;
use tessera_core::result::AppResult;
use tessera_core::types::PageWindow;
use tessera_entity::permission::PermissionSet;
use tessera_entity::resource::{
    Collection, LinkType, Organization, Project, Resource, ResourceType, View,
};

use super::snapshot::WorkspaceSnapshot;
use crate::query::SearchSuggestionQuery;
use crate::repositories::{
    CollectionRepository, LinkTypeRepository, ScopeRepository, ViewRepository,
};

/// Workspace store backed by concurrent maps.
///
/// Searches rank entities touching a priority collection first, then order
/// by case-insensitive name, then apply the page window.
#[derive(Debug)]
pub struct MemoryWorkspace {
    /// The organization.
    organization: Organization,
    /// The project.
    project: Project,
    /// Collections keyed by id.
    collections: DashMap<String, Collection>,
    /// Views keyed by id.
    views: DashMap<String, View>,
    /// Link types keyed by id.
    link_types: DashMap<String, LinkType>,
    /// User id to the groups it belongs to.
    memberships: DashMap<String, BTreeSet<String>>,
}

impl MemoryWorkspace {
    /// Create an empty workspace.
    pub fn new(organization: Organization, project: Project) -> Self {
        Self {
            organization,
            project,
            collections: DashMap::new(),
            views: DashMap::new(),
            link_types: DashMap::new(),
            memberships: DashMap::new(),
        }
    }

    /// Create a workspace seeded from a snapshot.
    pub fn from_snapshot(snapshot: WorkspaceSnapshot) -> Self {
        let workspace = Self::new(snapshot.organization, snapshot.project);
        for collection in snapshot.collections {
            workspace.upsert_collection(collection);
        }
        for view in snapshot.views {
            workspace.upsert_view(view);
        }
        for link_type in snapshot.link_types {
            workspace.upsert_link_type(link_type);
        }
        for (group, members) in snapshot.groups {
            for member in members {
                workspace.add_member(&group, &member);
            }
        }
        workspace
    }

    /// Insert or replace a collection, returning the previous version.
    pub fn upsert_collection(&self, collection: Collection) -> Option<Collection> {
        self.collections.insert(collection.id.clone(), collection)
    }

    /// Insert or replace a view, returning the previous version.
    pub fn upsert_view(&self, view: View) -> Option<View> {
        self.views.insert(view.id.clone(), view)
    }

    /// Insert or replace a link type, returning the previous version.
    pub fn upsert_link_type(&self, link_type: LinkType) -> Option<LinkType> {
        self.link_types.insert(link_type.id.clone(), link_type)
    }

    /// Add a user to a group.
    pub fn add_member(&self, group_id: &str, user_id: &str) {
        self.memberships
            .entry(user_id.to_string())
            .or_default()
            .insert(group_id.to_string());
    }

    /// Look up a collection.
    pub fn collection(&self, id: &str) -> Option<Collection> {
        self.collections.get(id).map(|c| c.value().clone())
    }

    /// Look up a view.
    pub fn view(&self, id: &str) -> Option<View> {
        self.views.get(id).map(|v| v.value().clone())
    }

    /// Look up a link type.
    pub fn link_type(&self, id: &str) -> Option<LinkType> {
        self.link_types.get(id).map(|l| l.value().clone())
    }

    /// Grant list of any resource in the workspace.
    pub fn permissions(&self, resource_type: ResourceType, id: &str) -> AppResult<PermissionSet> {
        let found = match resource_type {
            ResourceType::Organization => (self.organization.id == id)
                .then(|| self.organization.permissions.clone()),
            ResourceType::Project => {
                (self.project.id == id).then(|| self.project.permissions.clone())
            }
            ResourceType::Collection => self.collections.get(id).map(|c| c.permissions.clone()),
            ResourceType::View => self.views.get(id).map(|v| v.permissions.clone()),
            ResourceType::LinkType => self.link_types.get(id).map(|l| l.permissions.clone()),
        };
        found.ok_or_else(|| AppError::not_found(format!("{resource_type} '{id}' not found")))
    }

    fn groups_of(&self, user_id: &str) -> BTreeSet<String> {
        self.memberships
            .get(user_id)
            .map(|g| g.value().clone())
            .unwrap_or_default()
    }

    fn visible<R: Resource>(resource: &R, query: &SearchSuggestionQuery, is_manager: bool) -> bool {
        can_read(
            resource.permissions(),
            &query.user_id,
            &query.groups,
            is_manager,
        )
    }
}

/// Order by priority first, then by name, and cut the page window.
fn rank<T: Resource>(mut items: Vec<(bool, T)>, page: PageWindow) -> Vec<T> {
    items.sort_by(|(a_prio, a), (b_prio, b)| {
        b_prio
            .cmp(a_prio)
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
            .then_with(|| a.id().cmp(b.id()))
    });
    page.apply(items.into_iter().map(|(_, item)| item))
}

#[async_trait]
impl CollectionRepository for MemoryWorkspace {
    async fn search(
        &self,
        query: &SearchSuggestionQuery,
        is_manager: bool,
    ) -> AppResult<Vec<Collection>> {
        let matches: Vec<(bool, Collection)> = self
            .collections
            .iter()
            .filter(|c| Self::visible(c.value(), query, is_manager))
            .filter(|c| query.matches_text(&c.name))
            .map(|c| (query.priority_collection_ids.contains(&c.id), c.value().clone()))
            .collect();

        debug!(matched = matches.len(), page = ?query.page, "Collection search");
        Ok(rank(matches, query.page))
    }

    async fn search_by_attributes(
        &self,
        query: &SearchSuggestionQuery,
        is_manager: bool,
    ) -> AppResult<Vec<Collection>> {
        let matches: Vec<(bool, Collection)> = self
            .collections
            .iter()
            .filter(|c| Self::visible(c.value(), query, is_manager))
            .filter(|c| c.has_attribute_matching(&query.text))
            .map(|c| (query.priority_collection_ids.contains(&c.id), c.value().clone()))
            .collect();

        debug!(matched = matches.len(), page = ?query.page, "Attribute search");
        Ok(rank(matches, query.page))
    }

    async fn find_all(&self) -> AppResult<Vec<Collection>> {
        let all = self
            .collections
            .iter()
            .map(|c| (false, c.value().clone()))
            .collect::<Vec<_>>();
        Ok(rank(all, PageWindow::first(usize::MAX)))
    }

    async fn find_readable(
        &self,
        user_id: &str,
        groups: &BTreeSet<String>,
    ) -> AppResult<Vec<Collection>> {
        let readable = self
            .collections
            .iter()
            .filter(|c| can_read(&c.permissions, user_id, groups, false))
            .map(|c| (false, c.value().clone()))
            .collect::<Vec<_>>();
        Ok(rank(readable, PageWindow::first(usize::MAX)))
    }
}

#[async_trait]
impl ViewRepository for MemoryWorkspace {
    async fn search(
        &self,
        query: &SearchSuggestionQuery,
        is_manager: bool,
    ) -> AppResult<Vec<View>> {
        let matches: Vec<(bool, View)> = self
            .views
            .iter()
            .filter(|v| Self::visible(v.value(), query, is_manager))
            .filter(|v| query.matches_text(&v.name))
            .map(|v| {
                let prio = v
                    .collection_ids
                    .iter()
                    .any(|id| query.priority_collection_ids.contains(id));
                (prio, v.value().clone())
            })
            .collect();

        debug!(matched = matches.len(), page = ?query.page, "View search");
        Ok(rank(matches, query.page))
    }
}

#[async_trait]
impl LinkTypeRepository for MemoryWorkspace {
    async fn search(&self, query: &SearchSuggestionQuery) -> AppResult<Vec<LinkType>> {
        let matches: Vec<(bool, LinkType)> = self
            .link_types
            .iter()
            .filter(|l| {
                query
                    .collection_ids
                    .as_ref()
                    .is_none_or(|ids| l.touches_any(ids))
            })
            .filter(|l| query.matches_text(&l.name))
            .map(|l| (l.touches_any(&query.priority_collection_ids), l.value().clone()))
            .collect();

        debug!(matched = matches.len(), page = ?query.page, "Link type search");
        Ok(rank(matches, query.page))
    }
}

#[async_trait]
impl ScopeRepository for MemoryWorkspace {
    async fn is_manager(&self, user_id: &str) -> AppResult<bool> {
        let groups = self.groups_of(user_id);
        Ok(
            can_manage(&self.organization.permissions, user_id, &groups, false)
                || can_manage(&self.project.permissions, user_id, &groups, false),
        )
    }

    async fn user_groups(&self, user_id: &str) -> AppResult<BTreeSet<String>> {
        Ok(self.groups_of(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_entity::permission::{Grant, Role};
    use tessera_entity::resource::Attribute;

    fn readers(users: &[&str]) -> PermissionSet {
        PermissionSet::from_grants(users.iter().map(|u| Grant::new(*u, [Role::Read])), [])
    }

    fn collection(id: &str, name: &str, users: &[&str]) -> Collection {
        Collection {
            id: id.to_string(),
            project_id: "p1".to_string(),
            code: id.to_uppercase(),
            name: name.to_string(),
            icon: None,
            attributes: vec![Attribute::new("a1", "Amount"), Attribute::new("a2", "Date")],
            permissions: readers(users),
        }
    }

    fn workspace() -> MemoryWorkspace {
        let organization = Organization {
            id: "o1".to_string(),
            code: "ACME".to_string(),
            name: "Acme".to_string(),
            permissions: PermissionSet::from_grants([Grant::new("boss", [Role::Manage])], []),
        };
        let project = Project {
            id: "p1".to_string(),
            organization_id: "o1".to_string(),
            code: "SALES".to_string(),
            name: "Sales".to_string(),
            permissions: PermissionSet::from_grants([], [Grant::new("leads", [Role::Manage])]),
        };
        let ws = MemoryWorkspace::new(organization, project);
        ws.upsert_collection(collection("c1", "Invoices", &["alice"]));
        ws.upsert_collection(collection("c2", "invoice lines", &["alice", "bob"]));
        ws.upsert_collection(collection("c3", "Orders", &["bob"]));
        ws.upsert_link_type(LinkType {
            id: "l1".to_string(),
            project_id: "p1".to_string(),
            name: "Invoice to order".to_string(),
            collection_ids: ["c1".to_string(), "c3".to_string()],
            permissions: PermissionSet::new(),
        });
        ws.add_member("leads", "carol");
        ws
    }

    fn query(user: &str, text: &str, limit: usize) -> SearchSuggestionQuery {
        SearchSuggestionQuery::builder(user)
            .text(text)
            .page(0, limit)
            .build()
    }

    #[tokio::test]
    async fn test_search_filters_by_grants() {
        let ws = workspace();
        let found = CollectionRepository::search(&ws, &query("bob", "inv", 10), false)
            .await
            .unwrap();
        let ids: Vec<_> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2"]);
    }

    #[tokio::test]
    async fn test_manager_sees_everything() {
        let ws = workspace();
        let found = CollectionRepository::search(&ws, &query("nobody", "", 10), true)
            .await
            .unwrap();
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn test_priority_ranks_first_and_page_limits() {
        let ws = workspace();
        let mut q = query("alice", "inv", 1);
        q.priority_collection_ids = BTreeSet::from(["c2".to_string()]);
        let found = CollectionRepository::search(&ws, &q, false).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c2");
    }

    #[tokio::test]
    async fn test_attribute_search() {
        let ws = workspace();
        let found = ws
            .search_by_attributes(&query("alice", "AMO", 10), false)
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.attributes.len() == 2));
    }

    #[tokio::test]
    async fn test_link_types_need_a_visible_endpoint() {
        let ws = workspace();
        let mut q = query("alice", "", 10);
        q.collection_ids = Some(BTreeSet::from(["c2".to_string()]));
        assert!(LinkTypeRepository::search(&ws, &q).await.unwrap().is_empty());

        q.collection_ids = Some(BTreeSet::from(["c3".to_string()]));
        assert_eq!(LinkTypeRepository::search(&ws, &q).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_is_manager_through_org_or_project_group() {
        let ws = workspace();
        assert!(ws.is_manager("boss").await.unwrap());
        assert!(ws.is_manager("carol").await.unwrap());
        assert!(!ws.is_manager("alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_readable() {
        let ws = workspace();
        let readable = ws.find_readable("bob", &BTreeSet::new()).await.unwrap();
        let ids: Vec<_> = readable.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c3"]);
        assert_eq!(ws.find_all().await.unwrap().len(), 3);
    }

    #[test]
    fn test_permissions_lookup() {
        let ws = workspace();
        assert!(ws.permissions(ResourceType::Collection, "c1").is_ok());
        assert!(ws.permissions(ResourceType::Project, "p1").is_ok());
        let err = ws.permissions(ResourceType::View, "v9").unwrap_err();
        assert_eq!(err.kind, tessera_core::error::ErrorKind::NotFound);
    }
}
