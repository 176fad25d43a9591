//! Navigator snapshot: one level of a database object hierarchy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Navigator node descriptor. Stored and exposed as-is; never interpreted here.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    /// Node path, e.g. "database://postgres-1/sales"
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub folder: bool,
}

impl NodeInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }
}

/// A catalog node together with its schemas, in server order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub catalog: Arc<NodeInfo>,
    #[serde(rename = "schemaList", default)]
    pub schemas: Vec<Arc<NodeInfo>>,
}

impl CatalogEntry {
    pub fn new(catalog: Arc<NodeInfo>) -> Self {
        Self {
            catalog,
            schemas: Vec::new(),
        }
    }

    pub fn with_schemas(catalog: Arc<NodeInfo>, schemas: Vec<Arc<NodeInfo>>) -> Self {
        Self { catalog, schemas }
    }
}

/// Point-in-time view of one navigator level: a parent node, its child
/// catalogs and schemas, and whether the client may switch the active
/// catalog or schema.
///
/// The change flags describe client capability, not content. A snapshot may
/// allow catalog changes while listing no catalogs, and the reverse. No
/// cross-field validation is performed; consistency is up to the producer.
///
/// Lists keep the order they were set with.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorSnapshot {
    #[serde(default)]
    parent_node: Option<Arc<NodeInfo>>,
    #[serde(rename = "catalogList", default)]
    catalogs: Vec<CatalogEntry>,
    #[serde(rename = "schemaList", default)]
    schemas: Vec<Arc<NodeInfo>>,
    #[serde(default)]
    supports_catalog_change: bool,
    #[serde(default)]
    supports_schema_change: bool,
}

impl NavigatorSnapshot {
    /// Bulk constructor. Both change flags start out false.
    pub fn new(
        parent_node: Option<Arc<NodeInfo>>,
        catalogs: Vec<CatalogEntry>,
        schemas: Vec<Arc<NodeInfo>>,
    ) -> Self {
        Self {
            parent_node,
            catalogs,
            schemas,
            ..Default::default()
        }
    }

    pub fn parent_node(&self) -> Option<&Arc<NodeInfo>> {
        self.parent_node.as_ref()
    }

    pub fn set_parent_node(&mut self, parent_node: Option<Arc<NodeInfo>>) {
        self.parent_node = parent_node;
    }

    pub fn catalogs(&self) -> &[CatalogEntry] {
        &self.catalogs
    }

    pub fn set_catalogs(&mut self, catalogs: Vec<CatalogEntry>) {
        self.catalogs = catalogs;
    }

    pub fn schemas(&self) -> &[Arc<NodeInfo>] {
        &self.schemas
    }

    pub fn set_schemas(&mut self, schemas: Vec<Arc<NodeInfo>>) {
        self.schemas = schemas;
    }

    pub fn supports_catalog_change(&self) -> bool {
        self.supports_catalog_change
    }

    pub fn set_supports_catalog_change(&mut self, supports: bool) {
        self.supports_catalog_change = supports;
    }

    pub fn supports_schema_change(&self) -> bool {
        self.supports_schema_change
    }

    pub fn set_supports_schema_change(&mut self, supports: bool) {
        self.supports_schema_change = supports;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(name: &str) -> CatalogEntry {
        CatalogEntry::new(Arc::new(
            NodeInfo::new(format!("database://conn/{name}"), name).with_node_type("catalog"),
        ))
    }

    fn schema(name: &str) -> Arc<NodeInfo> {
        Arc::new(NodeInfo::new(format!("database://conn/db/{name}"), name).with_node_type("schema"))
    }

    fn names(snapshot: &NavigatorSnapshot) -> Vec<&str> {
        snapshot
            .catalogs()
            .iter()
            .map(|c| c.catalog.name.as_str())
            .collect()
    }

    #[test]
    fn test_default_is_empty() {
        let snapshot = NavigatorSnapshot::default();
        assert!(snapshot.parent_node().is_none());
        assert!(snapshot.catalogs().is_empty());
        assert!(snapshot.schemas().is_empty());
        assert!(!snapshot.supports_catalog_change());
        assert!(!snapshot.supports_schema_change());
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let mut snapshot = NavigatorSnapshot::default();
        // Deliberately not alphabetical
        snapshot.set_catalogs(vec![catalog("c"), catalog("a"), catalog("b")]);
        assert_eq!(names(&snapshot), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_schema_order_is_preserved() {
        let mut snapshot = NavigatorSnapshot::default();
        snapshot.set_schemas(vec![schema("public"), schema("audit"), schema("pg_catalog")]);
        let got: Vec<_> = snapshot.schemas().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(got, vec!["public", "audit", "pg_catalog"]);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut snapshot = NavigatorSnapshot::default();
        snapshot.set_schemas(vec![schema("public")]);

        snapshot.set_supports_catalog_change(true);
        assert!(snapshot.supports_catalog_change());
        assert!(!snapshot.supports_schema_change());
        assert!(snapshot.catalogs().is_empty());
        assert_eq!(snapshot.schemas().len(), 1);

        snapshot.set_supports_schema_change(true);
        snapshot.set_supports_catalog_change(false);
        assert!(!snapshot.supports_catalog_change());
        assert!(snapshot.supports_schema_change());
    }

    #[test]
    fn test_flag_without_content_is_accepted() {
        let mut snapshot = NavigatorSnapshot::default();
        snapshot.set_catalogs(Vec::new());
        snapshot.set_supports_catalog_change(true);
        assert!(snapshot.supports_catalog_change());
        assert!(snapshot.catalogs().is_empty());

        // And content without the flag
        snapshot.set_supports_catalog_change(false);
        snapshot.set_catalogs(vec![catalog("a")]);
        assert!(!snapshot.supports_catalog_change());
        assert_eq!(snapshot.catalogs().len(), 1);
    }

    #[test]
    fn test_parent_is_shared_not_copied() {
        let parent = Arc::new(NodeInfo::new("database://conn", "conn"));
        let mut snapshot = NavigatorSnapshot::default();
        snapshot.set_parent_node(Some(parent.clone()));

        let stored = snapshot.parent_node().unwrap();
        assert!(Arc::ptr_eq(stored, &parent));

        snapshot.set_parent_node(None);
        assert!(snapshot.parent_node().is_none());
        assert_eq!(parent.name, "conn");
    }

    #[test]
    fn test_bulk_constructor() {
        let parent = Arc::new(NodeInfo::new("database://conn", "conn"));
        let snapshot = NavigatorSnapshot::new(
            Some(parent),
            vec![catalog("a"), catalog("b")],
            vec![schema("s")],
        );
        assert_eq!(names(&snapshot), vec!["a", "b"]);
        assert_eq!(snapshot.schemas().len(), 1);
        assert!(!snapshot.supports_catalog_change());
        assert!(!snapshot.supports_schema_change());
    }
}
