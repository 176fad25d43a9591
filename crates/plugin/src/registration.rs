use crate::cap::FileSystemCap;
use std::sync::Arc;

/// Metadata for a file system provider (the provider's own information).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl ProviderInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A registered provider: its metadata plus the capability it serves.
#[derive(Clone)]
pub struct ProviderHandle {
    pub metadata: ProviderInfo,
    pub cap: Arc<dyn FileSystemCap>,
}

impl ProviderHandle {
    pub fn new(metadata: ProviderInfo, cap: Arc<dyn FileSystemCap>) -> Self {
        Self { metadata, cap }
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
