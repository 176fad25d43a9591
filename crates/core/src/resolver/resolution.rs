use dbscope_api::VirtualFileSystem;
use std::sync::Arc;

/// A provider whose construction step failed and was left out of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderFailure {
    pub provider: String,
    pub reason: String,
}

/// Outcome of one resolution call.
#[derive(Debug, Default)]
pub struct Resolution {
    pub(crate) file_systems: Vec<Arc<dyn VirtualFileSystem>>,
    pub(crate) failures: Vec<ProviderFailure>,
}

impl Resolution {
    /// File systems in provider registration order.
    pub fn file_systems(&self) -> &[Arc<dyn VirtualFileSystem>] {
        &self.file_systems
    }

    pub fn failures(&self) -> &[ProviderFailure] {
        &self.failures
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_systems.is_empty()
    }

    pub fn into_file_systems(self) -> Vec<Arc<dyn VirtualFileSystem>> {
        self.file_systems
    }
}
