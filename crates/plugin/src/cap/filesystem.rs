use crate::BoxError;
use async_trait::async_trait;
use dbscope_api::{ProgressMonitor, Project, VirtualFileSystem};
use std::sync::Arc;

/// A capability check paired with the constructor of the file systems
/// that capability backs.
#[async_trait]
pub trait FileSystemCap: Send + Sync {
    /// Does this project implement the capability?
    fn supports(&self, project: &dyn Project) -> bool;

    /// Build the file systems for a project that passed [`FileSystemCap::supports`].
    /// May block on the capability's controller; implementations should
    /// honour the monitor's cancellation token while doing so.
    async fn construct(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> Result<Vec<Arc<dyn VirtualFileSystem>>, BoxError>;
}
