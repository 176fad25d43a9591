//! Resource-manager backed file systems.
//!
//! A project that exposes a resource controller gets exactly one
//! [`RmVirtualFileSystem`], bound to that controller and the project's
//! resource-manager descriptor.

mod fs;

pub use fs::RmVirtualFileSystem;

use async_trait::async_trait;
use dbscope_api::{ApiError, ProgressMonitor, Project, VirtualFileSystem};
use dbscope_plugin::{BoxError, FileSystemCap, ProviderHandle, ProviderInfo};
use std::sync::Arc;
use tracing::debug;

pub const RM_PROVIDER_ID: &str = "rm";

/// Capability check for projects backed by a resource controller.
#[derive(Debug, Default, Clone, Copy)]
pub struct RmFileSystemCap;

impl RmFileSystemCap {
    pub fn provider_info() -> ProviderInfo {
        ProviderInfo::new(RM_PROVIDER_ID, "Resource manager")
            .with_description("Project resources served by the remote resource controller")
    }

    pub fn handle() -> ProviderHandle {
        ProviderHandle::new(Self::provider_info(), Arc::new(RmFileSystemCap))
    }
}

#[async_trait]
impl FileSystemCap for RmFileSystemCap {
    fn supports(&self, project: &dyn Project) -> bool {
        project.resource_controller_provider().is_some()
    }

    async fn construct(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> Result<Vec<Arc<dyn VirtualFileSystem>>, BoxError> {
        let Some(provider) = project.resource_controller_provider() else {
            return Ok(Vec::new());
        };
        let controller = provider.resource_controller();
        let rm_project = provider.rm_project();

        monitor.sub_task(&format!("Check resource project {}", rm_project.id));
        let known = tokio::select! {
            biased;
            _ = monitor.cancel_token().cancelled() => return Err(ApiError::Cancelled.into()),
            known = controller.get_project(&rm_project.id) => known?,
        };

        if known.is_none() {
            return Err(ApiError::NotFound(format!(
                "project '{}' is not known to its resource controller",
                rm_project.id
            ))
            .into());
        }

        debug!(project = %rm_project.id, "Resource manager file system available");
        let fs: Arc<dyn VirtualFileSystem> =
            Arc::new(RmVirtualFileSystem::new(controller, rm_project));
        Ok(vec![fs])
    }
}
