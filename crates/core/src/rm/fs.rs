use super::RM_PROVIDER_ID;
use dbscope_api::{ResourceController, RmProject, VirtualFileSystem};
use std::any::Any;
use std::sync::Arc;

/// File system over the resources of one resource-manager project.
pub struct RmVirtualFileSystem {
    controller: Arc<dyn ResourceController>,
    project: RmProject,
}

impl RmVirtualFileSystem {
    pub fn new(controller: Arc<dyn ResourceController>, project: RmProject) -> Self {
        Self {
            controller,
            project,
        }
    }

    pub fn controller(&self) -> &Arc<dyn ResourceController> {
        &self.controller
    }

    pub fn project(&self) -> &RmProject {
        &self.project
    }
}

impl std::fmt::Debug for RmVirtualFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RmVirtualFileSystem")
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}

impl VirtualFileSystem for RmVirtualFileSystem {
    fn id(&self) -> &str {
        &self.project.id
    }

    fn fs_type(&self) -> &str {
        "rm"
    }

    fn provider_id(&self) -> &str {
        RM_PROVIDER_ID
    }

    fn display_name(&self) -> String {
        format!("Resources of {}", self.project.name)
    }

    fn description(&self) -> Option<String> {
        Some("Resource manager file system".to_string())
    }

    fn uri(&self) -> String {
        format!("rm://{}/", self.project.id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
