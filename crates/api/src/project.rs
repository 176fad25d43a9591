//! Project handles and the capabilities a project may expose.

use crate::error::ApiResult;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;

/// Workspace-scoped project handle owned by the surrounding platform.
///
/// Capabilities are discovered at runtime: a project either returns a
/// capability object or it does not. Capability kinds defined outside this
/// crate can be tested by downcasting through [`Project::as_any`].
pub trait Project: Send + Sync {
    /// Stable project identifier.
    fn id(&self) -> &str;

    /// Human-readable project name.
    fn name(&self) -> &str {
        self.id()
    }

    /// Resource-controller capability, if this project is backed by a resource manager.
    fn resource_controller_provider(&self) -> Option<&dyn ResourceControllerProvider> {
        None
    }

    /// Cast to Any for downcasting to concrete project types.
    fn as_any(&self) -> &dyn Any;
}

/// Capability of a project that is managed by a remote resource controller.
pub trait ResourceControllerProvider: Send + Sync {
    /// Controller serving this project. Not cached by callers.
    fn resource_controller(&self) -> Arc<dyn ResourceController>;

    /// Resource-manager view of the project.
    fn rm_project(&self) -> RmProject;
}

/// Remote resource controller. Only project lookup is needed here;
/// resource content operations belong to the transport layer.
#[async_trait]
pub trait ResourceController: Send + Sync {
    /// Look up a project the controller manages. `Ok(None)` means the
    /// controller is reachable but does not know the project.
    async fn get_project(&self, project_id: &str) -> ApiResult<Option<RmProject>>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RmProjectType {
    Global,
    Shared,
    #[default]
    User,
}

/// Project descriptor as seen by the resource manager.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct RmProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_type: RmProjectType,
}

impl RmProject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, project_type: RmProjectType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            project_type,
        }
    }
}
