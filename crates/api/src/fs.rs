//! Virtual file system handles and the provider contract that yields them.

use crate::error::ApiResult;
use crate::monitor::ProgressMonitor;
use crate::project::Project;
use async_trait::async_trait;
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// File-system-shaped handle bound to a controller and a project.
/// Content operations live with the transport and are not part of this trait.
pub trait VirtualFileSystem: Send + Sync + Debug {
    /// Identifier of this file system within its provider.
    fn id(&self) -> &str;

    /// File system type, e.g. "rm".
    fn fs_type(&self) -> &str;

    /// Id of the provider that constructed this instance.
    fn provider_id(&self) -> &str;

    fn display_name(&self) -> String;

    fn description(&self) -> Option<String> {
        None
    }

    /// Root URI of the file system.
    fn uri(&self) -> String;

    /// Cast to Any for downcasting to concrete file system types.
    fn as_any(&self) -> &dyn Any;
}

/// Narrow contract for anything that can list the file systems a project exposes.
#[async_trait]
pub trait FileSystemProvider: Send + Sync {
    /// Returns every file system the project currently exposes.
    /// A project that supports nothing yields an empty list, not an error.
    async fn available_file_systems(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> ApiResult<Vec<Arc<dyn VirtualFileSystem>>>;
}
