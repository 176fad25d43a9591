use async_trait::async_trait;
use dbscope_api::{
    ApiError, ApiResult, ProgressMonitor, Project, ResourceController,
    ResourceControllerProvider, RmProject, RmProjectType, VirtualFileSystem,
};
use dbscope_plugin::{BoxError, FileSystemCap, ProviderHandle, ProviderInfo};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerMode {
    Known,
    Unknown,
    Unreachable,
    Hang,
}

pub struct FakeController {
    mode: ControllerMode,
    calls: AtomicUsize,
}

impl FakeController {
    pub fn new(mode: ControllerMode) -> Arc<Self> {
        Arc::new(Self {
            mode,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceController for FakeController {
    async fn get_project(&self, project_id: &str) -> ApiResult<Option<RmProject>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            ControllerMode::Known => Ok(Some(RmProject::new(
                project_id,
                project_id,
                RmProjectType::User,
            ))),
            ControllerMode::Unknown => Ok(None),
            ControllerMode::Unreachable => {
                Err(ApiError::Internal("connection refused".to_string()))
            }
            ControllerMode::Hang => std::future::pending().await,
        }
    }
}

struct RmBinding {
    controller: Arc<FakeController>,
    project: RmProject,
}

impl ResourceControllerProvider for RmBinding {
    fn resource_controller(&self) -> Arc<dyn ResourceController> {
        self.controller.clone()
    }

    fn rm_project(&self) -> RmProject {
        self.project.clone()
    }
}

/// Project with a configurable set of tag capabilities and an optional
/// resource controller.
pub struct FakeProject {
    id: String,
    tags: Vec<&'static str>,
    rm: Option<RmBinding>,
}

impl FakeProject {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            tags: Vec::new(),
            rm: None,
        }
    }

    pub fn with_tags(mut self, tags: &[&'static str]) -> Self {
        self.tags.extend_from_slice(tags);
        self
    }

    pub fn with_controller(mut self, controller: Arc<FakeController>) -> Self {
        self.rm = Some(RmBinding {
            controller,
            project: RmProject::new(self.id.clone(), format!("{} project", self.id), RmProjectType::User),
        });
        self
    }

    pub fn into_handle(self) -> Arc<dyn Project> {
        Arc::new(self)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}

impl Project for FakeProject {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_controller_provider(&self) -> Option<&dyn ResourceControllerProvider> {
        self.rm.as_ref().map(|rm| rm as &dyn ResourceControllerProvider)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
pub struct TagFs {
    pub tag: &'static str,
    pub project_id: String,
}

impl VirtualFileSystem for TagFs {
    fn id(&self) -> &str {
        self.tag
    }

    fn fs_type(&self) -> &str {
        "tag"
    }

    fn provider_id(&self) -> &str {
        self.tag
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.tag, self.project_id)
    }

    fn uri(&self) -> String {
        format!("{}://{}/", self.tag, self.project_id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagBehavior {
    Ok,
    Fail,
    Hang,
    /// Reports cancellation of its own backend call.
    Cancelled,
}

/// Capability kind defined outside the API crate, tested by downcast.
pub struct TagCap {
    pub tag: &'static str,
    pub behavior: TagBehavior,
}

impl TagCap {
    pub fn handle(tag: &'static str, behavior: TagBehavior) -> ProviderHandle {
        ProviderHandle::new(
            ProviderInfo::new(tag, format!("{tag} provider")),
            Arc::new(TagCap { tag, behavior }),
        )
    }
}

#[async_trait]
impl FileSystemCap for TagCap {
    fn supports(&self, project: &dyn Project) -> bool {
        project
            .as_any()
            .downcast_ref::<FakeProject>()
            .is_some_and(|p| p.has_tag(self.tag))
    }

    async fn construct(
        &self,
        _monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> Result<Vec<Arc<dyn VirtualFileSystem>>, BoxError> {
        match self.behavior {
            TagBehavior::Ok => {
                let fs: Arc<dyn VirtualFileSystem> = Arc::new(TagFs {
                    tag: self.tag,
                    project_id: project.id().to_string(),
                });
                Ok(vec![fs])
            }
            TagBehavior::Fail => Err(format!("{} controller is misconfigured", self.tag).into()),
            TagBehavior::Hang => std::future::pending().await,
            TagBehavior::Cancelled => Err(ApiError::Cancelled.into()),
        }
    }
}

pub fn provider_ids(file_systems: &[Arc<dyn VirtualFileSystem>]) -> Vec<String> {
    file_systems
        .iter()
        .map(|fs| fs.provider_id().to_string())
        .collect()
}
