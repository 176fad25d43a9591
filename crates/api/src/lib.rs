pub mod error;
pub mod fs;
pub mod models;
pub mod monitor;
pub mod project;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use fs::{FileSystemProvider, VirtualFileSystem};
pub use models::*;
pub use monitor::{ProgressMonitor, TokenMonitor};
pub use project::{Project, ResourceController, ResourceControllerProvider, RmProject, RmProjectType};
