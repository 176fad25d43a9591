pub mod config;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod rm;

pub use config::{FailurePolicy, ResolverConfig};
pub use error::{DbscopeError, Result};
pub use resolver::{ProviderFailure, ProviderResolver, ProviderResolverBuilder, Resolution};
pub use rm::{RM_PROVIDER_ID, RmFileSystemCap, RmVirtualFileSystem};
