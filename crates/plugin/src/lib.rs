pub mod cap;
pub mod registration;

pub use cap::*;
pub use registration::{ProviderHandle, ProviderInfo};

/// Error type crossing the provider seam
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
