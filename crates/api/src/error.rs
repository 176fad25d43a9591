#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Provider {provider} failed to construct a file system: {reason}")]
    ProviderConstructionFailed { provider: String, reason: String },
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn construction_failed(provider: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::ProviderConstructionFailed {
            provider: provider.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
