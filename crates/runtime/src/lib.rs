use dbscope_api::ApiResult;
use dbscope_core::{ProviderResolver, ResolverConfig, RmFileSystemCap};
use dbscope_plugin::ProviderHandle;
use std::sync::Arc;

/// Providers shipped with dbscope, in the order they contribute.
pub fn builtin_providers() -> Vec<ProviderHandle> {
    vec![RmFileSystemCap::handle()]
}

/// Bootstraps a resolver with every built-in provider.
///
/// Extra providers are appended after the built-in ones and contribute in
/// the order given.
pub fn build_default_resolver(
    config: ResolverConfig,
    extra: impl IntoIterator<Item = ProviderHandle>,
) -> ApiResult<Arc<ProviderResolver>> {
    let resolver = ProviderResolver::builder()
        .with_config(config)
        .with_providers(builtin_providers())
        .with_providers(extra)
        .build()?;

    tracing::debug!(
        providers = resolver.providers().count(),
        "Provider resolver ready"
    );
    Ok(Arc::new(resolver))
}

/// Start logging for `component` (`cli`, a host process, ...).
///
/// Drop the returned value only on shutdown; pending log lines are lost otherwise.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(dbscope_core::logging::init_logging(component, to_stderr))
}
