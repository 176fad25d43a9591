//! Capability-gated file system discovery.
//!
//! The resolver walks an ordered list of registered providers. Each provider
//! checks whether the project implements its capability and, if so, builds
//! the file systems that capability backs:
//!
//! ```text
//!  project ──▶ provider[0].supports? ──yes──▶ construct ──▶ fs…
//!          ──▶ provider[1].supports? ──no───▶ (nothing)
//!          ──▶ provider[n] …
//! ```
//!
//! A project that supports nothing resolves to an empty list. A provider that
//! fails to construct is logged and recorded in [`Resolution::failures`]
//! unless the configuration asks for fail-fast behaviour.

mod resolution;

pub use resolution::{ProviderFailure, Resolution};

use crate::config::{FailurePolicy, ResolverConfig};
use async_trait::async_trait;
use dbscope_api::{
    ApiError, ApiResult, FileSystemProvider, ProgressMonitor, Project, VirtualFileSystem,
};
use dbscope_plugin::{ProviderHandle, ProviderInfo};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct ProviderResolver {
    providers: Vec<ProviderHandle>,
    config: ResolverConfig,
}

impl ProviderResolver {
    pub fn builder() -> ProviderResolverBuilder {
        ProviderResolverBuilder::default()
    }

    /// Registered provider metadata, in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &ProviderInfo> {
        self.providers.iter().map(|p| &p.metadata)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every file system the project currently exposes.
    pub async fn resolve(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> ApiResult<Resolution> {
        if project.id().trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "project id must not be blank".to_string(),
            ));
        }

        monitor.begin_task(
            &format!("Resolve file systems of {}", project.id()),
            self.providers.len(),
        );
        let result = self.resolve_inner(monitor, project).await;
        monitor.done();

        let resolution = result?;
        info!(
            project = project.id(),
            file_systems = resolution.file_systems.len(),
            failed = resolution.failures.len(),
            "File system resolution complete"
        );
        Ok(resolution)
    }

    async fn resolve_inner(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> ApiResult<Resolution> {
        let mut resolution = Resolution::default();
        if monitor.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        for provider in &self.providers {
            if monitor.is_cancelled() {
                debug!(project = project.id(), "Resolution cancelled");
                return Err(ApiError::Cancelled);
            }

            let id = provider.id();
            if self.config.is_disabled(id) {
                debug!(provider = id, "Provider disabled by configuration");
                monitor.worked(1);
                continue;
            }

            if !provider.cap.supports(project.as_ref()) {
                debug!(provider = id, project = project.id(), "Capability not supported");
                monitor.worked(1);
                continue;
            }

            monitor.sub_task(&provider.metadata.name);
            match self.construct(provider, monitor, project).await {
                Ok(file_systems) => {
                    debug!(provider = id, count = file_systems.len(), "Provider contributed");
                    resolution.file_systems.extend(file_systems);
                }
                Err(ApiError::Cancelled) => return Err(ApiError::Cancelled),
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::FailFast => return Err(err),
                    FailurePolicy::Skip => {
                        warn!("Skipping provider {} for project {}: {}", id, project.id(), err);
                        resolution.failures.push(ProviderFailure {
                            provider: id.to_string(),
                            reason: err.to_string(),
                        });
                    }
                },
            }
            monitor.worked(1);
        }

        Ok(resolution)
    }

    /// Run one provider's constructor, racing it against cancellation and
    /// the configured timeout.
    async fn construct(
        &self,
        provider: &ProviderHandle,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> ApiResult<Vec<Arc<dyn VirtualFileSystem>>> {
        let id = provider.id();
        let token = monitor.cancel_token().clone();

        let construct = async {
            let result = match self.config.construct_timeout() {
                Some(limit) => {
                    match tokio::time::timeout(limit, provider.cap.construct(monitor, project)).await
                    {
                        Ok(result) => result,
                        Err(_) => {
                            return Err(ApiError::construction_failed(
                                id,
                                format!("timed out after {}ms", limit.as_millis()),
                            ));
                        }
                    }
                }
                None => provider.cap.construct(monitor, project).await,
            };
            // Only the caller's monitor may cancel the whole resolution
            result.map_err(|err| match err.downcast::<ApiError>() {
                Ok(api) if api.is_cancelled() && token.is_cancelled() => ApiError::Cancelled,
                Ok(api) => ApiError::construction_failed(id, api),
                Err(other) => ApiError::construction_failed(id, other),
            })
        };

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(ApiError::Cancelled),
            result = construct => result,
        };

        // A constructor that gave up because of cancellation reports it as such
        if result.is_err() && token.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        result
    }
}

#[async_trait]
impl FileSystemProvider for ProviderResolver {
    async fn available_file_systems(
        &self,
        monitor: &dyn ProgressMonitor,
        project: &Arc<dyn Project>,
    ) -> ApiResult<Vec<Arc<dyn VirtualFileSystem>>> {
        self.resolve(monitor, project)
            .await
            .map(Resolution::into_file_systems)
    }
}

#[derive(Default)]
pub struct ProviderResolverBuilder {
    providers: Vec<ProviderHandle>,
    config: ResolverConfig,
}

impl ProviderResolverBuilder {
    /// Append a provider. Providers contribute in the order they are added.
    pub fn with_provider(mut self, provider: ProviderHandle) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn with_providers(mut self, providers: impl IntoIterator<Item = ProviderHandle>) -> Self {
        self.providers.extend(providers);
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ApiResult<ProviderResolver> {
        let mut seen = HashSet::new();
        for provider in &self.providers {
            if !seen.insert(provider.id()) {
                return Err(ApiError::InvalidArgument(format!(
                    "provider '{}' registered twice",
                    provider.id()
                )));
            }
        }

        for disabled in &self.config.disabled_providers {
            if !seen.contains(disabled.as_str()) {
                warn!("Disabled provider '{}' is not registered", disabled);
            }
        }

        Ok(ProviderResolver {
            providers: self.providers,
            config: self.config,
        })
    }
}
