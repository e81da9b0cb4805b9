//! Caller-facing façade over the resolved adapter.
use molecule_core::{
    CapabilityAdapter, CapabilityConfig, CapabilityError, CapabilityTarget, TitleRequest,
    VersionId,
};
use molecule_registry::AdapterRegistry;
use std::sync::Arc;

/// Holds the one adapter chosen for this host for the life of the process.
pub struct Dispatcher {
    version: VersionId,
    adapter: Arc<dyn CapabilityAdapter>,
    config: CapabilityConfig,
}

impl Dispatcher {
    pub fn new(
        version: VersionId,
        adapter: Arc<dyn CapabilityAdapter>,
        config: CapabilityConfig,
    ) -> Self {
        Self {
            version,
            adapter,
            config,
        }
    }

    /// Resolve the host's version string against `registry`.
    pub fn from_registry(
        registry: &AdapterRegistry,
        platform_version: &str,
        config: CapabilityConfig,
    ) -> Result<Self, CapabilityError> {
        let (version, adapter) = registry.resolve_platform(platform_version)?;
        Ok(Self::new(version, adapter, config))
    }

    pub fn version(&self) -> &VersionId {
        &self.version
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }

    pub fn config(&self) -> &CapabilityConfig {
        &self.config
    }

    pub fn locale(&self, target: &dyn CapabilityTarget) -> String {
        self.adapter.locale(target)
    }

    pub fn ping(&self, target: &dyn CapabilityTarget) -> i32 {
        self.adapter.ping(target)
    }

    pub fn send_action_bar(
        &self,
        target: &dyn CapabilityTarget,
        text: &str,
    ) -> Result<(), CapabilityError> {
        self.adapter.send_action_bar(target, text)
    }

    /// Timings are in ticks.
    pub fn send_title(
        &self,
        target: &dyn CapabilityTarget,
        title: Option<&str>,
        subtitle: Option<&str>,
        fade_in: u32,
        stay: u32,
        fade_out: u32,
    ) -> Result<(), CapabilityError> {
        let request = TitleRequest::new(title, subtitle).with_times(fade_in, stay, fade_out);
        self.adapter.send_title(target, &request)
    }

    /// Title push with the configured default timings.
    pub fn send_title_default(
        &self,
        target: &dyn CapabilityTarget,
        title: Option<&str>,
        subtitle: Option<&str>,
    ) -> Result<(), CapabilityError> {
        let mut request = TitleRequest::new(title, subtitle);
        request.times = self.config.title_defaults;
        self.adapter.send_title(target, &request)
    }

    pub fn clear_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError> {
        self.adapter.clear_title(target)
    }

    pub fn reset_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError> {
        self.adapter.reset_title(target)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("version", &self.version)
            .field("adapter", &self.adapter.name())
            .finish()
    }
}
