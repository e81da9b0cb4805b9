//! Adapter Registry
use crate::compat::RangeTable;
use molecule_core::{CapabilityAdapter, CapabilityError, VersionId, VersionRange};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

pub type AdapterFactory = Box<dyn Fn() -> Box<dyn CapabilityAdapter> + Send + Sync>;

/// A version range and the factory for the adapter that serves it.
pub struct AdapterDescriptor {
    pub range: VersionRange,
    pub factory: AdapterFactory,
}

impl AdapterDescriptor {
    pub fn new<F>(range: VersionRange, factory: F) -> Self
    where
        F: Fn() -> Box<dyn CapabilityAdapter> + Send + Sync + 'static,
    {
        Self {
            range,
            factory: Box::new(factory),
        }
    }
}

impl fmt::Debug for AdapterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AdapterDescriptor").field("range", &self.range).finish()
    }
}

/// Maps version ranges to adapters and memoizes one bound adapter per version.
pub struct AdapterRegistry {
    table: RangeTable,
    factories: Vec<AdapterFactory>,
    resolved: RwLock<HashMap<VersionId, Arc<dyn CapabilityAdapter>>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self {
            table: RangeTable::new(),
            factories: Vec::new(),
            resolved: RwLock::new(HashMap::new()),
        }
    }

    pub fn register<F>(&mut self, range: VersionRange, factory: F) -> Result<(), CapabilityError>
    where
        F: Fn() -> Box<dyn CapabilityAdapter> + Send + Sync + 'static,
    {
        self.register_descriptor(AdapterDescriptor::new(range, factory))
    }

    pub fn register_descriptor(&mut self, descriptor: AdapterDescriptor) -> Result<(), CapabilityError> {
        let slot = self.table.insert(descriptor.range)?;
        debug_assert_eq!(slot, self.factories.len());
        self.factories.push(descriptor.factory);
        tracing::debug!(range = %descriptor.range, "registered adapter range");
        Ok(())
    }

    /// Adapter for `version`, built and bound on first use.
    pub fn resolve(&self, version: &VersionId) -> Result<Arc<dyn CapabilityAdapter>, CapabilityError> {
        if let Some(adapter) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(version)
        {
            return Ok(Arc::clone(adapter));
        }

        let slot = self
            .table
            .position(version)
            .ok_or_else(|| CapabilityError::UnsupportedVersion(version.to_string()))?;

        // Built and bound unlocked; a factory or probe may resolve other versions.
        let adapter: Arc<dyn CapabilityAdapter> = Arc::from((self.factories[slot])());
        if let Err(e) = adapter.bind(version) {
            tracing::warn!(adapter = adapter.name(), %version, error = %e, "adapter probe failed");
            return Err(e);
        }

        let mut resolved = self.resolved.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = resolved.get(version) {
            return Ok(Arc::clone(existing));
        }

        tracing::info!(
            adapter = adapter.name(),
            %version,
            range = %self.table.ranges()[slot],
            "resolved capability adapter"
        );
        resolved.insert(*version, Arc::clone(&adapter));
        Ok(adapter)
    }

    /// Parse a host version string, then [`resolve`](Self::resolve) it.
    pub fn resolve_platform(
        &self,
        raw: &str,
    ) -> Result<(VersionId, Arc<dyn CapabilityAdapter>), CapabilityError> {
        let version = VersionId::parse_platform(raw)?;
        let adapter = self.resolve(&version)?;
        Ok((version, adapter))
    }

    /// Registered ranges in registration order
    pub fn ranges(&self) -> &[VersionRange] {
        self.table.ranges()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("ranges", &self.table.ranges())
            .finish()
    }
}
