//! Process-wide capability dispatch.
//!
//! Startup runs once per process: logging, version detection, adapter
//! resolution, then the resulting [`Dispatcher`] is installed in a global
//! slot that callers reach through [`global`].
//!
//! ```no_run
//! use molecule_core::CapabilityConfig;
//!
//! let dispatcher = molecule_dispatch::initialize("git-Paper-1 (MC: 1.12.2)", CapabilityConfig::default())?;
//! assert_eq!(dispatcher.adapter_name(), "v1_11");
//! # Ok::<(), molecule_core::CapabilityError>(())
//! ```
pub mod dispatcher;
pub mod logging;

pub use dispatcher::Dispatcher;
pub use logging::init_logging;

use molecule_core::{CapabilityConfig, CapabilityError, MOLECULE_VERSION};
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<Dispatcher> = OnceCell::new();

/// Install `dispatcher` as the process-wide instance. There is no hot-swap:
/// a second install fails.
pub fn install(dispatcher: Dispatcher) -> Result<&'static Dispatcher, CapabilityError> {
    let adapter = dispatcher.adapter_name();
    GLOBAL
        .set(dispatcher)
        .map_err(|_| CapabilityError::AdapterInitialization {
            adapter: adapter.to_string(),
            reason: "a dispatcher is already installed".to_string(),
        })?;
    global()
}

/// The installed dispatcher.
pub fn global() -> Result<&'static Dispatcher, CapabilityError> {
    GLOBAL.get().ok_or(CapabilityError::NotInitialized)
}

/// Full startup sequence for a host reporting `platform_version`.
///
/// Every error returned here is fatal: the host should refuse to enable
/// capability calls.
pub fn initialize(
    platform_version: &str,
    config: CapabilityConfig,
) -> Result<&'static Dispatcher, CapabilityError> {
    init_logging(&config.logging)?;
    tracing::info!(version = MOLECULE_VERSION, platform = platform_version, "starting capability layer");

    let dispatcher = build(platform_version, config).map_err(|e| {
        tracing::error!(platform = platform_version, error = %e, "capability layer disabled");
        e
    })?;
    let dispatcher = install(dispatcher)?;

    tracing::info!(
        version = %dispatcher.version(),
        adapter = dispatcher.adapter_name(),
        "capability layer ready"
    );
    Ok(dispatcher)
}

/// Resolve a dispatcher against the built-in adapters without installing it.
pub fn build(platform_version: &str, config: CapabilityConfig) -> Result<Dispatcher, CapabilityError> {
    let registry = molecule_adapters::builtin_registry(&config.text)?;
    Dispatcher::from_registry(&registry, platform_version, config)
}
