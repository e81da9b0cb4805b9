//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("REGISTRY/OVERLAP: range {new} intersects registered range {existing}")]
    OverlappingRange { existing: String, new: String },

    #[error("REGISTRY/RANGE: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    #[error("VERSION/UNSUPPORTED: {0}")]
    UnsupportedVersion(String),

    #[error("ADAPTER/INIT: {adapter}: {reason}")]
    AdapterInitialization { adapter: String, reason: String },

    #[error("PACKET/ENCODE: {0}")]
    PacketEncoding(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("DISPATCH/UNINIT: capability layer has not been initialized")]
    NotInitialized,
}

impl CapabilityError {
    /// Startup errors stop the host; per-call errors go back to the caller.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::PacketEncoding(_) | Self::NotInitialized)
    }
}
