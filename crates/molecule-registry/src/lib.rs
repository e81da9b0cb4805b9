//! Molecule Registry: version ranges to capability adapters
//!
//! Each supported release range is registered once at startup with a factory
//! for its adapter. Ranges may not overlap, so any version resolves to at most
//! one adapter:
//!
//! ```text
//! "git-Spigot-... (MC: 1.9.4)" ─► VersionId 1.9.4 ─► [1.9.0, 1.10.2] ─► factory ─► bind ─► Arc<adapter>
//! ```
pub mod compat;
pub mod registry;

pub use compat::RangeTable;
pub use registry::{AdapterDescriptor, AdapterFactory, AdapterRegistry};
