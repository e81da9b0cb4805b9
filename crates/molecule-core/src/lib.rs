//! Molecule Core: capability contract, version model and packet model
//!
//! Shared vocabulary for every release-specific adapter: what a version is,
//! what an overlay packet is, and what a session looks like to an adapter.

pub mod adapter;
pub mod config;
pub mod error;
pub mod packet;
pub mod target;
pub mod version;
pub mod wire;

pub use adapter::{CapabilityAdapter, TitleRequest};
pub use config::{CapabilityConfig, LoggingConfig, TextOptions};
pub use error::CapabilityError;
pub use packet::{ChatColor, OverlayPacket, Rgb, Segment, SegmentColor, Styles, TextComponent, TitleTimes};
pub use target::{CapabilityTarget, Connection};
pub use version::{VersionId, VersionRange};
pub use wire::{Frame, PacketReader, PacketWriter};

/// Molecule capability layer version
pub const MOLECULE_VERSION: &str = "1.0.0";
