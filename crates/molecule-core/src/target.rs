//! Typed view of one connected session, supplied by the host.
//!
//! Adapters never own a session; they read through this view and hand frames
//! to its outbound connection for the duration of a single call.
use crate::wire::Frame;

/// Outbound side of a session's network handle.
///
/// Delivery is the host's concern; `send` returns immediately.
pub trait Connection {
    fn send(&self, frame: Frame);
}

/// A connected session ("a player").
pub trait CapabilityTarget {
    /// Name substituted for the player placeholder.
    fn display_name(&self) -> String;

    /// Locale tag from the client's settings packet, if one arrived yet.
    fn locale(&self) -> Option<String>;

    /// Last measured round-trip latency in milliseconds.
    fn latency(&self) -> Option<i32>;

    /// `None` once the session has disconnected.
    fn connection(&self) -> Option<&dyn Connection>;
}
