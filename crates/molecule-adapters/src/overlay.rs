//! Shared capability behavior over a release-specific wire codec.
//!
//! Releases differ in packet ids, field layout and text format, but not in
//! what a title push means. [`VersionAdapter`] owns the meaning (ordering,
//! truncation, placeholder substitution) and defers bytes to a [`WireCodec`].
use molecule_core::{
    CapabilityAdapter, CapabilityError, CapabilityTarget, Frame, OverlayPacket, TextComponent,
    TextOptions, TitleRequest, VersionId,
};
use molecule_text::TextEncoder;

/// Packet layout of one release family.
pub trait WireCodec: Send + Sync {
    /// Adapter id (ex: "v1_9")
    fn name(&self) -> &'static str;

    /// Confirm the exact release has a known layout and select it.
    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError>;

    fn encode(&self, packet: &OverlayPacket) -> Result<Frame, CapabilityError>;
}

/// A [`CapabilityAdapter`] backed by one codec.
pub struct VersionAdapter<C> {
    codec: C,
    options: TextOptions,
}

impl<C: WireCodec> VersionAdapter<C> {
    pub fn new(codec: C, options: TextOptions) -> Self {
        Self { codec, options }
    }

    /// First line of `raw`, placeholder substituted, markup parsed.
    fn line(&self, raw: &str, target: &dyn CapabilityTarget) -> TextComponent {
        let first = raw.split(|c: char| c == '\n' || c == '\r').next().unwrap_or_default();
        let substituted = if self.options.player_placeholder.is_empty() {
            first.to_string()
        } else {
            first.replace(&self.options.player_placeholder, &target.display_name())
        };
        TextEncoder::component(self.options.alternate_marker, &substituted)
    }

    /// Encode every packet before sending any, so a failed call sends nothing.
    fn emit(
        &self,
        target: &dyn CapabilityTarget,
        packets: &[OverlayPacket],
    ) -> Result<(), CapabilityError> {
        let frames = packets
            .iter()
            .map(|p| self.codec.encode(p))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(connection) = target.connection() else {
            tracing::debug!(
                adapter = self.codec.name(),
                frames = frames.len(),
                "session disconnected, dropping frames"
            );
            return Ok(());
        };

        for (packet, frame) in packets.iter().zip(frames) {
            tracing::debug!(
                adapter = self.codec.name(),
                kind = packet.kind(),
                packet_id = frame.packet_id,
                bytes = frame.payload.len(),
                "sending frame"
            );
            connection.send(frame);
        }
        Ok(())
    }
}

impl<C: WireCodec> CapabilityAdapter for VersionAdapter<C> {
    fn name(&self) -> &'static str {
        self.codec.name()
    }

    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError> {
        self.codec.bind(version)
    }

    fn send_action_bar(
        &self,
        target: &dyn CapabilityTarget,
        text: &str,
    ) -> Result<(), CapabilityError> {
        if text.is_empty() && self.options.skip_empty_action_bar {
            return Ok(());
        }
        let component = TextEncoder::component(self.options.alternate_marker, text);
        self.emit(target, &[OverlayPacket::ActionBar(component)])
    }

    fn send_title(
        &self,
        target: &dyn CapabilityTarget,
        request: &TitleRequest,
    ) -> Result<(), CapabilityError> {
        let mut packets = vec![OverlayPacket::Times(request.times)];
        if let Some(subtitle) = &request.subtitle {
            packets.push(OverlayPacket::Subtitle(self.line(subtitle, target)));
        }
        if let Some(title) = &request.title {
            packets.push(OverlayPacket::Title(self.line(title, target)));
        }
        self.emit(target, &packets)
    }

    fn clear_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError> {
        self.emit(target, &[OverlayPacket::Clear { reset: false }])
    }

    fn reset_title(&self, target: &dyn CapabilityTarget) -> Result<(), CapabilityError> {
        self.emit(target, &[OverlayPacket::Clear { reset: true }])
    }
}

/// Error for a release inside a registered range that has no layout table.
pub(crate) fn unknown_release(adapter: &str, version: &VersionId) -> CapabilityError {
    CapabilityError::AdapterInitialization {
        adapter: adapter.to_string(),
        reason: format!("no packet layout for release {}", version),
    }
}

/// Error for encoding through a codec whose `bind` never ran.
pub(crate) fn unbound(adapter: &str) -> CapabilityError {
    CapabilityError::PacketEncoding(format!("{} used before bind", adapter))
}
