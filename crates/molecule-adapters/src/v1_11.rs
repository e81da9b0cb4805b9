//! 1.11 through 1.16.x (protocols 315-754)
//!
//! The action bar became a title action and the action ids shifted by one.
//! The title packet id moves between releases, so `bind` picks the exact
//! release's id from [`RELEASES`].
use crate::overlay::{unbound, unknown_release, WireCodec};
use crate::v1_8::times_fields;
use molecule_core::wire::{MAX_CHAT_LEN_LEGACY, MAX_CHAT_LEN_MODERN};
use molecule_core::{CapabilityError, Frame, OverlayPacket, PacketWriter, TextComponent, VersionId};
use molecule_text::{TextEncoder, TextFormat};
use once_cell::sync::OnceCell;

pub const NAME: &str = "v1_11";

mod action {
    pub const TITLE: i32 = 0;
    pub const SUBTITLE: i32 = 1;
    pub const ACTION_BAR: i32 = 2;
    pub const TIMES: i32 = 3;
    pub const CLEAR: i32 = 4;
    pub const RESET: i32 = 5;
}

/// (minor, patch, protocol, title packet id)
pub const RELEASES: &[(u32, u32, i32, i32)] = &[
    (11, 0, 315, 0x45),
    (11, 1, 316, 0x45),
    (11, 2, 316, 0x45),
    (12, 0, 335, 0x47),
    (12, 1, 338, 0x48),
    (12, 2, 340, 0x48),
    (13, 0, 393, 0x4B),
    (13, 1, 401, 0x4B),
    (13, 2, 404, 0x4B),
    (14, 0, 477, 0x4F),
    (14, 1, 480, 0x4F),
    (14, 2, 485, 0x4F),
    (14, 3, 490, 0x4F),
    (14, 4, 498, 0x4F),
    (15, 0, 573, 0x50),
    (15, 1, 575, 0x50),
    (15, 2, 578, 0x50),
    (16, 0, 735, 0x4F),
    (16, 1, 736, 0x4F),
    (16, 2, 751, 0x4F),
    (16, 3, 753, 0x4F),
    (16, 4, 754, 0x4F),
    (16, 5, 754, 0x4F),
];

/// Wire facts for the bound release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub protocol: i32,
    pub title_packet: i32,
    pub format: TextFormat,
    pub max_len: usize,
}

impl Layout {
    fn for_release(version: &VersionId) -> Option<Self> {
        if version.major != 1 {
            return None;
        }
        RELEASES
            .iter()
            .find(|(minor, patch, _, _)| *minor == version.minor && *patch == version.patch)
            .map(|&(minor, _, protocol, title_packet)| Self {
                protocol,
                title_packet,
                format: if minor >= 16 { TextFormat::JsonHex } else { TextFormat::Json },
                max_len: if minor >= 13 { MAX_CHAT_LEN_MODERN } else { MAX_CHAT_LEN_LEGACY },
            })
    }

    fn component(
        &self,
        writer: PacketWriter,
        component: &TextComponent,
    ) -> Result<PacketWriter, CapabilityError> {
        let json = TextEncoder::new(self.format, self.max_len).serialize(component)?;
        writer.string(&json, self.max_len)
    }
}

#[derive(Debug, Default)]
pub struct V1_11Codec {
    layout: OnceCell<Layout>,
}

impl V1_11Codec {
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.get()
    }
}

impl WireCodec for V1_11Codec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError> {
        let layout = Layout::for_release(version).ok_or_else(|| unknown_release(NAME, version))?;
        let bound = self.layout.get_or_init(|| layout);
        if *bound != layout {
            return Err(CapabilityError::AdapterInitialization {
                adapter: NAME.to_string(),
                reason: format!("already bound to protocol {}", bound.protocol),
            });
        }
        tracing::debug!(
            %version,
            protocol = layout.protocol,
            title_packet = layout.title_packet,
            "bound title layout"
        );
        Ok(())
    }

    fn encode(&self, packet: &OverlayPacket) -> Result<Frame, CapabilityError> {
        let layout = self.layout.get().ok_or_else(|| unbound(NAME))?;
        let writer = PacketWriter::new(layout.title_packet);

        let frame = match packet {
            OverlayPacket::Title(component) => {
                layout.component(writer.varint(action::TITLE), component)?.finish()
            }
            OverlayPacket::Subtitle(component) => {
                layout.component(writer.varint(action::SUBTITLE), component)?.finish()
            }
            OverlayPacket::ActionBar(component) => {
                layout.component(writer.varint(action::ACTION_BAR), component)?.finish()
            }
            OverlayPacket::Times(times) => times_fields(writer.varint(action::TIMES), times).finish(),
            OverlayPacket::Clear { reset: false } => writer.varint(action::CLEAR).finish(),
            OverlayPacket::Clear { reset: true } => writer.varint(action::RESET).finish(),
        };
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molecule_core::TitleTimes;

    fn bound(minor: u32, patch: u32) -> V1_11Codec {
        let codec = V1_11Codec::default();
        codec.bind(&VersionId::new(1, minor, patch)).unwrap();
        codec
    }

    #[test]
    fn test_packet_id_follows_release() {
        assert_eq!(bound(11, 2).layout().unwrap().title_packet, 0x45);
        assert_eq!(bound(12, 0).layout().unwrap().title_packet, 0x47);
        assert_eq!(bound(12, 2).layout().unwrap().title_packet, 0x48);
        assert_eq!(bound(13, 2).layout().unwrap().title_packet, 0x4B);
        assert_eq!(bound(15, 1).layout().unwrap().title_packet, 0x50);
        assert_eq!(bound(16, 5).layout().unwrap().protocol, 754);
    }

    #[test]
    fn test_unknown_patch_fails_bind() {
        let err = V1_11Codec::default().bind(&VersionId::new(1, 11, 3)).unwrap_err();
        assert!(matches!(err, CapabilityError::AdapterInitialization { .. }));
    }

    #[test]
    fn test_encode_before_bind() {
        let err = V1_11Codec::default()
            .encode(&OverlayPacket::Clear { reset: false })
            .unwrap_err();
        assert!(matches!(err, CapabilityError::PacketEncoding(_)));
    }

    #[test]
    fn test_times_action_shifted() {
        let frame = bound(12, 2)
            .encode(&OverlayPacket::Times(TitleTimes::new(5, 5, 5)))
            .unwrap();
        assert_eq!(frame.packet_id, 0x48);
        assert_eq!(&frame.payload[..], &[0x03, 0, 0, 0, 5, 0, 0, 0, 5, 0, 0, 0, 5]);
    }

    #[test]
    fn test_hex_only_from_1_16() {
        let component = TextEncoder::component('&', "&x&1&2&3&4&5&6Hex");

        let mut old = bound(15, 2)
            .encode(&OverlayPacket::ActionBar(component.clone()))
            .unwrap()
            .reader();
        assert_eq!(old.varint().unwrap(), 2);
        assert!(!old.string().unwrap().contains('#'));

        let mut new = bound(16, 4)
            .encode(&OverlayPacket::ActionBar(component))
            .unwrap()
            .reader();
        assert_eq!(new.varint().unwrap(), 2);
        assert_eq!(new.string().unwrap(), r##"{"text":"Hex","color":"#123456"}"##);
    }
}
