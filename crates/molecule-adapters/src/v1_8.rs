//! 1.8.x (protocol 47)
//!
//! Action bar rides the chat packet at position 2. The 1.8 client ignores
//! structured colors there, so the action bar text keeps its codes inline.
//! Titles use one packet with an action discriminator.
use crate::overlay::{unknown_release, WireCodec};
use molecule_core::wire::MAX_CHAT_LEN_LEGACY;
use molecule_core::{CapabilityError, Frame, OverlayPacket, PacketWriter, TitleTimes, VersionId};
use molecule_text::{TextEncoder, TextFormat};

pub const NAME: &str = "v1_8";

const CHAT: i32 = 0x02;
const TITLE: i32 = 0x45;

/// Chat position byte for the action bar slot
pub(crate) const POSITION_ACTION_BAR: u8 = 2;

/// Title actions shared by 1.8 through 1.10
mod action {
    pub const TITLE: i32 = 0;
    pub const SUBTITLE: i32 = 1;
    pub const TIMES: i32 = 2;
    pub const CLEAR: i32 = 3;
    pub const RESET: i32 = 4;
}

const ACTION_BAR_TEXT: TextEncoder = TextEncoder::new(TextFormat::Legacy, MAX_CHAT_LEN_LEGACY);
pub(crate) const TITLE_TEXT: TextEncoder = TextEncoder::new(TextFormat::Json, MAX_CHAT_LEN_LEGACY);

#[derive(Debug, Default)]
pub struct V1_8Codec;

impl WireCodec for V1_8Codec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError> {
        match (version.major, version.minor, version.patch) {
            (1, 8, 0..=9) => Ok(()),
            _ => Err(unknown_release(NAME, version)),
        }
    }

    fn encode(&self, packet: &OverlayPacket) -> Result<Frame, CapabilityError> {
        match packet {
            OverlayPacket::ActionBar(component) => Ok(PacketWriter::new(CHAT)
                .string(&ACTION_BAR_TEXT.serialize(component)?, MAX_CHAT_LEN_LEGACY)?
                .byte(POSITION_ACTION_BAR)
                .finish()),
            other => encode_title_action(TITLE, other),
        }
    }
}

/// Title packet layout used from 1.8 through 1.10.
pub(crate) fn encode_title_action(
    packet_id: i32,
    packet: &OverlayPacket,
) -> Result<Frame, CapabilityError> {
    let writer = PacketWriter::new(packet_id);
    let frame = match packet {
        OverlayPacket::Title(component) => writer
            .varint(action::TITLE)
            .string(&TITLE_TEXT.serialize(component)?, MAX_CHAT_LEN_LEGACY)?
            .finish(),
        OverlayPacket::Subtitle(component) => writer
            .varint(action::SUBTITLE)
            .string(&TITLE_TEXT.serialize(component)?, MAX_CHAT_LEN_LEGACY)?
            .finish(),
        OverlayPacket::Times(times) => times_fields(writer.varint(action::TIMES), times).finish(),
        OverlayPacket::Clear { reset: false } => writer.varint(action::CLEAR).finish(),
        OverlayPacket::Clear { reset: true } => writer.varint(action::RESET).finish(),
        OverlayPacket::ActionBar(_) => {
            return Err(CapabilityError::PacketEncoding(
                "action bar is not a title action before 1.11".to_string(),
            ))
        }
    };
    Ok(frame)
}

/// `fadeIn`, `stay`, `fadeOut` as three int32 fields.
pub(crate) fn times_fields(writer: PacketWriter, times: &TitleTimes) -> PacketWriter {
    let [fade_in, stay, fade_out] = times.to_wire();
    writer.int(fade_in).int(stay).int(fade_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use molecule_core::TextComponent;

    #[test]
    fn test_bind_known_releases() {
        assert!(V1_8Codec.bind(&VersionId::new(1, 8, 8)).is_ok());
        assert!(V1_8Codec.bind(&VersionId::new(1, 8, 10)).is_err());
    }

    #[test]
    fn test_times_bytes() {
        let frame = V1_8Codec
            .encode(&OverlayPacket::Times(TitleTimes::new(10, 70, 20)))
            .unwrap();
        assert_eq!(frame.packet_id, 0x45);
        assert_eq!(
            &frame.payload[..],
            &[0x02, 0, 0, 0, 10, 0, 0, 0, 70, 0, 0, 0, 20]
        );
    }

    #[test]
    fn test_action_bar_keeps_codes_inline() {
        let component = TextEncoder::component('&', "&aHello");
        let frame = V1_8Codec.encode(&OverlayPacket::ActionBar(component)).unwrap();
        assert_eq!(frame.packet_id, 0x02);

        let mut reader = frame.reader();
        assert_eq!(reader.string().unwrap(), "{\"text\":\"\u{a7}aHello\"}");
        assert_eq!(reader.byte().unwrap(), POSITION_ACTION_BAR);
    }

    #[test]
    fn test_clear_and_reset() {
        let clear = V1_8Codec.encode(&OverlayPacket::Clear { reset: false }).unwrap();
        let reset = V1_8Codec.encode(&OverlayPacket::Clear { reset: true }).unwrap();
        assert_eq!(&clear.payload[..], &[0x03]);
        assert_eq!(&reset.payload[..], &[0x04]);
        assert!(encode_title_action(TITLE, &OverlayPacket::ActionBar(TextComponent::plain("x"))).is_err());
    }
}
