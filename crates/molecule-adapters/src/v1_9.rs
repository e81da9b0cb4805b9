//! 1.9 through 1.10.x (protocols 107-210)
//!
//! Same title layout as 1.8; the chat packet moved and the action bar
//! renders structured colors.
use crate::overlay::{unknown_release, WireCodec};
use crate::v1_8::{encode_title_action, POSITION_ACTION_BAR, TITLE_TEXT};
use molecule_core::wire::MAX_CHAT_LEN_LEGACY;
use molecule_core::{CapabilityError, Frame, OverlayPacket, PacketWriter, VersionId};

pub const NAME: &str = "v1_9";

const CHAT: i32 = 0x0F;
const TITLE: i32 = 0x45;

#[derive(Debug, Default)]
pub struct V1_9Codec;

impl WireCodec for V1_9Codec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError> {
        match (version.major, version.minor, version.patch) {
            (1, 9, 0..=4) | (1, 10, 0..=2) => Ok(()),
            _ => Err(unknown_release(NAME, version)),
        }
    }

    fn encode(&self, packet: &OverlayPacket) -> Result<Frame, CapabilityError> {
        match packet {
            OverlayPacket::ActionBar(component) => Ok(PacketWriter::new(CHAT)
                .string(&TITLE_TEXT.serialize(component)?, MAX_CHAT_LEN_LEGACY)?
                .byte(POSITION_ACTION_BAR)
                .finish()),
            other => encode_title_action(TITLE, other),
        }
    }
}
