//! 1.17 through 1.18.x (protocols 755-758)
//!
//! The combined title packet was split into one packet per action. 1.18
//! inserted Update Simulation Distance at 0x57, shifting the subtitle, title
//! and animation ids up by one, so `bind` selects the id set per release.
use crate::overlay::{unbound, unknown_release, WireCodec};
use crate::v1_8::times_fields;
use molecule_core::wire::MAX_CHAT_LEN_MODERN;
use molecule_core::{CapabilityError, Frame, OverlayPacket, PacketWriter, TextComponent, VersionId};
use molecule_text::{TextEncoder, TextFormat};
use once_cell::sync::OnceCell;

pub const NAME: &str = "v1_17";

const TEXT: TextEncoder = TextEncoder::new(TextFormat::JsonHex, MAX_CHAT_LEN_MODERN);

/// Split title packet ids of one protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketIds {
    pub protocol: i32,
    pub clear_titles: i32,
    pub action_bar: i32,
    pub subtitle: i32,
    pub title: i32,
    pub animation: i32,
}

const IDS_1_17: PacketIds = PacketIds {
    protocol: 0,
    clear_titles: 0x10,
    action_bar: 0x41,
    subtitle: 0x57,
    title: 0x59,
    animation: 0x5A,
};

const IDS_1_18: PacketIds = PacketIds {
    protocol: 0,
    clear_titles: 0x10,
    action_bar: 0x41,
    subtitle: 0x58,
    title: 0x5A,
    animation: 0x5B,
};

/// (minor, patch, protocol)
pub const RELEASES: &[(u32, u32, i32)] = &[
    (17, 0, 755),
    (17, 1, 756),
    (18, 0, 757),
    (18, 1, 757),
    (18, 2, 758),
];

impl PacketIds {
    fn for_release(version: &VersionId) -> Option<Self> {
        if version.major != 1 {
            return None;
        }
        RELEASES
            .iter()
            .find(|(minor, patch, _)| *minor == version.minor && *patch == version.patch)
            .map(|&(minor, _, protocol)| {
                let ids = if minor >= 18 { IDS_1_18 } else { IDS_1_17 };
                Self { protocol, ..ids }
            })
    }
}

#[derive(Debug, Default)]
pub struct V1_17Codec {
    ids: OnceCell<PacketIds>,
}

impl V1_17Codec {
    pub fn ids(&self) -> Option<&PacketIds> {
        self.ids.get()
    }
}

fn chat(packet_id: i32, component: &TextComponent) -> Result<Frame, CapabilityError> {
    Ok(PacketWriter::new(packet_id)
        .string(&TEXT.serialize(component)?, MAX_CHAT_LEN_MODERN)?
        .finish())
}

impl WireCodec for V1_17Codec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bind(&self, version: &VersionId) -> Result<(), CapabilityError> {
        let ids = PacketIds::for_release(version).ok_or_else(|| unknown_release(NAME, version))?;
        let bound = self.ids.get_or_init(|| ids);
        if *bound != ids {
            return Err(CapabilityError::AdapterInitialization {
                adapter: NAME.to_string(),
                reason: format!("already bound to protocol {}", bound.protocol),
            });
        }
        tracing::debug!(%version, protocol = ids.protocol, title_packet = ids.title, "bound title packet ids");
        Ok(())
    }

    fn encode(&self, packet: &OverlayPacket) -> Result<Frame, CapabilityError> {
        let ids = self.ids.get().ok_or_else(|| unbound(NAME))?;
        match packet {
            OverlayPacket::ActionBar(component) => chat(ids.action_bar, component),
            OverlayPacket::Subtitle(component) => chat(ids.subtitle, component),
            OverlayPacket::Title(component) => chat(ids.title, component),
            OverlayPacket::Times(times) => {
                Ok(times_fields(PacketWriter::new(ids.animation), times).finish())
            }
            OverlayPacket::Clear { reset } => {
                Ok(PacketWriter::new(ids.clear_titles).boolean(*reset).finish())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molecule_core::TitleTimes;

    fn bound(minor: u32, patch: u32) -> V1_17Codec {
        let codec = V1_17Codec::default();
        codec.bind(&VersionId::new(1, minor, patch)).unwrap();
        codec
    }

    #[test]
    fn test_split_packets() {
        let codec = bound(17, 1);
        let times = codec
            .encode(&OverlayPacket::Times(TitleTimes::default()))
            .unwrap();
        assert_eq!(times.packet_id, 0x5A);
        assert_eq!(&times.payload[..], &[0, 0, 0, 10, 0, 0, 0, 70, 0, 0, 0, 20]);

        let title = codec
            .encode(&OverlayPacket::Title(TextComponent::plain("Hi")))
            .unwrap();
        assert_eq!(title.packet_id, 0x59);
        assert_eq!(title.reader().string().unwrap(), r#"{"text":"Hi"}"#);

        let reset = codec.encode(&OverlayPacket::Clear { reset: true }).unwrap();
        assert_eq!(reset.packet_id, 0x10);
        assert_eq!(&reset.payload[..], &[0x01]);
    }

    #[test]
    fn test_ids_shift_in_1_18() {
        let old = bound(17, 1);
        let new = bound(18, 0);
        assert_eq!(old.ids().unwrap().protocol, 756);
        assert_eq!(new.ids().unwrap().protocol, 757);

        let subtitle = OverlayPacket::Subtitle(TextComponent::plain("Sub"));
        assert_eq!(old.encode(&subtitle).unwrap().packet_id, 0x57);
        assert_eq!(new.encode(&subtitle).unwrap().packet_id, 0x58);

        let times = OverlayPacket::Times(TitleTimes::default());
        assert_eq!(old.encode(&times).unwrap().packet_id, 0x5A);
        assert_eq!(new.encode(&times).unwrap().packet_id, 0x5B);

        let bar = OverlayPacket::ActionBar(TextComponent::plain("Bar"));
        assert_eq!(old.encode(&bar).unwrap().packet_id, 0x41);
        assert_eq!(new.encode(&bar).unwrap().packet_id, 0x41);
    }

    #[test]
    fn test_bind_range() {
        assert!(V1_17Codec::default().bind(&VersionId::new(1, 18, 2)).is_ok());
        assert!(V1_17Codec::default().bind(&VersionId::new(1, 17, 2)).is_err());
    }

    #[test]
    fn test_encode_before_bind() {
        let err = V1_17Codec::default()
            .encode(&OverlayPacket::Clear { reset: false })
            .unwrap_err();
        assert!(matches!(err, CapabilityError::PacketEncoding(_)));
    }
}
