//! Molecule Text: legacy color markup to per-release text components
//!
//! Callers write `&aHello`; each release wants something different on the
//! wire. The pipeline is:
//!
//! ```text
//! raw ──► translate_alternate_codes ──► legacy::parse ──► TextComponent
//!                                                              │
//!                          TextFormat::{Legacy, Json, JsonHex} ◄┘
//!                                                              │
//!                                                   serialized JSON string
//! ```
//!
//! # Example
//!
//! ```
//! use molecule_text::{TextEncoder, TextFormat};
//!
//! let encoder = TextEncoder::new(TextFormat::Json, 32767);
//! let json = encoder.encode('&', "&aHello").unwrap();
//! assert_eq!(json, r#"{"text":"Hello","color":"green"}"#);
//! ```

pub mod json;
pub mod legacy;

use molecule_core::{CapabilityError, TextComponent};

pub use legacy::{strip_codes, translate_alternate_codes, SECTION};

/// Serialized text-object shape a release understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// `{"text":"§aHello"}`: codes stay inline
    Legacy,
    /// Structured colors, hex downsampled to named colors
    Json,
    /// Structured colors with `#rrggbb` hex support
    JsonHex,
}

/// Encoder bound to one release's text format and string limit.
#[derive(Debug, Clone, Copy)]
pub struct TextEncoder {
    format: TextFormat,
    max_len: usize,
}

impl TextEncoder {
    pub const fn new(format: TextFormat, max_len: usize) -> Self {
        Self { format, max_len }
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    /// Parse raw caller text into a component.
    pub fn component(marker: char, raw: &str) -> TextComponent {
        legacy::parse(&translate_alternate_codes(marker, raw))
    }

    /// Serialize a component in this encoder's format.
    pub fn serialize(&self, component: &TextComponent) -> Result<String, CapabilityError> {
        let json = match self.format {
            TextFormat::Legacy => json::to_legacy_json(&legacy::render(component)),
            TextFormat::Json => json::to_json(component, false),
            TextFormat::JsonHex => json::to_json(component, true),
        }
        .map_err(|e| CapabilityError::PacketEncoding(e.to_string()))?;

        let units = json.encode_utf16().count();
        if units > self.max_len {
            return Err(CapabilityError::PacketEncoding(format!(
                "component of {} units exceeds limit {}",
                units, self.max_len
            )));
        }

        Ok(json)
    }

    pub fn encode(&self, marker: char, raw: &str) -> Result<String, CapabilityError> {
        self.serialize(&Self::component(marker, raw))
    }
}
