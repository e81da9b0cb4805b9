//! JSON text-component serialization.
use molecule_core::{ChatColor, Segment, SegmentColor, TextComponent};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonComponent<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    obfuscated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra: Vec<JsonComponent<'a>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl<'a> JsonComponent<'a> {
    fn from_segment(segment: &'a Segment, hex: bool) -> Self {
        let color = segment.color.map(|c| match c {
            SegmentColor::Named(named) => named.name().to_string(),
            SegmentColor::Hex(rgb) if hex => rgb.to_string(),
            SegmentColor::Hex(rgb) => ChatColor::nearest(rgb).name().to_string(),
        });
        let s = segment.styles;

        Self {
            text: &segment.text,
            color,
            bold: s.bold,
            italic: s.italic,
            underlined: s.underlined,
            strikethrough: s.strikethrough,
            obfuscated: s.obfuscated,
            extra: Vec::new(),
        }
    }

    fn root(extra: Vec<JsonComponent<'a>>) -> Self {
        Self {
            text: "",
            color: None,
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
            extra,
        }
    }
}

/// One segment serializes flat; several become siblings under an empty root.
pub fn to_json(component: &TextComponent, hex: bool) -> Result<String, serde_json::Error> {
    match component.segments.as_slice() {
        [] => serde_json::to_string(&JsonComponent::root(Vec::new())),
        [single] => serde_json::to_string(&JsonComponent::from_segment(single, hex)),
        many => {
            let extra = many
                .iter()
                .map(|s| JsonComponent::from_segment(s, hex))
                .collect();
            serde_json::to_string(&JsonComponent::root(extra))
        }
    }
}

/// `{"text": "<inline>"}` with codes left in the text.
pub fn to_legacy_json(inline: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonComponent {
        text: inline,
        ..JsonComponent::root(Vec::new())
    })
}
