//! Packet model: the overlay messages every adapter emits, independent of
//! how a given release lays them out on the wire.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fade/stay timings in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleTimes {
    pub fade_in: u32,
    pub stay: u32,
    pub fade_out: u32,
}

impl TitleTimes {
    pub const fn new(fade_in: u32, stay: u32, fade_out: u32) -> Self {
        Self { fade_in, stay, fade_out }
    }

    /// Wire values; the protocol carries signed int32 so large values saturate.
    pub fn to_wire(&self) -> [i32; 3] {
        [self.fade_in, self.stay, self.fade_out].map(|t| i32::try_from(t).unwrap_or(i32::MAX))
    }
}

impl Default for TitleTimes {
    fn default() -> Self {
        Self::new(10, 70, 20)
    }
}

/// The sixteen legacy named colors, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl ChatColor {
    pub const ALL: [ChatColor; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Numeric color code (`a` -> 10).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: char) -> Option<Self> {
        code.to_digit(16).map(|d| Self::ALL[d as usize])
    }

    pub fn code(self) -> char {
        std::char::from_digit(self.index() as u32, 16).unwrap_or('f')
    }

    /// Name used by the JSON text format.
    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb(0x00, 0x00, 0x00),
            Self::DarkBlue => Rgb(0x00, 0x00, 0xAA),
            Self::DarkGreen => Rgb(0x00, 0xAA, 0x00),
            Self::DarkAqua => Rgb(0x00, 0xAA, 0xAA),
            Self::DarkRed => Rgb(0xAA, 0x00, 0x00),
            Self::DarkPurple => Rgb(0xAA, 0x00, 0xAA),
            Self::Gold => Rgb(0xFF, 0xAA, 0x00),
            Self::Gray => Rgb(0xAA, 0xAA, 0xAA),
            Self::DarkGray => Rgb(0x55, 0x55, 0x55),
            Self::Blue => Rgb(0x55, 0x55, 0xFF),
            Self::Green => Rgb(0x55, 0xFF, 0x55),
            Self::Aqua => Rgb(0x55, 0xFF, 0xFF),
            Self::Red => Rgb(0xFF, 0x55, 0x55),
            Self::LightPurple => Rgb(0xFF, 0x55, 0xFF),
            Self::Yellow => Rgb(0xFF, 0xFF, 0x55),
            Self::White => Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// Closest named color by squared RGB distance.
    pub fn nearest(rgb: Rgb) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|c| c.rgb().distance(rgb))
            .unwrap_or(Self::White)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    fn distance(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2) as u32;
        d(self.0, other.0) + d(self.1, other.1) + d(self.2, other.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentColor {
    Named(ChatColor),
    Hex(Rgb),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Styles {
    pub obfuscated: bool,
    pub bold: bool,
    pub strikethrough: bool,
    pub underlined: bool,
    pub italic: bool,
}

impl Styles {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of text sharing one color and style set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<SegmentColor>,
    pub styles: Styles,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            styles: Styles::default(),
        }
    }

    pub fn is_unstyled(&self) -> bool {
        self.color.is_none() && self.styles.is_plain()
    }
}

/// Structured text carried by overlay and action-bar messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextComponent {
    pub segments: Vec<Segment>,
}

impl TextComponent {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    /// Visible text with all formatting removed.
    pub fn content(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }
}

/// Every message this layer puts on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayPacket {
    Times(TitleTimes),
    Subtitle(TextComponent),
    Title(TextComponent),
    ActionBar(TextComponent),
    /// Hide the current title; `reset` also restores default timings.
    Clear { reset: bool },
}

impl OverlayPacket {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Times(_) => "times",
            Self::Subtitle(_) => "subtitle",
            Self::Title(_) => "title",
            Self::ActionBar(_) => "action_bar",
            Self::Clear { reset: false } => "clear",
            Self::Clear { reset: true } => "reset",
        }
    }
}
