//! Legacy color markup.
//!
//! Handles the section-sign code format:
//! - `&a` style alternate markers normalized to `§a`
//! - color codes `0-9a-f` (reset any active styles)
//! - style codes `k l m n o`, reset `r`
//! - hex runs `§x§R§R§G§G§B§B`
//!
//! Anything that is not a recognized code stays in the text as typed.

use molecule_core::{ChatColor, Rgb, Segment, SegmentColor, Styles, TextComponent};

/// Canonical marker
pub const SECTION: char = '\u{00A7}';

/// Characters that may follow a marker
const CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replace `marker` with the section sign wherever it precedes a known code.
pub fn translate_alternate_codes(marker: char, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match chars.get(i + 1) {
            Some(&code)
                if c == marker
                    && CODES.contains(code)
                    && (!code.eq_ignore_ascii_case(&'x') || is_hex_run(&chars[i + 2..], marker)) =>
            {
                result.push(SECTION);
                result.push(code.to_ascii_lowercase());
                i += 2;
            }
            _ => {
                result.push(c);
                i += 1;
            }
        }
    }

    result
}

/// Six `<marker><hex digit>` pairs, the tail of a hex color run.
fn is_hex_run(chars: &[char], marker: char) -> bool {
    chars.len() >= 12
        && chars[..12]
            .chunks(2)
            .all(|pair| pair[0] == marker && pair[1].is_ascii_hexdigit())
}

/// Remove every recognized code, leaving the visible text.
pub fn strip_codes(text: &str) -> String {
    parse(text).content()
}

/// Parse section-sign markup into styled segments.
pub fn parse(text: &str) -> TextComponent {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut color: Option<SegmentColor> = None;
    let mut styles = Styles::default();
    let mut i = 0;

    let mut flush = |buffer: &mut String, color: Option<SegmentColor>, styles: Styles| {
        if !buffer.is_empty() {
            segments.push(Segment {
                text: std::mem::take(buffer),
                color,
                styles,
            });
        }
    };

    while i < chars.len() {
        let c = chars[i];
        let code = chars.get(i + 1).map(|c| c.to_ascii_lowercase());

        if c != SECTION || code.is_none() {
            buffer.push(c);
            i += 1;
            continue;
        }

        match code.unwrap_or_default() {
            d if d.is_ascii_hexdigit() => {
                flush(&mut buffer, color, styles);
                color = ChatColor::from_code(d).map(SegmentColor::Named);
                styles = Styles::default();
                i += 2;
            }
            s @ ('k' | 'l' | 'm' | 'n' | 'o') => {
                flush(&mut buffer, color, styles);
                match s {
                    'k' => styles.obfuscated = true,
                    'l' => styles.bold = true,
                    'm' => styles.strikethrough = true,
                    'n' => styles.underlined = true,
                    _ => styles.italic = true,
                }
                i += 2;
            }
            'r' => {
                flush(&mut buffer, color, styles);
                color = None;
                styles = Styles::default();
                i += 2;
            }
            'x' => match read_hex_run(&chars[i + 2..]) {
                Some(rgb) => {
                    flush(&mut buffer, color, styles);
                    color = Some(SegmentColor::Hex(rgb));
                    styles = Styles::default();
                    i += 14;
                }
                None => {
                    buffer.push(c);
                    i += 1;
                }
            },
            _ => {
                buffer.push(c);
                i += 1;
            }
        }
    }
    flush(&mut buffer, color, styles);

    if segments.is_empty() {
        return TextComponent::plain("");
    }
    TextComponent { segments }
}

/// Six `§h` pairs following `§x`.
fn read_hex_run(chars: &[char]) -> Option<Rgb> {
    if chars.len() < 12 {
        return None;
    }
    let mut digits = [0u8; 6];
    for (n, pair) in chars[..12].chunks(2).enumerate() {
        if pair[0] != SECTION {
            return None;
        }
        digits[n] = pair[1].to_digit(16)? as u8;
    }
    Some(Rgb(
        digits[0] << 4 | digits[1],
        digits[2] << 4 | digits[3],
        digits[4] << 4 | digits[5],
    ))
}

/// Re-emit a component as inline section-sign markup. Hex colors fall back
/// to the nearest named color.
pub fn render(component: &TextComponent) -> String {
    let mut out = String::new();
    let mut previous_styled = false;

    for segment in &component.segments {
        match segment.color {
            Some(SegmentColor::Named(c)) => push_code(&mut out, c.code()),
            Some(SegmentColor::Hex(rgb)) => push_code(&mut out, ChatColor::nearest(rgb).code()),
            None if previous_styled => push_code(&mut out, 'r'),
            None => {}
        }

        let s = segment.styles;
        for (on, code) in [
            (s.obfuscated, 'k'),
            (s.bold, 'l'),
            (s.strikethrough, 'm'),
            (s.underlined, 'n'),
            (s.italic, 'o'),
        ] {
            if on {
                push_code(&mut out, code);
            }
        }

        out.push_str(&segment.text);
        previous_styled = !segment.is_unstyled();
    }

    out
}

fn push_code(out: &mut String, code: char) {
    out.push(SECTION);
    out.push(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_codes() {
        assert_eq!(translate_alternate_codes('&', "&aHello"), "\u{a7}aHello");
        assert_eq!(translate_alternate_codes('&', "&LBold"), "\u{a7}lBold");
        assert_eq!(translate_alternate_codes('$', "$cRed"), "\u{a7}cRed");
    }

    #[test]
    fn test_translate_leaves_unknown() {
        assert_eq!(translate_alternate_codes('&', "Tom & Jerry"), "Tom & Jerry");
        assert_eq!(translate_alternate_codes('&', "&zfoo"), "&zfoo");
        assert_eq!(translate_alternate_codes('&', "trailing&"), "trailing&");
    }

    #[test]
    fn test_translate_incomplete_hex_run_left_alone() {
        assert_eq!(translate_alternate_codes('&', "Tom &xyz"), "Tom &xyz");
        assert_eq!(translate_alternate_codes('&', "&x&1&2&3"), "&x\u{a7}1\u{a7}2\u{a7}3");
        assert_eq!(
            translate_alternate_codes('&', "&X&a&b&c&d&e&fHi"),
            "\u{a7}x\u{a7}a\u{a7}b\u{a7}c\u{a7}d\u{a7}e\u{a7}fHi"
        );
    }

    #[test]
    fn test_parse_colors_and_styles() {
        let component = parse("\u{a7}aGreen \u{a7}lBold\u{a7}r plain");
        assert_eq!(component.segments.len(), 3);
        assert_eq!(component.segments[0].color, Some(SegmentColor::Named(ChatColor::Green)));
        assert!(!component.segments[0].styles.bold);
        assert_eq!(component.segments[1].color, Some(SegmentColor::Named(ChatColor::Green)));
        assert!(component.segments[1].styles.bold);
        assert!(component.segments[2].is_unstyled());
        assert_eq!(component.content(), "Green Bold plain");
    }

    #[test]
    fn test_color_resets_styles() {
        let component = parse("\u{a7}lA\u{a7}cB");
        assert!(component.segments[0].styles.bold);
        assert!(!component.segments[1].styles.bold);
    }

    #[test]
    fn test_hex_run() {
        let component = parse("\u{a7}x\u{a7}f\u{a7}f\u{a7}8\u{a7}0\u{a7}0\u{a7}0Orange");
        assert_eq!(component.segments.len(), 1);
        assert_eq!(
            component.segments[0].color,
            Some(SegmentColor::Hex(Rgb(0xFF, 0x80, 0x00)))
        );
        assert_eq!(component.content(), "Orange");
    }

    #[test]
    fn test_unknown_markers_literal() {
        assert_eq!(strip_codes("\u{a7}zabc"), "\u{a7}zabc");
        assert_eq!(strip_codes("end\u{a7}"), "end\u{a7}");
        assert_eq!(strip_codes("\u{a7}x\u{a7}zshort"), "\u{a7}x\u{a7}zshort");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), TextComponent::plain(""));
        assert_eq!(parse("\u{a7}a"), TextComponent::plain(""));
    }

    #[test]
    fn test_render_inline() {
        let component = parse("\u{a7}aHi \u{a7}lthere\u{a7}r!");
        assert_eq!(render(&component), "\u{a7}aHi \u{a7}a\u{a7}lthere\u{a7}r!");
        assert_eq!(strip_codes(&render(&component)), "Hi there!");
    }
}
