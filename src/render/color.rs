//! Theme color conversion
//!
//! Level themes store colors as hex strings. They are converted once when a
//! level is shown; a string that does not parse falls back to the default
//! color for that slot.

use macroquad::color::Color;

use crate::world::Theme;

/// Default background (#F0F0F0)
pub const DEFAULT_BG: Color = Color::new(0.941, 0.941, 0.941, 1.0);

/// Default platform fill (#C8C8C8)
pub const DEFAULT_PLATFORM: Color = Color::new(0.784, 0.784, 0.784, 1.0);

/// Default player blob (#1478FF)
pub const DEFAULT_BLOB: Color = Color::new(0.078, 0.471, 1.0, 1.0);

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);

    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };

    Some(Color::from_rgba(r, g, b, a))
}

fn resolve_slot(slot: &str, value: &str, fallback: Color) -> Color {
    parse_color(value).unwrap_or_else(|| {
        log::warn!("theme.{}: cannot parse color '{}', using default", slot, value);
        fallback
    })
}

/// A theme converted to render colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub bg: Color,
    pub platform: Color,
    pub blob: Color,
}

impl ThemeColors {
    pub fn resolve(theme: &Theme) -> Self {
        Self {
            bg: resolve_slot("bg", &theme.bg, DEFAULT_BG),
            platform: resolve_slot("platform", &theme.platform, DEFAULT_PLATFORM),
            blob: resolve_slot("blob", &theme.blob, DEFAULT_BLOB),
        }
    }
}
