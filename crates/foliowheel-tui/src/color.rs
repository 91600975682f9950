//! Accent color parsing and palette cross-fading.

use ratatui::style::Color;
use tracing::warn;

/// Neutral gray used when a configured color fails to parse.
pub const FALLBACK_RGB: (u8, u8, u8) = (0x9c, 0xa3, 0xaf);

/// Parse "#rrggbb" (leading '#' optional) into an RGB triple.
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse a configured accent, falling back to gray on bad input.
pub fn accent_rgb(s: &str) -> (u8, u8, u8) {
    match parse_hex(s) {
        Some(rgb) => rgb,
        None => {
            warn!("Invalid accent color '{}', using gray", s);
            FALLBACK_RGB
        }
    }
}

/// Linear blend of two colors, `t` in [0, 1].
pub fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| -> u8 {
        (from as f64 + (to as f64 - from as f64) * t).round() as u8
    };
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Accent for a fractional palette position in `[0, len)`, blending
/// each panel color into the next and wrapping the last back onto the
/// first.
pub fn crossfade(palette: &[(u8, u8, u8)], index: f64) -> Color {
    if palette.is_empty() {
        return rgb(FALLBACK_RGB);
    }

    let len = palette.len();
    let base = index.floor();
    let t = index - base;
    let i = (base as i64).rem_euclid(len as i64) as usize;
    let j = (i + 1) % len;

    rgb(lerp_rgb(palette[i], palette[j], t))
}

#[inline]
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
