//! Color helpers: hex macros, nearest legacy color, chroma cycling.
//!
//! # Hex macros
//!
//! Legacy text has no native way to carry a 24-bit color, so it is spelled as
//! a run of legacy-looking codes: `§x` followed by each of the six hex digits
//! prefixed with its own `§`.
//!
//! ```text
//! #123456  ->  §x§1§2§3§4§5§6
//! ```

use mcansi_markup::{NamedColor, Rgb};

use crate::code::{Code, SECTION};

/// Encodes a color as a hex macro, lowercase.
///
/// ```rust
/// use mcansi::{encode_hex_macro, Rgb};
///
/// assert_eq!(encode_hex_macro(Rgb(18, 52, 86)), "§x§1§2§3§4§5§6");
/// ```
pub fn encode_hex_macro(rgb: Rgb) -> String {
    let hex = format!("{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2);
    let mut out = String::with_capacity(14 * SECTION.len_utf8());
    out.push(SECTION);
    out.push('x');
    for digit in hex.chars() {
        out.push(SECTION);
        out.push(digit);
    }
    out
}

/// Decodes a complete hex macro. Returns `None` unless the whole input is
/// exactly one macro (the `x` and digits may be any case).
pub fn decode_hex_macro(token: &str) -> Option<Rgb> {
    let mut chars = token.chars();
    if chars.next() != Some(SECTION) || !matches!(chars.next(), Some('x' | 'X')) {
        return None;
    }

    let mut digits = String::with_capacity(6);
    while let Some(marker) = chars.next() {
        let digit = chars.next()?;
        if marker != SECTION || !digit.is_ascii_hexdigit() {
            return None;
        }
        digits.push(digit);
    }

    if digits.len() != 6 {
        return None;
    }
    Rgb::from_hex(&digits)
}

/// Picks the named color closest to `rgb` by squared RGB distance.
///
/// Ties go to the color that comes first in code order.
pub fn nearest_named(rgb: Rgb) -> NamedColor {
    let distance = |other: Rgb| {
        let dr = i32::from(rgb.0) - i32::from(other.0);
        let dg = i32::from(rgb.1) - i32::from(other.1);
        let db = i32::from(rgb.2) - i32::from(other.2);
        dr * dr + dg * dg + db * db
    };

    let mut best = NamedColor::Black;
    let mut best_distance = i32::MAX;
    for color in NamedColor::ALL {
        let d = distance(color.rgb());
        if d < best_distance {
            best = color;
            best_distance = d;
        }
    }
    best
}

/// The legacy color code closest to `rgb`.
pub fn nearest_code(rgb: Rgb) -> Code {
    Code::from(nearest_named(rgb))
}

/// Length of one chroma cycle, in milliseconds.
pub const CHROMA_PERIOD_MS: f64 = 2000.0;

/// Rainbow color for a screen position at a point in time.
///
/// The hue walks the full circle once every [`CHROMA_PERIOD_MS`]; positions
/// further right or down lag behind by `10 * offset_scale` ms per unit, which
/// makes the colors sweep diagonally across the screen. Saturation and
/// brightness are fixed at 0.8.
pub fn chroma(x: f64, y: f64, offset_scale: f64, millis: u64) -> Rgb {
    let t = millis as f64 - x * 10.0 * offset_scale - y * 10.0 * offset_scale;
    hsb_to_rgb((t % CHROMA_PERIOD_MS) / CHROMA_PERIOD_MS, 0.8, 0.8)
}

/// Converts hue/saturation/brightness (each nominally 0.0–1.0) to RGB.
///
/// Hue wraps, so negative values and values above 1.0 are fine.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgb {
    let to_u8 = |v: f64| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let v = to_u8(brightness);
        return Rgb(v, v, v);
    }

    // A hue just below zero wraps to exactly 1.0, which is sector 0 again
    let h = (hue - hue.floor()) * 6.0;
    let h = if h >= 6.0 { 0.0 } else { h };
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u8 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };
    Rgb(to_u8(r), to_u8(g), to_u8(b))
}
