//! mcansi - compile section-sign color codes and tag markup to ANSI escapes.
//!
//! Game servers and their plugins format text two ways: legacy codes, where
//! `§` followed by one character selects a color or style (`§c` red, `§l`
//! bold, `§r` reset), and angle-bracket tag markup (`<red>`, `<#ff8800>`,
//! `<bold>`). This crate turns both into terminal escape sequences so the
//! same strings can be printed to a console.
//!
//! # Quick Start
//!
//! ```rust
//! use mcansi::{colorize, colorize_legacy, contains_legacy_codes};
//!
//! // Markup and legacy codes can be mixed freely.
//! let out = colorize("<gold>Welcome</gold> §lback");
//! assert_eq!(out, "\x1b[33mWelcome\x1b[0m \x1b[1mback\x1b[0m");
//!
//! // Legacy mode keeps to the sixteen-color palette.
//! assert_eq!(colorize_legacy("<#123456>x"), "\x1b[90mx\x1b[0m");
//!
//! assert!(contains_legacy_codes("§4warning"));
//! ```
//!
//! # Pipeline
//!
//! Each pass runs three stages:
//!
//! 1. markup is parsed and written back as legacy codes ([`normalize`]),
//!    with RGB colors as hex macros (`§x§r§r§g§g§b§b`) in modern mode or
//!    snapped to the nearest legacy color in legacy mode;
//! 2. hex macros become true-color sequences ([`translate_hex_macros`]);
//! 3. legacy codes become 16-color and style sequences
//!    ([`translate_legacy_codes`]).
//!
//! Text that does not parse as markup is not an error. It goes through the
//! translators unchanged and another pass is attempted, up to
//! [`Colorizer::max_passes`]. Every pass appends one reset sequence, so
//! well-formed input ends with exactly one reset.
//!
//! # Extras
//!
//! [`paint_rgb`], [`chroma`] and [`strip_ansi`] cover the odd jobs around
//! console coloring: one-off true-color text, time-based rainbow colors, and
//! getting the visible text back.

mod ansi;
mod code;
mod color;
mod colorize;
mod hex;
mod legacy;
mod normalize;

pub use ansi::{escape_for, paint_rgb, reset_sequence, strip_ansi, Attribute, TermColor, RESET};
pub use code::{Code, SECTION};
pub use color::{
    chroma, decode_hex_macro, encode_hex_macro, hsb_to_rgb, nearest_code, nearest_named,
    CHROMA_PERIOD_MS,
};
pub use colorize::{Colorizer, Compiled, Mode, DEFAULT_MAX_PASSES};
pub use hex::translate_hex_macros;
pub use legacy::{contains_legacy_codes, translate_legacy_codes};
pub use normalize::{normalize, to_legacy_text, Normalized};

pub use mcansi_markup::{Decoration, MarkupError, NamedColor, Rgb, TextColor};

/// Compiles text to 24-bit ANSI output.
pub fn colorize(text: &str) -> String {
    Colorizer::new(Mode::Modern).colorize(text)
}

/// Compiles text to 16-color ANSI output.
pub fn colorize_legacy(text: &str) -> String {
    Colorizer::new(Mode::Legacy).colorize(text)
}

/// Compiles text, choosing the mode with a flag.
pub fn to_ansi(text: &str, legacy: bool) -> String {
    if legacy {
        colorize_legacy(text)
    } else {
        colorize(text)
    }
}
