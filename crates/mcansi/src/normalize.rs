//! Tag markup to legacy-code text.
//!
//! The first stage of the pipeline. Markup is parsed with `mcansi-markup` and
//! written back out using only legacy codes (and hex macros, when allowed), so
//! the later stages have a single format to deal with.

use mcansi_markup::{Document, Style, TextColor};
use tracing::debug;

use crate::code::Code;
use crate::color::{encode_hex_macro, nearest_named};

/// Result of normalizing one piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Set when the text could not be parsed as markup and was passed through
    /// unchanged.
    pub retry: bool,
}

/// Normalizes markup into legacy-code text.
///
/// With `hex_colors` set, RGB colors become hex macros; otherwise they are
/// snapped to the nearest of the sixteen legacy colors. Parse failures never
/// escape: the input comes back untouched with [`Normalized::retry`] set.
pub fn normalize(text: &str, hex_colors: bool) -> Normalized {
    match mcansi_markup::parse(text) {
        Ok(doc) => Normalized {
            text: to_legacy_text(&doc, hex_colors),
            retry: false,
        },
        Err(err) => {
            debug!(error = %err, "markup parse failed, passing text through");
            Normalized {
                text: text.to_string(),
                retry: true,
            }
        }
    }
}

/// Serializes a parsed document as legacy-code text.
///
/// Codes are only written where the style changes. Dropping a color or a
/// decoration needs a `§r` followed by the full new style; a color change
/// re-emits the active decorations after it; added decorations are emitted
/// on their own. No reset is written at the end.
pub fn to_legacy_text(doc: &Document, hex_colors: bool) -> String {
    let mut out = String::new();
    let mut current = Style::default();

    for span in doc.spans() {
        let next = &span.style;
        if *next != current {
            let dropped = current.decorations.iter().any(|d| !next.has(*d))
                || (current.color.is_some() && next.color.is_none());

            if dropped {
                out.push_str(&Code::Reset.token());
                push_style(&mut out, next, hex_colors);
            } else if next.color != current.color {
                push_style(&mut out, next, hex_colors);
            } else {
                for decoration in next.decorations.difference(&current.decorations) {
                    out.push_str(&Code::from(*decoration).token());
                }
            }
            current = next.clone();
        }
        out.push_str(&span.text);
    }

    out
}

fn push_style(out: &mut String, style: &Style, hex_colors: bool) {
    if let Some(color) = style.color {
        out.push_str(&color_token(color, hex_colors));
    }
    for decoration in &style.decorations {
        out.push_str(&Code::from(*decoration).token());
    }
}

fn color_token(color: TextColor, hex_colors: bool) -> String {
    match color {
        TextColor::Named(named) => Code::from(named).token(),
        TextColor::Rgb(rgb) if hex_colors => encode_hex_macro(rgb),
        TextColor::Rgb(rgb) => Code::from(nearest_named(rgb)).token(),
    }
}
