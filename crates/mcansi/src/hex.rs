//! Hex macro translation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::ansi::{escape_for, Attribute};
use crate::color::decode_hex_macro;

static HEX_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new("§[xX](?:§[0-9a-fA-F]){6}").expect("hex macro pattern is valid")
});

/// Replaces every hex macro with a true-color foreground sequence.
///
/// ```rust
/// use mcansi::translate_hex_macros;
///
/// assert_eq!(
///     translate_hex_macros("§x§f§f§0§0§0§0hot"),
///     "\x1b[38;2;255;0;0mhot"
/// );
/// ```
pub fn translate_hex_macros(text: &str) -> String {
    HEX_MACRO
        .replace_all(text, |caps: &Captures<'_>| match decode_hex_macro(&caps[0]) {
            Some(rgb) => escape_for(Attribute::TrueColor(rgb)),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_macros_is_identity() {
        assert_eq!(translate_hex_macros("plain §cred"), "plain §cred");
    }

    #[test]
    fn every_occurrence_replaced() {
        let out = translate_hex_macros("§x§0§0§0§0§f§fa§x§0§0§0§0§f§fb");
        assert_eq!(out, "\x1b[38;2;0;0;255ma\x1b[38;2;0;0;255mb");
    }

    #[test]
    fn distinct_macros_in_order() {
        let out = translate_hex_macros("§x§1§2§3§4§5§6a§X§A§B§C§D§E§Fb");
        assert_eq!(out, "\x1b[38;2;18;52;86ma\x1b[38;2;171;205;239mb");
    }

    #[test]
    fn incomplete_macro_left_alone() {
        assert_eq!(translate_hex_macros("§x§1§2§3"), "§x§1§2§3");
        assert_eq!(translate_hex_macros("§x123456"), "§x123456");
    }

    #[test]
    fn legacy_codes_untouched() {
        let out = translate_hex_macros("§l§x§1§2§3§4§5§6§c");
        assert_eq!(out, "§l\x1b[38;2;18;52;86m§c");
    }
}
