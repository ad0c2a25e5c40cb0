//! Legacy code translation and detection.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::ansi::escape_for;
use crate::code::Code;

static LEGACY_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("§([0-9a-fA-Fk-oK-OrR])").expect("legacy code pattern is valid")
});

/// Replaces every legacy code with the escape sequence of its attribute.
///
/// `§` followed by a character outside `0-9 a-f k-o r` (any case) is left as
/// it is.
pub fn translate_legacy_codes(text: &str) -> String {
    LEGACY_CODE
        .replace_all(text, |caps: &Captures<'_>| {
            let code = caps[1].chars().next().map_or(Code::Reset, Code::from_char);
            escape_for(code.attribute())
        })
        .into_owned()
}

/// Returns true if the text contains at least one legacy code.
///
/// ```rust
/// use mcansi::contains_legacy_codes;
///
/// assert!(contains_legacy_codes("§4text"));
/// assert!(!contains_legacy_codes("plain text"));
/// ```
pub fn contains_legacy_codes(text: &str) -> bool {
    LEGACY_CODE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_colors_and_reset() {
        assert_eq!(translate_legacy_codes("§4red§r"), "\x1b[31mred\x1b[0m");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(translate_legacy_codes("§Lbold"), "\x1b[1mbold");
        assert_eq!(translate_legacy_codes("§C§c"), "\x1b[91m\x1b[91m");
    }

    #[test]
    fn every_table_code_translates() {
        for code in Code::ALL {
            let out = translate_legacy_codes(&code.token());
            assert_eq!(out, escape_for(code.attribute()));
        }
    }

    #[test]
    fn unknown_codes_left_alone() {
        assert_eq!(translate_legacy_codes("§z§x§ §"), "§z§x§ §");
    }

    #[test]
    fn doubled_section_sign() {
        assert_eq!(translate_legacy_codes("§§4"), "§\x1b[31m");
    }

    #[test]
    fn detection() {
        assert!(contains_legacy_codes("§4text"));
        assert!(contains_legacy_codes("§R"));
        assert!(!contains_legacy_codes("plain text"));
        assert!(!contains_legacy_codes("§x§z"));
        assert!(!contains_legacy_codes(""));
    }
}
