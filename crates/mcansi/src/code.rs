//! The legacy code table.
//!
//! A legacy code is the section sign `§` followed by one identifying
//! character. Twenty-one codes carry an attribute: sixteen colors (`0`–`9`,
//! `a`–`f`) and five styles (`k`–`o`). `r` and every other character resolve
//! to reset.
//!
//! The table is built once on first use and never changes afterwards.

use std::collections::HashMap;

use mcansi_markup::{Decoration, NamedColor};
use once_cell::sync::Lazy;

use crate::ansi::{Attribute, TermColor};

/// The escape character that introduces a legacy code.
pub const SECTION: char = '§';

static CODE_TABLE: Lazy<HashMap<char, Code>> =
    Lazy::new(|| Code::ALL.into_iter().map(|code| (code.id(), code)).collect());

/// A legacy code symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
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
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    /// Default for `r` and anything the table does not know.
    Reset,
}

impl Code {
    /// Every code with a table entry. [`Code::Reset`] is deliberately absent.
    pub const ALL: [Code; 21] = [
        Code::Black,
        Code::DarkBlue,
        Code::DarkGreen,
        Code::DarkAqua,
        Code::DarkRed,
        Code::DarkPurple,
        Code::Gold,
        Code::Gray,
        Code::DarkGray,
        Code::Blue,
        Code::Green,
        Code::Aqua,
        Code::Red,
        Code::LightPurple,
        Code::Yellow,
        Code::White,
        Code::Obfuscated,
        Code::Bold,
        Code::Strikethrough,
        Code::Underline,
        Code::Italic,
    ];

    /// The identifying character, lowercase.
    pub fn id(self) -> char {
        match self {
            Code::Black => '0',
            Code::DarkBlue => '1',
            Code::DarkGreen => '2',
            Code::DarkAqua => '3',
            Code::DarkRed => '4',
            Code::DarkPurple => '5',
            Code::Gold => '6',
            Code::Gray => '7',
            Code::DarkGray => '8',
            Code::Blue => '9',
            Code::Green => 'a',
            Code::Aqua => 'b',
            Code::Red => 'c',
            Code::LightPurple => 'd',
            Code::Yellow => 'e',
            Code::White => 'f',
            Code::Obfuscated => 'k',
            Code::Bold => 'l',
            Code::Strikethrough => 'm',
            Code::Underline => 'n',
            Code::Italic => 'o',
            Code::Reset => 'r',
        }
    }

    /// The two-character `§<id>` token.
    pub fn token(self) -> String {
        format!("{}{}", SECTION, self.id())
    }

    /// Looks up an identifying character, case-insensitively.
    ///
    /// Characters without a table entry resolve to [`Code::Reset`].
    pub fn from_char(id: char) -> Code {
        match CODE_TABLE.get(&id.to_ascii_lowercase()) {
            Some(code) => *code,
            None => Code::Reset,
        }
    }

    /// The display attribute this code selects.
    ///
    /// Values follow the long-standing console mapping: both grays render as
    /// bright black, light purple shares magenta with dark purple, and white
    /// is the non-bright white.
    pub fn attribute(self) -> Attribute {
        match self {
            Code::Black => Attribute::Foreground(TermColor::Black),
            Code::DarkBlue => Attribute::Foreground(TermColor::Blue),
            Code::DarkGreen => Attribute::Foreground(TermColor::Green),
            Code::DarkAqua => Attribute::Foreground(TermColor::Cyan),
            Code::DarkRed => Attribute::Foreground(TermColor::Red),
            Code::DarkPurple => Attribute::Foreground(TermColor::Magenta),
            Code::Gold => Attribute::Foreground(TermColor::Yellow),
            Code::Gray => Attribute::Foreground(TermColor::BrightBlack),
            Code::DarkGray => Attribute::Foreground(TermColor::BrightBlack),
            Code::Blue => Attribute::Foreground(TermColor::BrightBlue),
            Code::Green => Attribute::Foreground(TermColor::BrightGreen),
            Code::Aqua => Attribute::Foreground(TermColor::BrightCyan),
            Code::Red => Attribute::Foreground(TermColor::BrightRed),
            Code::LightPurple => Attribute::Foreground(TermColor::Magenta),
            Code::Yellow => Attribute::Foreground(TermColor::BrightYellow),
            Code::White => Attribute::Foreground(TermColor::White),
            Code::Obfuscated => Attribute::Reverse,
            Code::Bold => Attribute::Bold,
            Code::Strikethrough => Attribute::Strikethrough,
            Code::Underline => Attribute::Underline,
            Code::Italic => Attribute::Italic,
            Code::Reset => Attribute::Reset,
        }
    }

    /// Returns true for the sixteen color codes.
    pub fn is_color(self) -> bool {
        matches!(self.id(), '0'..='9' | 'a'..='f')
    }
}

impl From<NamedColor> for Code {
    fn from(color: NamedColor) -> Self {
        match color {
            NamedColor::Black => Code::Black,
            NamedColor::DarkBlue => Code::DarkBlue,
            NamedColor::DarkGreen => Code::DarkGreen,
            NamedColor::DarkAqua => Code::DarkAqua,
            NamedColor::DarkRed => Code::DarkRed,
            NamedColor::DarkPurple => Code::DarkPurple,
            NamedColor::Gold => Code::Gold,
            NamedColor::Gray => Code::Gray,
            NamedColor::DarkGray => Code::DarkGray,
            NamedColor::Blue => Code::Blue,
            NamedColor::Green => Code::Green,
            NamedColor::Aqua => Code::Aqua,
            NamedColor::Red => Code::Red,
            NamedColor::LightPurple => Code::LightPurple,
            NamedColor::Yellow => Code::Yellow,
            NamedColor::White => Code::White,
        }
    }
}

impl From<Decoration> for Code {
    fn from(decoration: Decoration) -> Self {
        match decoration {
            Decoration::Obfuscated => Code::Obfuscated,
            Decoration::Bold => Code::Bold,
            Decoration::Strikethrough => Code::Strikethrough,
            Decoration::Underlined => Code::Underline,
            Decoration::Italic => Code::Italic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_entry_per_code() {
        assert_eq!(CODE_TABLE.len(), 21);
        for code in Code::ALL {
            assert_eq!(CODE_TABLE.get(&code.id()), Some(&code));
        }
        assert!(!CODE_TABLE.contains_key(&'r'));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Code::from_char('c'), Code::Red);
        assert_eq!(Code::from_char('C'), Code::Red);
        assert_eq!(Code::from_char('L'), Code::Bold);
    }

    #[test]
    fn unknown_resolves_to_reset() {
        assert_eq!(Code::from_char('r'), Code::Reset);
        assert_eq!(Code::from_char('R'), Code::Reset);
        assert_eq!(Code::from_char('z'), Code::Reset);
        assert_eq!(Code::from_char('x'), Code::Reset);
        assert_eq!(Code::from_char('é'), Code::Reset);
    }

    #[test]
    fn table_attributes() {
        assert_eq!(
            Code::DarkRed.attribute(),
            Attribute::Foreground(TermColor::Red)
        );
        assert_eq!(
            Code::Gray.attribute(),
            Attribute::Foreground(TermColor::BrightBlack)
        );
        assert_eq!(
            Code::LightPurple.attribute(),
            Attribute::Foreground(TermColor::Magenta)
        );
        assert_eq!(
            Code::White.attribute(),
            Attribute::Foreground(TermColor::White)
        );
        assert_eq!(Code::Obfuscated.attribute(), Attribute::Reverse);
        assert_eq!(Code::Reset.attribute(), Attribute::Reset);
    }

    #[test]
    fn tokens() {
        assert_eq!(Code::Red.token(), "§c");
        assert_eq!(Code::Reset.token(), "§r");
    }

    #[test]
    fn color_codes() {
        let colors = Code::ALL.into_iter().filter(|c| c.is_color()).count();
        assert_eq!(colors, 16);
        assert!(!Code::Reset.is_color());
    }

    #[test]
    fn named_colors_follow_code_order() {
        for (color, code) in NamedColor::ALL.into_iter().zip(Code::ALL) {
            assert_eq!(Code::from(color), code);
        }
    }

    #[test]
    fn decorations_map_to_style_codes() {
        let ids: String = Decoration::ALL
            .into_iter()
            .map(|d| Code::from(d).id())
            .collect();
        assert_eq!(ids, "klmno");
    }
}
