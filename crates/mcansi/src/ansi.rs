//! ANSI escape sequence generation.
//!
//! Every sequence produced here is a single SGR (Select Graphic Rendition)
//! control: `ESC [ <params> m`. Only foreground colors and a handful of text
//! styles are ever generated.

use mcansi_markup::Rgb;

/// The reset/clear sequence.
pub const RESET: &str = "\x1b[0m";

/// The sixteen 4-bit terminal foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl TermColor {
    /// SGR foreground parameter (30–37, 90–97).
    pub fn sgr(self) -> u8 {
        match self {
            TermColor::Black => 30,
            TermColor::Red => 31,
            TermColor::Green => 32,
            TermColor::Yellow => 33,
            TermColor::Blue => 34,
            TermColor::Magenta => 35,
            TermColor::Cyan => 36,
            TermColor::White => 37,
            TermColor::BrightBlack => 90,
            TermColor::BrightRed => 91,
            TermColor::BrightGreen => 92,
            TermColor::BrightYellow => 93,
            TermColor::BrightBlue => 94,
            TermColor::BrightMagenta => 95,
            TermColor::BrightCyan => 96,
            TermColor::BrightWhite => 97,
        }
    }
}

/// A display attribute that maps to one SGR sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Foreground(TermColor),
    TrueColor(Rgb),
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Reverse,
    Reset,
}

impl Attribute {
    /// SGR parameter string, e.g. `"1"` or `"38;2;255;0;0"`.
    pub fn sgr(self) -> String {
        match self {
            Attribute::Foreground(color) => color.sgr().to_string(),
            Attribute::TrueColor(Rgb(r, g, b)) => format!("38;2;{};{};{}", r, g, b),
            Attribute::Bold => "1".to_string(),
            Attribute::Italic => "3".to_string(),
            Attribute::Underline => "4".to_string(),
            Attribute::Reverse => "7".to_string(),
            Attribute::Strikethrough => "9".to_string(),
            Attribute::Reset => "0".to_string(),
        }
    }
}

/// Returns the escape sequence for an attribute.
///
/// ```rust
/// use mcansi::{escape_for, Attribute, Rgb, TermColor};
///
/// assert_eq!(escape_for(Attribute::Foreground(TermColor::Red)), "\x1b[31m");
/// assert_eq!(escape_for(Attribute::TrueColor(Rgb(1, 2, 3))), "\x1b[38;2;1;2;3m");
/// ```
pub fn escape_for(attribute: Attribute) -> String {
    format!("\x1b[{}m", attribute.sgr())
}

/// Returns the reset/clear sequence.
pub fn reset_sequence() -> &'static str {
    RESET
}

/// Wraps text in a true-color foreground sequence followed by a reset.
pub fn paint_rgb(rgb: Rgb, text: &str) -> String {
    format!("{}{}{}", escape_for(Attribute::TrueColor(rgb)), text, RESET)
}

/// Removes ANSI escape sequences, leaving the visible text.
pub fn strip_ansi(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}
