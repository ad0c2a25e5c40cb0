//! Color values accepted by color tags.
//!
//! Supports:
//!
//! - Named colors: the sixteen chat colors (`red`, `dark_aqua`, `gold`, ...)
//! - Gray aliases: `grey` and `dark_grey`
//! - RGB hex: `#ff6b35` or `#fff` (3 or 6 digit, any case)

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a hex color code without the `#` prefix.
    ///
    /// Accepts 3-digit (`f80`, expanded to `ff8800`) and 6-digit forms.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => Some(Rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Some(Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The sixteen named chat colors, in legacy code order (`0` through `f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
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
}

impl NamedColor {
    /// All named colors, in legacy code order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Canonical tag name.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Looks up a color by tag name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "grey" => return Some(NamedColor::Gray),
            "dark_grey" => return Some(NamedColor::DarkGray),
            _ => {}
        }
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The color's reference RGB value.
    pub fn rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb(0x00, 0x00, 0x00),
            NamedColor::DarkBlue => Rgb(0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => Rgb(0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => Rgb(0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => Rgb(0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => Rgb(0xaa, 0x00, 0xaa),
            NamedColor::Gold => Rgb(0xff, 0xaa, 0x00),
            NamedColor::Gray => Rgb(0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => Rgb(0x55, 0x55, 0x55),
            NamedColor::Blue => Rgb(0x55, 0x55, 0xff),
            NamedColor::Green => Rgb(0x55, 0xff, 0x55),
            NamedColor::Aqua => Rgb(0x55, 0xff, 0xff),
            NamedColor::Red => Rgb(0xff, 0x55, 0x55),
            NamedColor::LightPurple => Rgb(0xff, 0x55, 0xff),
            NamedColor::Yellow => Rgb(0xff, 0xff, 0x55),
            NamedColor::White => Rgb(0xff, 0xff, 0xff),
        }
    }
}

/// A text color: one of the named colors or an arbitrary RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Named(NamedColor),
    Rgb(Rgb),
}

impl TextColor {
    /// Parses a color from a tag argument: a color name or `#hex`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.strip_prefix('#') {
            Some(hex) => Rgb::from_hex(hex).map(TextColor::Rgb),
            None => NamedColor::from_name(s).map(TextColor::Named),
        }
    }

    /// RGB value of this color.
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb(rgb) => rgb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_6_digit() {
        assert_eq!(Rgb::from_hex("ff6b35"), Some(Rgb(255, 107, 53)));
        assert_eq!(Rgb::from_hex("000000"), Some(Rgb(0, 0, 0)));
        assert_eq!(Rgb::from_hex("FF6B35"), Some(Rgb(255, 107, 53)));
    }

    #[test]
    fn hex_3_digit() {
        assert_eq!(Rgb::from_hex("fff"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::from_hex("f80"), Some(Rgb(255, 136, 0)));
    }

    #[test]
    fn hex_invalid() {
        assert_eq!(Rgb::from_hex("ff"), None);
        assert_eq!(Rgb::from_hex("ffff"), None);
        assert_eq!(Rgb::from_hex("gggggg"), None);
        assert_eq!(Rgb::from_hex("+fffff"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Rgb(18, 52, 86).to_hex(), "#123456");
        assert_eq!(Rgb(255, 171, 0).to_hex(), "#ffab00");
    }

    #[test]
    fn named_lookup() {
        assert_eq!(NamedColor::from_name("red"), Some(NamedColor::Red));
        assert_eq!(
            NamedColor::from_name("light_purple"),
            Some(NamedColor::LightPurple)
        );
        assert_eq!(NamedColor::from_name("GOLD"), Some(NamedColor::Gold));
        assert_eq!(NamedColor::from_name("purple"), None);
    }

    #[test]
    fn grey_aliases() {
        assert_eq!(NamedColor::from_name("grey"), Some(NamedColor::Gray));
        assert_eq!(
            NamedColor::from_name("dark_grey"),
            Some(NamedColor::DarkGray)
        );
    }

    #[test]
    fn every_name_round_trips() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn text_color_parse() {
        assert_eq!(
            TextColor::parse("aqua"),
            Some(TextColor::Named(NamedColor::Aqua))
        );
        assert_eq!(
            TextColor::parse("#123456"),
            Some(TextColor::Rgb(Rgb(0x12, 0x34, 0x56)))
        );
        assert_eq!(TextColor::parse("#12"), None);
        assert_eq!(TextColor::parse("nope"), None);
    }

    #[test]
    fn named_rgb_values() {
        assert_eq!(NamedColor::Gold.rgb(), Rgb(255, 170, 0));
        assert_eq!(TextColor::Named(NamedColor::DarkGray).rgb(), Rgb(85, 85, 85));
    }
}
