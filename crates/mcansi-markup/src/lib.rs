//! Angle-bracket tag markup parser for game-style formatted text.
//!
//! This crate parses `<tag>content</tag>` style markup, the format chat and
//! scoreboard text is commonly authored in, into a flat list of styled
//! [`Span`]s. It knows nothing about terminals: turning a [`Document`] into
//! legacy color codes or ANSI escapes is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use mcansi_markup::{parse, Decoration, NamedColor, TextColor};
//!
//! let doc = parse("<red>Hello</red> <bold>world</bold>").unwrap();
//! let spans = doc.spans();
//!
//! assert_eq!(spans[0].text, "Hello");
//! assert_eq!(spans[0].style.color, Some(TextColor::Named(NamedColor::Red)));
//! assert_eq!(spans[1].text, " ");
//! assert!(spans[2].style.has(Decoration::Bold));
//! assert_eq!(doc.plain_text(), "Hello world");
//! ```
//!
//! # Tags
//!
//! | Tag | Effect |
//! |-----|--------|
//! | `<red>`, `<dark_aqua>`, ... | named color (16 names, `grey` aliases) |
//! | `<#ff8800>`, `<#f80>` | RGB color |
//! | `<color:X>`, `<colour:X>`, `<c:X>` | color by name or hex |
//! | `<bold>` `<b>` | bold |
//! | `<italic>` `<i>` `<em>` | italic |
//! | `<underlined>` `<u>` | underline |
//! | `<strikethrough>` `<st>` | strikethrough |
//! | `<obfuscated>` `<obf>` | obfuscated |
//! | `<reset>` | closes every open tag |
//! | `<br>` `<newline>` | line break |
//!
//! Tag text follows the pattern `[a-z_#][a-zA-Z0-9_:#-]*`. Text that does not
//! match, unknown tag names, and a `<` written as `\<` are kept literally.
//! Unclosed tags run to the end of the input.
//!
//! Names are matched ignoring ASCII case, and a closing tag may use any alias
//! or hex spelling of the tag it closes: `<#F80>x</#ff8800>` and
//! `<bold>x</b>` are both well formed.
//!
//! # Errors
//!
//! Parsing is lenient but not silent: a color tag with a bad argument, or a
//! closing tag for a known name that nothing opened, fails with a
//! [`MarkupError`] so callers can fall back to treating the input as plain
//! text.

mod color;
mod document;
mod error;
mod token;

pub use color::{NamedColor, Rgb, TextColor};
pub use document::{Decoration, Document, Span, Style};
pub use error::{MarkupError, Result};

use token::{Token, Tokenizer};

/// Parses markup into a [`Document`].
pub fn parse(input: &str) -> Result<Document> {
    let mut parser = Parser::default();
    for token in Tokenizer::new(input) {
        parser.feed(token)?;
    }
    Ok(parser.doc)
}

/// What a recognized opening tag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Color(TextColor),
    Decoration(Decoration),
    Reset,
    Newline,
}

impl Tag {
    /// Resolves tag text. `Ok(None)` means the tag is unknown.
    fn resolve(tag: &str) -> Result<Option<Tag>> {
        let (name, arg) = split_tag(tag);
        let name = name.to_ascii_lowercase();
        let name = name.as_str();

        if is_color_name(name) {
            return arg
                .and_then(TextColor::parse)
                .map(|color| Some(Tag::Color(color)))
                .ok_or_else(|| MarkupError::invalid_color(tag));
        }

        if name.starts_with('#') {
            return match arg {
                None => TextColor::parse(name)
                    .map(|color| Some(Tag::Color(color)))
                    .ok_or_else(|| MarkupError::invalid_color(tag)),
                Some(_) => Err(MarkupError::invalid_color(tag)),
            };
        }

        if arg.is_some() {
            return Ok(None);
        }

        let resolved = match name {
            "reset" => Some(Tag::Reset),
            "br" | "newline" => Some(Tag::Newline),
            _ => Decoration::from_tag(name)
                .map(Tag::Decoration)
                .or_else(|| NamedColor::from_name(name).map(|c| Tag::Color(TextColor::Named(c)))),
        };
        Ok(resolved)
    }

    /// Returns true if a closing tag with this name refers to a known tag.
    fn is_closable(tag: &str) -> bool {
        let name = split_tag(tag).0.to_ascii_lowercase();
        is_color_name(&name)
            || name.starts_with('#')
            || Decoration::from_tag(&name).is_some()
            || NamedColor::from_name(&name).is_some()
    }
}

fn split_tag(tag: &str) -> (&str, Option<&str>) {
    match tag.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (tag, None),
    }
}

fn is_color_name(name: &str) -> bool {
    matches!(name, "color" | "colour" | "c")
}

/// Tag text reduced to what it means, for pairing closes with opens.
///
/// Names are lowercased and aliases folded (`b` is `bold`, `c` and `colour`
/// are `color`); colors are written in one form (`#F80` is `#ff8800`).
#[derive(Debug, Clone, PartialEq, Eq)]
struct TagKey {
    name: String,
    arg: Option<String>,
}

impl TagKey {
    fn new(tag: &str) -> Self {
        let (name, arg) = split_tag(tag);
        let name = name.to_ascii_lowercase();
        let name = if is_color_name(&name) {
            "color".to_string()
        } else if let Some(decoration) = Decoration::from_tag(&name) {
            decoration.name().to_string()
        } else {
            canonical_color(&name).unwrap_or(name)
        };
        let arg = arg.map(|arg| canonical_color(arg).unwrap_or_else(|| arg.to_ascii_lowercase()));
        Self { name, arg }
    }

    /// `</color>` closes `<color:red>`; anything else must match in full.
    fn closed_by(&self, close: &TagKey) -> bool {
        self == close || (close.arg.is_none() && self.name == close.name)
    }
}

fn canonical_color(text: &str) -> Option<String> {
    TextColor::parse(text).map(|color| match color {
        TextColor::Named(named) => named.name().to_string(),
        TextColor::Rgb(rgb) => rgb.to_hex(),
    })
}

#[derive(Debug)]
struct Frame {
    key: TagKey,
    effect: Tag,
}

#[derive(Debug, Default)]
struct Parser {
    stack: Vec<Frame>,
    doc: Document,
}

impl Parser {
    fn feed(&mut self, token: Token<'_>) -> Result<()> {
        match token {
            Token::Text(text) | Token::InvalidTag(text) => self.emit(text),
            Token::OpenTag(tag) => match Tag::resolve(tag)? {
                Some(Tag::Reset) => self.stack.clear(),
                Some(Tag::Newline) => self.emit("\n"),
                Some(effect) => self.stack.push(Frame {
                    key: TagKey::new(tag),
                    effect,
                }),
                None => self.emit(&format!("<{}>", tag)),
            },
            Token::CloseTag(tag) => {
                let key = TagKey::new(tag);
                if let Some(idx) = self.stack.iter().rposition(|f| f.key.closed_by(&key)) {
                    // Closing an outer tag closes everything opened inside it
                    self.stack.truncate(idx);
                } else if Tag::is_closable(tag) {
                    return Err(MarkupError::unmatched_close(tag));
                } else {
                    self.emit(&format!("</{}>", tag));
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) {
        let style = self.current_style();
        self.doc.push(text, &style);
    }

    fn current_style(&self) -> Style {
        let mut style = Style::default();
        for frame in &self.stack {
            match frame.effect {
                Tag::Color(color) => style.color = Some(color),
                Tag::Decoration(decoration) => {
                    style.decorations.insert(decoration);
                }
                Tag::Reset | Tag::Newline => {}
            }
        }
        style
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Text without tag brackets, escapes or section signs
    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"]{0,50}"
    }

    fn color_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(NamedColor::ALL.iter().map(|c| c.name()).collect::<Vec<_>>())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn plain_text_round_trips(content in plain_text()) {
            let doc = parse(&content).unwrap();
            prop_assert_eq!(doc.plain_text(), content);
        }

        #[test]
        fn color_tag_strips_to_content(name in color_name(), content in plain_text()) {
            let input = format!("<{}>{}</{}>", name, content, name);
            let doc = parse(&input).unwrap();
            prop_assert_eq!(doc.plain_text(), content);
        }

        #[test]
        fn hex_tags_parse(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let rgb = Rgb(r, g, b);
            let input = format!("<{}>x", rgb.to_hex());
            let doc = parse(&input).unwrap();
            prop_assert_eq!(doc.spans()[0].style.color, Some(TextColor::Rgb(rgb)));
        }

        #[test]
        fn spans_never_empty(content in "[a-z<>/ ]{0,40}") {
            if let Ok(doc) = parse(&content) {
                prop_assert!(doc.spans().iter().all(|s| !s.text.is_empty()));
            }
        }
    }
}
