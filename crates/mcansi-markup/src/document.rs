//! Parsed markup: styled spans of text.

use std::collections::BTreeSet;

use crate::color::TextColor;

/// A text decoration toggled by a tag.
///
/// Declaration order is the order legacy serializers emit decorations in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    /// All decorations, in emission order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    /// Canonical tag name.
    pub fn name(self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    /// Resolves a decoration tag name or its short alias, case-insensitively.
    pub fn from_tag(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "obfuscated" | "obf" => Some(Decoration::Obfuscated),
            "bold" | "b" => Some(Decoration::Bold),
            "strikethrough" | "st" => Some(Decoration::Strikethrough),
            "underlined" | "u" => Some(Decoration::Underlined),
            "italic" | "i" | "em" => Some(Decoration::Italic),
            _ => None,
        }
    }
}

/// The effective style of a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<TextColor>,
    pub decorations: BTreeSet<Decoration>,
}

impl Style {
    /// Returns true if the decoration is active.
    pub fn has(&self, decoration: Decoration) -> bool {
        self.decorations.contains(&decoration)
    }

    /// Returns true if neither a color nor any decoration is set.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// A parsed markup document.
///
/// Spans are in input order and never empty; adjacent spans always differ in
/// style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    spans: Vec<Span>,
}

impl Document {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The document's text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Appends text, merging it into the last span when the style matches.
    pub(crate) fn push(&mut self, text: &str, style: &Style) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == *style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                style: style.clone(),
            }),
        }
    }
}
