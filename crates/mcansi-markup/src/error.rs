//! Error types for markup parsing.

use thiserror::Error;

/// Errors that make a piece of text unparseable as tag markup.
///
/// Anything that merely *looks* odd (unknown tag names, stray `<`, unclosed
/// tags) is not an error: it is kept as literal text or closed implicitly.
/// Only tags the parser recognizes but cannot honor are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A color tag whose argument is not a color (`<#12>`, `<color:nope>`).
    #[error("invalid color in tag <{tag}>")]
    InvalidColor { tag: String },

    /// A closing tag of a known name with nothing open for it to close.
    #[error("closing tag </{tag}> has no matching open tag")]
    UnmatchedClose { tag: String },
}

impl MarkupError {
    pub(crate) fn invalid_color(tag: impl Into<String>) -> Self {
        Self::InvalidColor { tag: tag.into() }
    }

    pub(crate) fn unmatched_close(tag: impl Into<String>) -> Self {
        Self::UnmatchedClose { tag: tag.into() }
    }
}

/// Result type for markup parsing.
pub type Result<T> = std::result::Result<T, MarkupError>;
