//! Tokenizer for angle-bracket tags.

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Plain text content.
    Text(&'a str),
    /// Opening tag: `<tagname>`
    OpenTag(&'a str),
    /// Closing tag: `</tagname>`
    CloseTag(&'a str),
    /// Invalid tag syntax (passed through as text).
    InvalidTag(&'a str),
}

pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Checks if a string is valid tag text.
    ///
    /// The first character is a lowercase letter, `_` or `#`; the rest are
    /// ASCII alphanumerics, `_`, `-`, `:` or `#`. Uppercase is allowed after
    /// the first character so hex arguments like `#FF0000` tokenize.
    pub(crate) fn is_valid_tag_name(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return false;
        };

        if !first.is_ascii_lowercase() && first != '_' && first != '#' {
            return false;
        }

        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '#'))
    }

    /// Byte offset of the next `<` or `\<`, whichever comes first.
    fn next_special(s: &str) -> Option<usize> {
        match (s.find('<'), s.find("\\<")) {
            (Some(lt), Some(esc)) => Some(lt.min(esc)),
            (lt, esc) => lt.or(esc),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];

        // Escaped bracket: emit the bracket alone as text
        if remaining.starts_with("\\<") {
            self.pos += 2;
            return Some(Token::Text(&remaining[1..2]));
        }

        match Self::next_special(remaining) {
            Some(0) => {}
            Some(idx) => {
                self.pos += idx;
                return Some(Token::Text(&remaining[..idx]));
            }
            None => {
                self.pos = self.input.len();
                return Some(Token::Text(remaining));
            }
        }

        // We're at a '<'. A tag runs to the next '>' unless another '<'
        // shows up first, in which case this bracket is literal.
        let after = &remaining[1..];
        match after.find(['<', '>']) {
            Some(end) if after.as_bytes()[end] == b'>' => {
                let tag_content = &after[..end];
                let full_tag = &remaining[..end + 2];
                self.pos += end + 2;

                if let Some(tag_name) = tag_content.strip_prefix('/') {
                    if Self::is_valid_tag_name(tag_name) {
                        Some(Token::CloseTag(tag_name))
                    } else {
                        Some(Token::InvalidTag(full_tag))
                    }
                } else if Self::is_valid_tag_name(tag_content) {
                    Some(Token::OpenTag(tag_content))
                } else {
                    Some(Token::InvalidTag(full_tag))
                }
            }
            _ => {
                self.pos += 1;
                Some(Token::Text(&remaining[..1]))
            }
        }
    }
}
