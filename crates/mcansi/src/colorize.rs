//! The compile pipeline: normalize, translate hex macros, translate legacy
//! codes.
//!
//! A pass whose markup fails to parse still translates whatever codes it can
//! and asks for another pass. Every pass run leaves one reset at the end of
//! the output.

use tracing::{debug, trace, warn};

use crate::ansi::RESET;
use crate::hex::translate_hex_macros;
use crate::legacy::translate_legacy_codes;
use crate::normalize::normalize;

/// Pass ceiling used unless [`Colorizer::max_passes`] says otherwise.
pub const DEFAULT_MAX_PASSES: usize = 8;

/// Output color depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 24-bit colors from markup become true-color sequences.
    #[default]
    Modern,
    /// Only the sixteen legacy colors are produced from markup.
    Legacy,
}

impl Mode {
    /// Whether markup colors may be written as hex macros.
    pub fn hex_colors(self) -> bool {
        matches!(self, Mode::Modern)
    }
}

/// The result of a compile, with the number of passes it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// ANSI text, ending in one reset per pass.
    pub output: String,
    /// Passes run, between one and the configured ceiling.
    pub passes: usize,
}

/// Compiles legacy codes and markup into ANSI text.
///
/// ```rust
/// use mcansi::{Colorizer, Mode};
///
/// let colorizer = Colorizer::new(Mode::Legacy).max_passes(2);
/// assert_eq!(colorizer.colorize("§4red"), "\x1b[31mred\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer {
    mode: Mode,
    max_passes: usize,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl Colorizer {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Sets the pass ceiling. Values below one are raised to one.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Compiles `text` and returns the output with the number of passes run.
    ///
    /// Well-formed markup takes one pass and malformed markup two. The
    /// translators only rewrite text outside tags, so a pass that fails to
    /// parse leaves the same tag error for the next one; the retry loop stops
    /// as soon as a failed retry leaves the text unchanged, which in practice
    /// is the second pass. The ceiling bounds the loop regardless.
    pub fn compile(&self, text: &str) -> Compiled {
        let hex_colors = self.mode.hex_colors();
        let mut current = text.to_string();
        let mut passes = 0;

        loop {
            passes += 1;
            let normalized = normalize(&current, hex_colors);
            let translated = translate_legacy_codes(&translate_hex_macros(&normalized.text));
            trace!(
                pass = passes,
                retry = normalized.retry,
                len = translated.len(),
                "pass complete"
            );

            if !normalized.retry {
                current = translated;
                break;
            }
            if passes >= self.max_passes {
                warn!(passes, "pass ceiling reached, giving up on markup");
                current = translated;
                break;
            }
            if passes > 1 && translated == current {
                debug!(passes, "retry made no progress, stopping");
                break;
            }
            current = translated;
        }

        let mut output = current;
        output.push_str(&RESET.repeat(passes));
        Compiled { output, passes }
    }

    pub fn colorize(&self, text: &str) -> String {
        self.compile(text).output
    }
}
