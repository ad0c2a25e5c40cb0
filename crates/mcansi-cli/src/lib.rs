//! Command-line front end for `mcansi`.
//!
//! The binary is a thin wrapper: [`Cli`] holds the parsed flags and [`run`]
//! does the work against any reader and writer, so everything except terminal
//! detection and logging setup can be driven from tests.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcansi::{contains_legacy_codes, strip_ansi, Colorizer, Mode, DEFAULT_MAX_PASSES};
use tracing::debug;

/// Compile legacy color codes and tag markup to ANSI escapes
#[derive(Debug, Parser)]
#[command(name = "mcansi")]
#[command(version)]
#[command(about = "Compile §-codes and <tag> markup to ANSI escape sequences")]
#[command(long_about = "Compile §-codes and <tag> markup to ANSI escape sequences.\n\n\
    Text is taken from the arguments, joined with spaces. Without arguments\n\
    standard input is compiled line by line.")]
pub struct Cli {
    /// Text to compile
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Use the 16-color palette instead of 24-bit color
    #[arg(short, long)]
    pub legacy: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// Report whether the input holds legacy codes (exit 1 if not)
    #[arg(long)]
    pub check: bool,

    /// Pass ceiling for text that does not parse as markup
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PASSES)]
    pub max_passes: usize,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.legacy {
            Mode::Legacy
        } else {
            Mode::Modern
        }
    }

    pub fn colorizer(&self) -> Colorizer {
        Colorizer::new(self.mode()).max_passes(self.max_passes)
    }
}

/// Where the compiled escapes end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Escapes when stdout is a color terminal, plain text otherwise
    Auto,
    /// Always write escapes
    Term,
    /// Strip escapes and write the visible text
    Text,
}

impl OutputMode {
    /// Resolves `Auto` against what the terminal supports.
    pub fn use_escapes(self, terminal_colors: bool) -> bool {
        match self {
            OutputMode::Auto => terminal_colors,
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Runs the command and returns the process exit code.
///
/// Standard input is handled one line at a time: each line is written (and
/// flushed) before the next is read, and `--check` stops at the first line
/// holding a code. `terminal_colors` is only consulted for
/// [`OutputMode::Auto`].
pub fn run<R, W>(cli: &Cli, input: R, out: &mut W, terminal_colors: bool) -> Result<u8>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input_lines(cli, input);

    if cli.check {
        let mut found = false;
        for line in lines.by_ref() {
            if contains_legacy_codes(&line.context("reading standard input")?) {
                found = true;
                break;
            }
        }
        debug!(found, "checked for legacy codes");
        let verdict = if found {
            "legacy codes found"
        } else {
            "no legacy codes"
        };
        writeln!(out, "{}", verdict).context("writing output")?;
        return Ok(if found { 0 } else { 1 });
    }

    let colorizer = cli.colorizer();
    let escapes = cli.output.use_escapes(terminal_colors);
    debug!(mode = ?colorizer.mode(), escapes, "compiling");

    for line in lines {
        let line = line.context("reading standard input")?;
        let mut compiled = colorizer.colorize(&line);
        if !escapes {
            compiled = strip_ansi(&compiled);
        }
        writeln!(out, "{}", compiled).context("writing output")?;
        out.flush().context("flushing output")?;
    }
    Ok(0)
}

/// The joined TEXT arguments if any were given, otherwise stdin lines.
fn input_lines<R: BufRead>(cli: &Cli, input: R) -> impl Iterator<Item = io::Result<String>> {
    let joined = (!cli.text.is_empty()).then(|| cli.text.join(" "));
    let stdin = joined.is_none().then(|| input.lines());
    joined.into_iter().map(Ok::<_, io::Error>).chain(stdin.into_iter().flatten())
}
