use std::io;
use std::process::ExitCode;

use clap::Parser;
use mcansi_cli::{run, Cli};
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let terminal_colors = console::Term::stdout().features().colors_supported();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(&cli, stdin.lock(), &mut stdout.lock(), terminal_colors) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("mcansi: {:#}", err);
            ExitCode::from(2)
        }
    }
}
