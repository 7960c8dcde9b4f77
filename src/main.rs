//! Flashcards - interactive term/definition trainer
//!
//! Add cards, quiz yourself, and keep track of the ones you get wrong.

mod collection;
mod config;
mod console;
mod error;
mod models;
mod session;
mod storage;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use config::Config;
use console::LoggedConsole;
use session::Session;

// ══════════════════════════════════════════════════════════════════════════
// CLI Arguments
// ══════════════════════════════════════════════════════════════════════════

#[derive(Parser, Debug)]
#[command(name = "flashcards")]
#[command(author, version, about = "Interactive term/definition flashcard trainer", long_about = None)]
struct Args {
    /// Import cards from this file before the first prompt
    #[arg(long)]
    import: Option<PathBuf>,

    /// Export cards to this file when the session ends
    #[arg(long)]
    export: Option<PathBuf>,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write the current config (defaults filled in) and exit
    #[arg(long)]
    init_config: bool,
}

/// Keep only the arguments the trainer understands.
///
/// `-import <path>` and `-export <path>` may appear anywhere and in either
/// single- or double-dash form; everything else is dropped. Values are
/// glued on with `=` so paths starting with `-` survive clap.
fn launch_args(raw: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut raw = raw.into_iter();
    let mut args: Vec<String> = raw.next().into_iter().collect();

    while let Some(arg) = raw.next() {
        let flag = match arg.as_str() {
            "-import" | "--import" => "--import",
            "-export" | "--export" => "--export",
            "--config" => "--config",
            "--no-color" | "--init-config" | "-h" | "--help" | "-V" | "--version" => {
                args.push(arg);
                continue;
            }
            _ => continue,
        };
        if let Some(value) = raw.next() {
            args.push(format!("{}={}", flag, value));
        }
    }

    args
}

// ══════════════════════════════════════════════════════════════════════════
// Main Entry Point
// ══════════════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse_from(launch_args(std::env::args()));
    let config_path = args.config.clone().unwrap_or_else(Config::default_path);

    let mut config = Config::load_from(&config_path)?;

    if args.init_config {
        config.save_to(&config_path)?;
        println!("✓ Wrote config to {}", config_path.display());
        return Ok(());
    }

    if args.no_color || !io::stdout().is_terminal() {
        config.color = false;
    }

    let console = LoggedConsole::new(io::stdin().lock(), io::stdout(), config.console_theme());
    let mut session = Session::new(console, rand::rng());
    session.run(args.import.as_deref(), args.export.as_deref())
}
