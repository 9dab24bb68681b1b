use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameEngine;

/// Replay a Connect Four game from a list of columns.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four moves and show the result")]
struct Cli {
    /// Columns (0-6) to drop into, players alternating starting with Player 1
    columns: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Log every move at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let mut engine = GameEngine::with_rules(config.rules);
    for (i, &column) in cli.columns.iter().enumerate() {
        if let Err(err) = engine.attempt_move(column) {
            println!("move {} (column {}) rejected: {}", i + 1, column, err);
        }
    }

    let d = &config.display;
    print!(
        "{}",
        engine.board().render_with(d.empty, d.player_a, d.player_b)
    );
    println!("{}", engine.status());
    println!("moves: {}", engine.move_count());

    Ok(())
}
