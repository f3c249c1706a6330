use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use tictactoe::cli::{self, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so they never land in the middle of the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut editor = DefaultEditor::new().context("failed to open the terminal for input")?;
    let mut stdout = std::io::stdout();

    cli::run(&args, &mut editor, &mut stdout, &mut rng)?;
    Ok(())
}
