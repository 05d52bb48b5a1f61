use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{Board, RenderStyle};
use connect_four::ui::{Console, ConnectFour};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Draw pieces as letters instead of coloured cells
    #[arg(long)]
    plain: bool,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    goal: Option<usize>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        app_config.board.columns = columns;
    }
    if let Some(rows) = cli.rows {
        app_config.board.rows = rows;
    }
    if let Some(goal) = cli.goal {
        app_config.board.goal = goal;
    }
    if cli.plain {
        app_config.render.style = RenderStyle::Plain;
    }
    app_config.validate().context("validating command line overrides")?;

    let board = Board::with_config(app_config.board, app_config.players.piece_colours())?
        .with_style(app_config.render.style);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut game = ConnectFour::new(console, board);

    match game.show_main_menu() {
        Ok(()) => Ok(()),
        // Closing stdin (Ctrl-D) quits like choosing Quit.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        Err(err) => Err(err).context("running game"),
    }
}
