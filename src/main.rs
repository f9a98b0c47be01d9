//! Terminal memory puzzle (default binary).
//!
//! Click tiles to flip them; find every matching pair. Esc or `q` quits, `r`
//! deals a new board.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use tui_memory::core::GameConfig;
use tui_memory::engine::MemoryGame;
use tui_memory::input::TerminalEvents;
use tui_memory::logging::init_file_logging;
use tui_memory::term::{FrameClock, TerminalRenderer};
use tui_memory::types::{ANIMATION_SPEED, DEFAULT_COLUMNS, DEFAULT_ROWS, FPS};

#[derive(Debug, Parser)]
#[command(name = "tui-memory", version, about = "Memory matching tile game for the terminal")]
struct Cli {
    /// Tile columns
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: u16,

    /// Tile rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u16,

    /// Board seed (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Frame rate cap
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Cells the cover sweep moves per frame
    #[arg(long, default_value_t = ANIMATION_SPEED)]
    animation_speed: u16,

    /// Skip the peek at the board when it is dealt
    #[arg(long)]
    no_start_animation: bool,

    /// Deal a new board after a win instead of staying on the solved one
    #[arg(long)]
    replay: bool,

    /// Write logs here (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            fps: self.fps,
            animation_speed: self.animation_speed,
            start_animation: !self.no_start_animation,
            replay_on_win: self.replay,
            ..GameConfig::default().with_grid(self.columns, self.rows)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logging(cli.log_file.as_deref())?;

    let config = cli.config();
    let seed = cli.seed.unwrap_or_else(clock_seed);

    // Check the board before touching the terminal so errors print normally.
    config.validate().context("invalid board configuration")?;

    let mut term = TerminalRenderer::new("Memory Game!");
    term.enter()?;

    let result = run(config, seed, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("{e:#}");
    }
    result
}

fn run(config: GameConfig, seed: u32, term: &mut TerminalRenderer) -> Result<()> {
    let clock = FrameClock::new(config.fps);
    let mut game = MemoryGame::new(config, seed, term, clock, TerminalEvents::new())
        .context("invalid board configuration")?;
    game.run()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
