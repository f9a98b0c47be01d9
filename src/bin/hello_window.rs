//! Minimal surface/event-loop demo.
//!
//! Opens the alternate screen titled "Hello World!", keeps presenting frames
//! until Esc, `q`, or Ctrl-C, then restores the terminal.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tui_memory::input::{should_quit, EventSource, PointerState, TerminalEvents};
use tui_memory::logging::init_file_logging;
use tui_memory::term::{CellStyle, FrameBuffer, FrameClock, Pacer, Present, TerminalRenderer};
use tui_memory::types::{InputEvent, BACKGROUND, FPS, WHITE};

const CAPTION: &str = "Hello World!";

#[derive(Debug, Parser)]
#[command(name = "hello-window", about = "Open a surface and pump events until quit")]
struct Cli {
    /// Write logs here (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_file_logging(cli.log_file.as_deref())?;

    let mut term = TerminalRenderer::new(CAPTION);
    term.enter()?;

    let result = run(&mut term);

    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut events = TerminalEvents::new();
    let mut clock = FrameClock::new(FPS);
    let mut pointer = PointerState::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut frames: u64 = 0;

    loop {
        pointer.begin_frame();
        for event in events.drain()? {
            if should_quit(&event) {
                info!(frames, "quit");
                return Ok(());
            }
            if let InputEvent::Resize { .. } = event {
                term.invalidate();
            }
            pointer.apply(&event);
        }

        let viewport = term.viewport();
        fb.resize(viewport.width, viewport.height);
        fb.fill_background(BACKGROUND);
        let x = viewport.width.saturating_sub(CAPTION.len() as u16) / 2;
        fb.put_str(x, viewport.height / 2, CAPTION, CellStyle::text(WHITE, BACKGROUND));

        let pos = pointer.position();
        let status = format!("pointer {},{}  esc quit", pos.x, pos.y);
        fb.put_str(1, viewport.height.saturating_sub(1), &status, CellStyle::text(WHITE, BACKGROUND));

        term.present(&mut fb)?;
        frames += 1;
        clock.tick();
    }
}
