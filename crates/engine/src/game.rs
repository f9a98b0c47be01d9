//! The memory game loop.
//!
//! Each frame: drain input, advance the state machine, render, present, wait
//! out the frame budget. Reveal/cover sweeps and the win flash block the loop
//! while they play; input that arrives meanwhile is handled on the next frame.

use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{
    preview_groups, won_flash, Board, ClickOutcome, ConfigError, GameConfig, GameSession, Layout,
    SimpleRng, Sweep,
};
use crate::input::{EventSource, PointerState};
use crate::term::{FrameBuffer, GameView, Overlay, Pacer, Present, SweepFrame, Viewport};
use crate::types::{CellPos, PixelPos, WON_FLASH_COUNT, WON_FLASH_MS};

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub struct MemoryGame<P, C, E> {
    config: GameConfig,
    rng: SimpleRng,
    session: GameSession,
    layout: Layout,
    viewport: Viewport,
    view: GameView,
    fb: FrameBuffer,
    pointer: PointerState,
    presenter: P,
    clock: C,
    events: E,
    games_won: u32,
}

impl<P: Present, C: Pacer, E: EventSource> MemoryGame<P, C, E> {
    /// Validate `config` and deal the first board.
    pub fn new(
        config: GameConfig,
        seed: u32,
        presenter: P,
        clock: C,
        events: E,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(config.columns, config.rows, &mut rng)?;
        let viewport = presenter.viewport();
        let layout = Layout::centered(&config, viewport.width, viewport.height);

        info!(
            columns = config.columns,
            rows = config.rows,
            seed,
            "memory game ready"
        );
        Ok(Self {
            config,
            rng,
            session: GameSession::new(board),
            layout,
            viewport,
            view: GameView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            pointer: PointerState::new(),
            presenter,
            clock,
            events,
            games_won: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn games_won(&self) -> u32 {
        self.games_won
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// A pixel inside `pos`, for driving the game by coordinates.
    pub fn tile_center(&self, pos: CellPos) -> PixelPos {
        let origin = self.layout.origin(pos);
        PixelPos::new(
            origin.x + self.layout.tile_width() / 2,
            origin.y + self.layout.tile_height() / 2,
        )
    }

    /// Play until a quit event.
    pub fn run(&mut self) -> Result<()> {
        if self.config.start_animation {
            self.play_preview()?;
        }
        while self.step()? == Step::Continue {}
        info!(games_won = self.games_won, "quit");
        Ok(())
    }

    /// Run a single frame.
    pub fn step(&mut self) -> Result<Step> {
        self.pointer.begin_frame();
        let events = self.events.drain()?;
        self.pointer.apply_all(&events);

        if self.pointer.quit_requested() {
            return Ok(Step::Quit);
        }
        if let Some((width, height)) = self.pointer.resized() {
            self.relayout(Viewport::new(width, height));
        }
        if self.pointer.restart_requested() {
            self.new_game()?;
        }

        let hovered = self.layout.cell_at(self.pointer.position());
        if let (true, Some(pos)) = (self.pointer.clicked(), hovered) {
            self.handle_click(pos)?;
        }

        let overlay = Overlay {
            highlight: hovered,
            ..Overlay::default()
        };
        self.draw(&overlay)?;
        self.clock.tick();
        Ok(Step::Continue)
    }

    fn handle_click(&mut self, pos: CellPos) -> Result<()> {
        match self.session.click(pos) {
            ClickOutcome::Ignored => {}
            ClickOutcome::FirstRevealed(first) => {
                self.play_sweep(self.reveal_sweep(), &[first], &[])?;
            }
            ClickOutcome::Matched { second, won, .. } => {
                self.play_sweep(self.reveal_sweep(), &[second], &[])?;
                if won {
                    self.play_won()?;
                }
            }
            ClickOutcome::Mismatched { first, second } => {
                // Both are already covered in the session; keep them face-up
                // on screen until the cover sweep finishes.
                self.play_sweep(self.reveal_sweep(), &[second], &[first])?;
                self.clock
                    .sleep(Duration::from_millis(self.config.mismatch_delay_ms as u64));
                self.play_sweep(self.cover_sweep(), &[first, second], &[])?;
            }
        }
        Ok(())
    }

    /// Deal a fresh board and replay the preview.
    pub fn new_game(&mut self) -> Result<()> {
        let board = Board::generate(self.config.columns, self.config.rows, &mut self.rng)?;
        self.session = GameSession::new(board);
        info!("new board dealt");
        if self.config.start_animation {
            self.play_preview()?;
        }
        Ok(())
    }

    fn relayout(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "surface resized");
        self.viewport = viewport;
        self.layout = Layout::centered(&self.config, viewport.width, viewport.height);
        self.presenter.invalidate();
    }

    fn reveal_sweep(&self) -> Sweep {
        Sweep::reveal(self.layout.tile_width(), self.config.animation_speed)
    }

    fn cover_sweep(&self) -> Sweep {
        Sweep::cover(self.layout.tile_width(), self.config.animation_speed)
    }

    fn play_sweep(&mut self, sweep: Sweep, cells: &[CellPos], shown: &[CellPos]) -> Result<()> {
        for coverage in sweep {
            let overlay = Overlay {
                shown,
                sweep: Some(SweepFrame { cells, coverage }),
                ..Overlay::default()
            };
            self.draw(&overlay)?;
            self.clock.tick();
        }
        Ok(())
    }

    /// Flash every tile group open and shut so the player gets a peek.
    fn play_preview(&mut self) -> Result<()> {
        let groups = preview_groups(
            self.config.columns,
            self.config.rows,
            self.config.preview_group_size,
            &mut self.rng,
        );
        for group in &groups {
            self.play_sweep(self.reveal_sweep(), group, &[])?;
            self.play_sweep(self.cover_sweep(), group, &[])?;
        }
        Ok(())
    }

    fn play_won(&mut self) -> Result<()> {
        for background in won_flash(WON_FLASH_COUNT) {
            let overlay = Overlay {
                background: Some(background),
                ..Overlay::default()
            };
            self.draw(&overlay)?;
            self.clock.sleep(Duration::from_millis(WON_FLASH_MS as u64));
        }
        self.clock
            .sleep(Duration::from_millis(self.config.won_delay_ms as u64));
        self.games_won += 1;
        info!(games_won = self.games_won, "game won");

        if self.config.replay_on_win {
            self.new_game()?;
        }
        Ok(())
    }

    fn draw(&mut self, overlay: &Overlay<'_>) -> Result<()> {
        self.view.render_into(
            &self.session,
            &self.layout,
            overlay,
            self.viewport,
            &mut self.fb,
        );
        self.presenter.present(&mut self.fb)
    }
}
