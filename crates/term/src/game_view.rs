//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It reads the session and never mutates it.

use crate::core::{GameSession, Layout};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellPos, Icon, PixelPos, Shape, BACKGROUND, HIGHLIGHT, TILE_COLOR, WHITE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// One frame of a reveal/cover sweep over `cells`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepFrame<'a> {
    pub cells: &'a [CellPos],
    /// Width of the cover measured from the tile's left edge
    pub coverage: u16,
}

/// Per-frame extras layered over the session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay<'a> {
    /// Defaults to [`BACKGROUND`]
    pub background: Option<Rgb>,
    /// Hovered tile; only drawn while the tile is face-down
    pub highlight: Option<CellPos>,
    /// Tiles drawn face-up whatever the session says
    pub shown: &'a [CellPos],
    pub sweep: Option<SweepFrame<'a>>,
}

/// Board renderer.
#[derive(Debug, Clone)]
pub struct GameView {
    status_line: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { status_line: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_line(mut self, status_line: bool) -> Self {
        self.status_line = status_line;
        self
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(
        &self,
        session: &GameSession,
        layout: &Layout,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let background = overlay.background.unwrap_or(BACKGROUND);
        fb.resize(viewport.width, viewport.height);
        fb.fill_background(background);

        let (w, h) = (layout.tile_width(), layout.tile_height());
        let swept = |pos: &CellPos| overlay.sweep.is_some_and(|s| s.cells.contains(pos));

        for pos in session.board().cells() {
            if swept(&pos) {
                continue;
            }
            let origin = layout.origin(pos);
            let face_up = session.is_revealed(pos) || overlay.shown.contains(&pos);
            match session.icon(pos) {
                Some(icon) if face_up => draw_icon(fb, icon, origin, w, h, background),
                _ => fb.fill_rect(origin.x, origin.y, w, h, ' ', CellStyle::solid(TILE_COLOR)),
            }
        }

        if let Some(pos) = overlay.highlight {
            if !session.is_revealed(pos) && session.board().index(pos).is_some() {
                self.draw_highlight(fb, layout, pos, background);
            }
        }

        if let Some(sweep) = overlay.sweep {
            for &pos in sweep.cells {
                let Some(icon) = session.icon(pos) else {
                    continue;
                };
                let origin = layout.origin(pos);
                fb.fill_rect(origin.x, origin.y, w, h, ' ', CellStyle::solid(background));
                draw_icon(fb, icon, origin, w, h, background);
                if sweep.coverage > 0 {
                    fb.fill_rect(
                        origin.x,
                        origin.y,
                        sweep.coverage.min(w),
                        h,
                        ' ',
                        CellStyle::solid(TILE_COLOR),
                    );
                }
            }
        }

        if self.status_line {
            self.draw_status(fb, session, viewport, background);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        session: &GameSession,
        layout: &Layout,
        overlay: &Overlay<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, layout, overlay, viewport, &mut fb);
        fb
    }

    fn draw_highlight(&self, fb: &mut FrameBuffer, layout: &Layout, pos: CellPos, bg: Rgb) {
        let pad_x = (layout.gap_x() / 2).max(1);
        let pad_y = (layout.gap_y() / 2).max(1);
        let origin = layout.origin(pos);
        let style = CellStyle {
            bold: true,
            ..CellStyle::text(HIGHLIGHT, bg)
        };
        fb.outline_rect(
            origin.x.saturating_sub(pad_x),
            origin.y.saturating_sub(pad_y),
            layout.tile_width().saturating_add(pad_x * 2),
            layout.tile_height().saturating_add(pad_y * 2),
            style,
        );
    }

    fn draw_status(&self, fb: &mut FrameBuffer, session: &GameSession, viewport: Viewport, bg: Rgb) {
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height - 1;
        let style = CellStyle::text(WHITE, bg);
        let label = CellStyle { bold: true, ..style };

        fb.put_str(1, y, "Memory Game!", label);
        let pairs = format!(
            "pairs {}/{}",
            session.pairs_found(),
            session.total_pairs()
        );
        fb.put_str(15, y, &pairs, style);
        if session.has_won() {
            fb.put_str(16 + pairs.len() as u16, y, "YOU WON!", label);
        }

        let help = "r new board  esc quit";
        let help_x = viewport.width.saturating_sub(help.len() as u16 + 1);
        if help_x > 26 + pairs.len() as u16 {
            fb.put_str(help_x, y, help, CellStyle { dim: true, ..style });
        }
    }
}

/// Draw `icon` into the tile whose top-left corner is `origin`.
pub fn draw_icon(fb: &mut FrameBuffer, icon: Icon, origin: PixelPos, w: u16, h: u16, bg: Rgb) {
    let (left, top) = (origin.x, origin.y);
    let (quarter_w, half_w) = (w / 4, w / 2);
    let (quarter_h, half_h) = (h / 4, h / 2);
    let color = icon.color;

    match icon.shape {
        Shape::Donut => {
            let inset = w / 8;
            fb.fill_ellipse(left + inset, top, w - inset * 2, h, color);
            let hole_w = quarter_w.max(1);
            let hole_h = quarter_h.max(1);
            fb.fill_ellipse(
                left + (w - hole_w) / 2,
                top + (h - hole_h) / 2,
                hole_w,
                hole_h,
                bg,
            );
        }
        Shape::Square => {
            fb.fill_rect(
                left + quarter_w,
                top + quarter_h,
                w - half_w,
                h - half_h,
                ' ',
                CellStyle::solid(color),
            );
        }
        Shape::Diamond => {
            let (l, t) = (left as i32, top as i32);
            let (w, h) = (w as i32, h as i32);
            fb.fill_polygon(
                &[
                    (l + w / 2, t),
                    (l + w, t + h / 2),
                    (l + w / 2, t + h),
                    (l, t + h / 2),
                ],
                color,
            );
        }
        Shape::Lines => {
            let (l, t) = (left as i32, top as i32);
            let (w, h) = (w as i32, h as i32);
            let step = (w / 3).max(2) as usize;
            // Scale x offsets onto the (usually shorter) vertical axis.
            let scale = |i: i32| if w > 1 { i * (h - 1) / (w - 1) } else { 0 };
            for i in (0..w).step_by(step) {
                fb.draw_line((l, t + scale(i)), (l + i, t), color);
                fb.draw_line((l + i, t + h - 1), (l + w - 1, t + scale(i)), color);
            }
        }
        Shape::Oval => {
            fb.fill_ellipse(left, top + quarter_h, w, half_h.max(1), color);
        }
    }
}
