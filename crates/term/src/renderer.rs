//! Presenting framebuffers: the real terminal and a headless stand-in.
//!
//! `TerminalRenderer` diffs each frame against the previous one and only
//! writes changed runs. `HeadlessRenderer` keeps the last frame in memory so
//! the game loop can run in tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// The graphics surface the game draws onto.
pub trait Present {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Show `fb`. Implementations may swap its contents with an older frame,
    /// so callers must redraw the whole buffer before the next call.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Force the next present to be a full redraw.
    fn invalidate(&mut self) {}
}

impl<T: Present + ?Sized> Present for &mut T {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }

    fn invalidate(&mut self) {
        (**self).invalidate()
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    title: String,
}

impl TerminalRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            title: title.into(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(self.title.as_str()))?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.buf.clear();
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                self.buf.clear();
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Present for TerminalRenderer {
    fn viewport(&self) -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }

    fn invalidate(&mut self) {
        self.last = None;
    }
}

/// In-memory surface for tests and headless runs.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    viewport: Viewport,
    frames: u64,
    last: Option<FrameBuffer>,
}

impl HeadlessRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: 0,
            last: None,
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recently presented frame
    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.last.as_ref()
    }
}

impl Present for HeadlessRenderer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.frames += 1;
        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_encode_prints_every_cell() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "abc", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('a') && text.contains('b') && text.contains('c'));
    }

    #[test]
    fn headless_renderer_keeps_last_frame() {
        let mut r = HeadlessRenderer::new(Viewport::new(4, 2));
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "hi", CellStyle::default());
        r.present(&mut fb).unwrap();
        r.present(&mut fb).unwrap();

        assert_eq!(r.frames(), 2);
        assert_eq!(r.last_frame().unwrap().row_text(0), "hi  ");
    }
}
