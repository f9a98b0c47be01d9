//! Framebuffer and drawing primitives for terminal rendering.
//!
//! One terminal cell is one pixel. Filled shapes sample at cell centers.
//! Everything clips silently at the buffer edges.

pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    /// Foreground and background both `color`; used for filled shapes.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            fg: color,
            bg: color,
            bold: false,
            dim: false,
        }
    }

    /// Text in `fg` over `bg`.
    pub const fn text(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Glyph used for filled pixels.
pub const SOLID: char = '█';

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Signed variant of [`FrameBuffer::set`] for primitives that may start
    /// off-screen.
    fn plot(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        self.set(x as u16, y as u16, cell);
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the whole surface with a solid color.
    pub fn fill_background(&mut self, color: Rgb) {
        self.clear(CellStyle::solid(color).into_cell(' '));
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// One-cell border drawn with box characters.
    pub fn outline_rect(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, '┏', style);
        self.put_char(right, y, '┓', style);
        self.put_char(x, bottom, '┗', style);
        self.put_char(right, bottom, '┛', style);
        for dx in 1..w - 1 {
            self.put_char(x.saturating_add(dx), y, '━', style);
            self.put_char(x.saturating_add(dx), bottom, '━', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y.saturating_add(dy), '┃', style);
            self.put_char(right, y.saturating_add(dy), '┃', style);
        }
    }

    /// Filled ellipse inscribed in the `w` x `h` rectangle at (x, y).
    ///
    /// A circle is the special case `w == h`.
    pub fn fill_ellipse(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        let rx = w as f32 / 2.0;
        let ry = h as f32 / 2.0;
        let cell = CellStyle::solid(color).into_cell(SOLID);
        for dy in 0..h {
            for dx in 0..w {
                let nx = (dx as f32 + 0.5 - rx) / rx;
                let ny = (dy as f32 + 0.5 - ry) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set(x.saturating_add(dx), y.saturating_add(dy), cell);
                }
            }
        }
    }

    /// Filled polygon (even-odd rule, sampled at cell centers).
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb) {
        if points.len() < 3 {
            return;
        }
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        for &(px, py) in points {
            min_x = min_x.min(px);
            min_y = min_y.min(py);
            max_x = max_x.max(px);
            max_y = max_y.max(py);
        }

        let cell = CellStyle::solid(color).into_cell(SOLID);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if point_in_polygon(x as f32 + 0.5, y as f32 + 0.5, points) {
                    self.plot(x, y, cell);
                }
            }
        }
    }

    /// One-cell-wide line (Bresenham).
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb) {
        let cell = CellStyle::solid(color).into_cell(SOLID);
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, cell);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Text content of one row (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

fn point_in_polygon(x: f32, y: f32, points: &[(i32, i32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].0 as f32, points[i].1 as f32);
        let (xj, yj) = (points[j].0 as f32, points[j].1 as f32);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn filled(fb: &FrameBuffer) -> usize {
        fb.cells().iter().filter(|c| c.ch == SOLID).count()
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(5, 5, 'x', CellStyle::default());
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  a");
    }

    #[test]
    fn fill_background_paints_every_cell() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_background(RED);
        assert!(fb.cells().iter().all(|c| c.style.bg == RED));
    }

    #[test]
    fn ellipse_stays_inside_its_box() {
        let mut fb = FrameBuffer::new(12, 8);
        fb.fill_ellipse(1, 1, 10, 6, RED);
        assert!(filled(&fb) > 0);
        for y in 0..8 {
            for x in 0..12 {
                if fb.get(x, y).unwrap().ch == SOLID {
                    assert!((1..11).contains(&x) && (1..7).contains(&y));
                }
            }
        }
        // Center is filled, corners are not.
        assert_eq!(fb.get(6, 4).unwrap().ch, SOLID);
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
    }

    #[test]
    fn polygon_fills_diamond_center() {
        let mut fb = FrameBuffer::new(10, 5);
        fb.fill_polygon(&[(5, 0), (9, 2), (5, 4), (0, 2)], RED);
        assert_eq!(fb.get(4, 2).unwrap().ch, SOLID);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(9, 4).unwrap().ch, ' ');
    }

    #[test]
    fn line_hits_both_endpoints() {
        let mut fb = FrameBuffer::new(8, 4);
        fb.draw_line((0, 0), (7, 3), RED);
        assert_eq!(fb.get(0, 0).unwrap().ch, SOLID);
        assert_eq!(fb.get(7, 3).unwrap().ch, SOLID);
        assert_eq!(filled(&fb), 8);
    }

    #[test]
    fn line_clips_negative_coordinates() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.draw_line((-3, 0), (3, 0), RED);
        assert_eq!(fb.row_text(0), "████");
    }

    #[test]
    fn outline_draws_corners() {
        let mut fb = FrameBuffer::new(5, 4);
        fb.outline_rect(0, 0, 5, 4, CellStyle::default());
        assert_eq!(fb.row_text(0), "┏━━━┓");
        assert_eq!(fb.row_text(3), "┗━━━┛");
        assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
    }
}
