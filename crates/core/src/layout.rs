//! Layout module - maps between board cells and surface pixels
//!
//! Tiles are fixed-size rectangles in a regular grid separated by gaps, with
//! the whole grid centered on the surface:
//!
//! ```text
//! left = col * (tile_w + gap_x) + margin_x
//! top  = row * (tile_h + gap_y) + margin_y
//! ```
//!
//! A point belongs to a tile only when it lies strictly inside it
//! (`left < x < left + tile_w`, same for y).

use crate::config::GameConfig;
use crate::types::{CellPos, PixelPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    columns: u16,
    rows: u16,
    tile_w: u16,
    tile_h: u16,
    gap_x: u16,
    gap_y: u16,
    margin_x: u16,
    margin_y: u16,
}

impl Layout {
    /// Center the configured grid on a `width` x `height` surface.
    pub fn centered(config: &GameConfig, width: u16, height: u16) -> Self {
        let stride_x = config.tile_width as u32 + config.gap_x as u32;
        let stride_y = config.tile_height as u32 + config.gap_y as u32;
        let grid_w = stride_x * config.columns as u32;
        let grid_h = stride_y * config.rows as u32;

        Self {
            columns: config.columns,
            rows: config.rows,
            tile_w: config.tile_width,
            tile_h: config.tile_height,
            gap_x: config.gap_x,
            gap_y: config.gap_y,
            margin_x: ((width as u32).saturating_sub(grid_w) / 2) as u16,
            margin_y: ((height as u32).saturating_sub(grid_h) / 2) as u16,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn tile_width(&self) -> u16 {
        self.tile_w
    }

    pub fn tile_height(&self) -> u16 {
        self.tile_h
    }

    pub fn gap_x(&self) -> u16 {
        self.gap_x
    }

    pub fn gap_y(&self) -> u16 {
        self.gap_y
    }

    pub fn margins(&self) -> (u16, u16) {
        (self.margin_x, self.margin_y)
    }

    fn stride_x(&self) -> u32 {
        self.tile_w as u32 + self.gap_x as u32
    }

    fn stride_y(&self) -> u32 {
        self.tile_h as u32 + self.gap_y as u32
    }

    /// Top-left pixel of a tile. Saturates on surfaces too small for the grid.
    pub fn origin(&self, pos: CellPos) -> PixelPos {
        let left = pos.col as u32 * self.stride_x() + self.margin_x as u32;
        let top = pos.row as u32 * self.stride_y() + self.margin_y as u32;
        PixelPos::new(
            left.min(u16::MAX as u32) as u16,
            top.min(u16::MAX as u32) as u16,
        )
    }

    /// The tile strictly containing `p`, if any.
    pub fn cell_at(&self, p: PixelPos) -> Option<CellPos> {
        let col = axis_hit(p.x, self.margin_x, self.stride_x(), self.tile_w, self.columns)?;
        let row = axis_hit(p.y, self.margin_y, self.stride_y(), self.tile_h, self.rows)?;
        Some(CellPos::new(col, row))
    }
}

/// Resolve one axis: which tile index `v` falls strictly inside.
fn axis_hit(v: u16, margin: u16, stride: u32, tile: u16, count: u16) -> Option<u16> {
    let offset = (v as u32).checked_sub(margin as u32)?;
    let index = offset / stride;
    let within = offset % stride;
    if index >= count as u32 || within == 0 || within >= tile as u32 {
        return None;
    }
    Some(index as u16)
}
