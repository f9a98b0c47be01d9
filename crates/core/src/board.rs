//! Board module - the dealt grid of hidden icons
//!
//! Cells are stored in a flat vector, row-major (`row * columns + col`).
//! A board never changes once dealt; revealing and covering tiles is tracked
//! by [`crate::session::GameSession`].

use std::collections::HashMap;

use tracing::debug;

use crate::config::{check_grid, ConfigError};
use crate::rng::SimpleRng;
use crate::types::{CellPos, Icon, Shape, ICON_COLORS, ICON_VARIETY};

/// Every icon the palette can produce, colors outermost.
pub fn all_icons() -> Vec<Icon> {
    let mut icons = Vec::with_capacity(ICON_VARIETY);
    for color in ICON_COLORS {
        for shape in Shape::ALL {
            icons.push(Icon::new(shape, color));
        }
    }
    icons
}

/// A columns x rows grid where every icon appears exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u16,
    rows: u16,
    icons: Vec<Icon>,
}

impl Board {
    /// Deal a shuffled board.
    ///
    /// Shuffles the full icon set, keeps the first `cells / 2`, doubles them and
    /// shuffles again. Fails when the board has an odd number of cells or needs
    /// more distinct icons than the palette holds.
    pub fn generate(columns: u16, rows: u16, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        check_grid(columns, rows, ICON_VARIETY)?;

        let mut icons = all_icons();
        rng.shuffle(&mut icons);

        let needed = columns as usize * rows as usize / 2;
        icons.truncate(needed);
        icons.extend_from_within(..);
        rng.shuffle(&mut icons);

        debug!(columns, rows, pairs = needed, "board dealt");
        Ok(Self {
            columns,
            rows,
            icons,
        })
    }

    /// Build a board from an explicit row-major icon list.
    pub fn from_icons(columns: u16, rows: u16, icons: Vec<Icon>) -> Result<Self, ConfigError> {
        check_grid(columns, rows, usize::MAX)?;

        let expected = columns as usize * rows as usize;
        if icons.len() != expected {
            return Err(ConfigError::IconCountMismatch {
                expected,
                actual: icons.len(),
            });
        }

        let mut counts: HashMap<Icon, usize> = HashMap::new();
        for icon in &icons {
            *counts.entry(*icon).or_default() += 1;
        }
        // Report in board order so the error is stable.
        if let Some((icon, count)) = icons
            .iter()
            .map(|icon| (icon, counts[icon]))
            .find(|&(_, count)| count != 2)
        {
            return Err(ConfigError::UnpairedIcon {
                shape: icon.shape.as_str(),
                color: (icon.color.r, icon.color.g, icon.color.b),
                count,
            });
        }

        Ok(Self {
            columns,
            rows,
            icons,
        })
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Flat index of `pos`, or None when it lies outside the grid
    #[inline]
    pub fn index(&self, pos: CellPos) -> Option<usize> {
        if pos.col >= self.columns || pos.row >= self.rows {
            return None;
        }
        Some(pos.row as usize * self.columns as usize + pos.col as usize)
    }

    /// Icon hidden at `pos`
    pub fn icon(&self, pos: CellPos) -> Option<Icon> {
        self.index(pos).map(|i| self.icons[i])
    }

    /// Row-major icon slice
    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Every cell position, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| CellPos::new(col, row)))
    }
}
