//! Animation math - frame sequences for the tile sweeps, the start preview and
//! the win flash.
//!
//! Nothing here touches game state or draws anything. Callers render one frame
//! per yielded value.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{CellPos, Rgb, BACKGROUND, LIGHT_BACKGROUND, PREVIEW_GROUP_SIZE};

/// Cells revealed together in one preview step
pub type PreviewGroup = ArrayVec<CellPos, PREVIEW_GROUP_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    /// Cover shrinks from the full tile width to nothing
    Reveal,
    /// Cover grows from nothing to the full tile width
    Cover,
}

/// Cover widths for one reveal or cover sweep.
///
/// Yields `ceil(width / speed) + 1` values. The final value is always 0 for a
/// reveal and `width` for a cover.
#[derive(Debug, Clone)]
pub struct Sweep {
    kind: SweepKind,
    width: u16,
    speed: u16,
    step: u16,
    steps: u16,
}

impl Sweep {
    pub fn new(kind: SweepKind, width: u16, speed: u16) -> Self {
        let speed = speed.max(1);
        Self {
            kind,
            width,
            speed,
            step: 0,
            steps: width.div_ceil(speed) + 1,
        }
    }

    pub fn reveal(width: u16, speed: u16) -> Self {
        Self::new(SweepKind::Reveal, width, speed)
    }

    pub fn cover(width: u16, speed: u16) -> Self {
        Self::new(SweepKind::Cover, width, speed)
    }
}

impl Iterator for Sweep {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.step >= self.steps {
            return None;
        }
        let moved = (self.step as u32 * self.speed as u32).min(self.width as u32) as u16;
        self.step += 1;
        Some(match self.kind {
            SweepKind::Reveal => self.width - moved,
            SweepKind::Cover => moved,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Sweep {}

/// Shuffle every cell of a `columns` x `rows` board and split the order into
/// preview groups of at most `group_size` (capped at [`PREVIEW_GROUP_SIZE`]).
pub fn preview_groups(
    columns: u16,
    rows: u16,
    group_size: usize,
    rng: &mut SimpleRng,
) -> Vec<PreviewGroup> {
    let group_size = group_size.clamp(1, PREVIEW_GROUP_SIZE);

    let mut cells: Vec<CellPos> = (0..rows)
        .flat_map(|row| (0..columns).map(move |col| CellPos::new(col, row)))
        .collect();
    rng.shuffle(&mut cells);

    cells
        .chunks(group_size)
        .map(|chunk| chunk.iter().copied().collect())
        .collect()
}

/// Background colors for the win flash, one per frame.
///
/// Starts on the normal background and alternates with the light one, so an
/// odd frame count ends where it began.
pub fn won_flash(frames: u32) -> impl Iterator<Item = Rgb> {
    (0..frames).map(|i| {
        if i % 2 == 0 {
            BACKGROUND
        } else {
            LIGHT_BACKGROUND
        }
    })
}
