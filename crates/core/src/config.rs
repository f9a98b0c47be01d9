//! Game configuration and the startup checks that guard it.

use thiserror::Error;

use crate::types::{
    ANIMATION_SPEED, DEFAULT_COLUMNS, DEFAULT_ROWS, FPS, GAP_X, GAP_Y, ICON_VARIETY,
    MISMATCH_DELAY_MS, PREVIEW_GROUP_SIZE, TILE_HEIGHT, TILE_WIDTH, WON_DELAY_MS,
};

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("the board must have an even number of tiles, got {columns}x{rows} = {cells}")]
    OddCellCount { columns: u16, rows: u16, cells: usize },

    #[error("board is too big for the number of possible icons: {cells} tiles need {needed} distinct icons, only {available} exist")]
    NotEnoughIcons {
        cells: usize,
        needed: usize,
        available: usize,
    },

    #[error("the board must have at least one column and one row, got {columns}x{rows}")]
    EmptyBoard { columns: u16, rows: u16 },

    #[error("tile size must be at least 1x1, got {width}x{height}")]
    ZeroTileSize { width: u16, height: u16 },

    #[error("animation speed must be greater than zero")]
    ZeroAnimationSpeed,

    #[error("frame rate must be greater than zero")]
    ZeroFrameRate,

    #[error("expected {expected} icons for the board, got {actual}")]
    IconCountMismatch { expected: usize, actual: usize },

    #[error("icon {shape} {color:?} appears {count} times, every icon must appear exactly twice")]
    UnpairedIcon {
        shape: &'static str,
        color: (u8, u8, u8),
        count: usize,
    },
}

/// Runtime settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u16,
    pub rows: u16,
    pub tile_width: u16,
    pub tile_height: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    /// Cells the cover sweep moves per frame
    pub animation_speed: u16,
    pub fps: u32,
    pub mismatch_delay_ms: u32,
    pub won_delay_ms: u32,
    pub preview_group_size: usize,
    /// Play the reveal/cover preview when a board is dealt
    pub start_animation: bool,
    /// Deal a fresh board once the current one is won; otherwise the solved
    /// board stays up until a restart
    pub replay_on_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            gap_x: GAP_X,
            gap_y: GAP_Y,
            animation_speed: ANIMATION_SPEED,
            fps: FPS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            won_delay_ms: WON_DELAY_MS,
            preview_group_size: PREVIEW_GROUP_SIZE,
            start_animation: true,
            replay_on_win: false,
        }
    }
}

impl GameConfig {
    pub fn with_grid(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Check every startup invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_grid(self.columns, self.rows, ICON_VARIETY)?;
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::ZeroTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.animation_speed == 0 {
            return Err(ConfigError::ZeroAnimationSpeed);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
}

/// Grid checks shared by config validation and board dealing.
pub(crate) fn check_grid(columns: u16, rows: u16, variety: usize) -> Result<(), ConfigError> {
    let cells = columns as usize * rows as usize;
    if cells == 0 {
        return Err(ConfigError::EmptyBoard { columns, rows });
    }
    if cells % 2 != 0 {
        return Err(ConfigError::OddCellCount {
            columns,
            rows,
            cells,
        });
    }
    let needed = cells / 2;
    if needed > variety {
        return Err(ConfigError::NotEnoughIcons {
            cells,
            needed,
            available: variety,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_config_keeps_solved_board() {
        let config = GameConfig::default();
        assert!(!config.replay_on_win);
        assert!(config.start_animation);
    }

    #[test]
    fn odd_board_is_rejected() {
        let err = GameConfig::default().with_grid(3, 3).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::OddCellCount {
                columns: 3,
                rows: 3,
                cells: 9
            }
        );
        assert!(err.to_string().contains("even number"));
    }

    #[test]
    fn oversized_board_is_rejected() {
        // 10x10 needs 50 distinct icons, the palette has 45.
        let err = GameConfig::default().with_grid(10, 10).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotEnoughIcons {
                cells: 100,
                needed: 50,
                available: 45
            }
        );
    }

    #[test]
    fn largest_board_fits_exactly() {
        assert_eq!(GameConfig::default().with_grid(10, 9).validate(), Ok(()));
    }

    #[test]
    fn zero_sized_settings_are_rejected() {
        assert!(matches!(
            GameConfig::default().with_grid(0, 4).validate(),
            Err(ConfigError::EmptyBoard { .. })
        ));

        let cfg = GameConfig {
            animation_speed: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroAnimationSpeed));

        let cfg = GameConfig {
            tile_width: 0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroTileSize { .. })));

        let cfg = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFrameRate));
    }
}
