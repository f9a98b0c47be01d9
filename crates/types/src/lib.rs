//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! from the board logic, the renderer, and the input layer alike.
//!
//! # Board Defaults
//!
//! - **Columns**: 4
//! - **Rows**: 3
//! - **Tile**: 10x5 terminal cells (roughly square with a 2:1 glyph aspect)
//! - **Gap**: 4 columns / 2 rows between tiles
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Frame rate cap |
//! | `ANIMATION_SPEED` | 2 | Cells the cover sweep moves per frame |
//! | `MISMATCH_DELAY_MS` | 1000 | Pause before a mismatched pair is covered |
//! | `WON_FLASH_COUNT` | 13 | Background toggles in the win flash |
//! | `WON_FLASH_MS` | 300 | Duration of each win flash frame |
//! | `WON_DELAY_MS` | 2000 | Pause after the win flash |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Icon, Shape, RED};
//!
//! let a = Icon::new(Shape::Square, RED);
//! let b = Icon::new(Shape::from_str("SQUARE").unwrap(), RED);
//! assert_eq!(a, b);
//! assert_eq!(Shape::Donut.as_str(), "donut");
//! ```

/// Default number of tile columns
pub const DEFAULT_COLUMNS: u16 = 4;

/// Default number of tile rows
pub const DEFAULT_ROWS: u16 = 3;

/// Tile width in terminal cells
pub const TILE_WIDTH: u16 = 10;

/// Tile height in terminal cells
pub const TILE_HEIGHT: u16 = 5;

/// Horizontal gap between tiles
pub const GAP_X: u16 = 4;

/// Vertical gap between tiles
pub const GAP_Y: u16 = 2;

/// Frame rate cap (frames per second)
pub const FPS: u32 = 30;

/// Speed of the cover/uncover sweep, in cells per frame
pub const ANIMATION_SPEED: u16 = 2;

/// Pause before a mismatched pair is covered again
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Number of background toggles in the win flash
pub const WON_FLASH_COUNT: u32 = 13;

/// Duration of a single win flash frame
pub const WON_FLASH_MS: u32 = 300;

/// Pause after the win flash before play resumes
pub const WON_DELAY_MS: u32 = 2000;

/// Tiles revealed together by the start-of-game preview
pub const PREVIEW_GROUP_SIZE: usize = 8;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GRAY: Rgb = Rgb::new(100, 100, 100);
pub const NAVYBLUE: Rgb = Rgb::new(60, 60, 100);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const ORANGE: Rgb = Rgb::new(255, 128, 0);
pub const PURPLE: Rgb = Rgb::new(255, 0, 255);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);

/// Board background
pub const BACKGROUND: Rgb = NAVYBLUE;

/// Alternate background used by the win flash
pub const LIGHT_BACKGROUND: Rgb = GRAY;

/// Face-down tile color
pub const TILE_COLOR: Rgb = WHITE;

/// Hover highlight around an unrevealed tile
pub const HIGHLIGHT: Rgb = BLUE;

/// Colors an icon can take
pub const ICON_COLORS: [Rgb; 9] = [GRAY, WHITE, RED, GREEN, BLUE, YELLOW, ORANGE, PURPLE, CYAN];

/// The five icon shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Lines,
    Oval,
}

impl Shape {
    /// Every shape, in declaration order
    pub const ALL: [Shape; 5] = [
        Shape::Donut,
        Shape::Square,
        Shape::Diamond,
        Shape::Lines,
        Shape::Oval,
    ];

    /// Parse shape from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Shape;
    ///
    /// assert_eq!(Shape::from_str("donut"), Some(Shape::Donut));
    /// assert_eq!(Shape::from_str("Oval"), Some(Shape::Oval));
    /// assert_eq!(Shape::from_str("triangle"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "donut" => Some(Shape::Donut),
            "square" => Some(Shape::Square),
            "diamond" => Some(Shape::Diamond),
            "lines" => Some(Shape::Lines),
            "oval" => Some(Shape::Oval),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Donut => "donut",
            Shape::Square => "square",
            Shape::Diamond => "diamond",
            Shape::Lines => "lines",
            Shape::Oval => "oval",
        }
    }
}

/// The hidden content of a tile.
///
/// Two icons are equal when both shape and color are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: Rgb,
}

impl Icon {
    pub const fn new(shape: Shape, color: Rgb) -> Self {
        Self { shape, color }
    }
}

/// Number of distinct icons the default palette can produce
pub const ICON_VARIETY: usize = ICON_COLORS.len() * Shape::ALL.len();

/// A board coordinate (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub col: u16,
    pub row: u16,
}

impl CellPos {
    pub const fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

/// A point on the drawing surface; one terminal cell is one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPos {
    pub x: u16,
    pub y: u16,
}

impl PixelPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A released key, reduced to what the games care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Char(char),
    Other,
}

/// Events produced by an event source once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The surface was closed (or Ctrl-C was pressed)
    Quit,
    /// A key stroke completed
    KeyUp(KeyInput),
    /// The pointer moved
    MouseMove(PixelPos),
    /// The primary button was released
    MouseUp(PixelPos),
    /// The surface changed size
    Resize { width: u16, height: u16 },
}
