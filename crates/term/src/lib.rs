//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the board is drawn into a plain
//! framebuffer of styled cells (one cell is one pixel), which a [`Present`]
//! implementation then flushes to the terminal or keeps in memory.
//!
//! - [`fb`]: framebuffer plus rect/ellipse/polygon/line primitives
//! - [`game_view`]: tiles, icons, hover highlight, sweep covers, status line
//! - [`renderer`]: diffing crossterm writer and a headless stand-in
//! - [`clock`]: frame-rate cap and feedback delays

pub mod clock;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use clock::{FrameClock, ManualClock, Pacer};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{draw_icon, GameView, Overlay, SweepFrame, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, HeadlessRenderer, Present, TerminalRenderer};
