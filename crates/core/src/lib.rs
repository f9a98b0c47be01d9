//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the memory game and nothing else: no
//! terminal, no input devices, no clocks. That keeps it:
//!
//! - **Deterministic**: the same seed deals the same board
//! - **Testable**: the whole state machine runs in plain unit tests
//! - **Portable**: any surface that can draw rectangles can host it
//!
//! # Module Structure
//!
//! - [`config`]: runtime settings and the startup checks ([`ConfigError`])
//! - [`rng`]: seeded LCG used for dealing and preview order
//! - [`board`]: the dealt grid where every icon appears exactly twice
//! - [`layout`]: tile geometry and pixel-to-cell lookup
//! - [`session`]: the reveal/match state machine
//! - [`animation`]: sweep, preview and win-flash frame sequences
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, ClickOutcome, GameSession, SimpleRng};
//!
//! let board = Board::generate(4, 3, &mut SimpleRng::new(12345)).unwrap();
//! let mut game = GameSession::new(board);
//!
//! let first = game.board().cells().next().unwrap();
//! assert_eq!(game.click(first), ClickOutcome::FirstRevealed(first));
//! assert!(game.is_revealed(first));
//! ```

pub mod animation;
pub mod board;
pub mod config;
pub mod layout;
pub mod rng;
pub mod session;

pub use tui_memory_types as types;

pub use animation::{preview_groups, won_flash, PreviewGroup, Sweep, SweepKind};
pub use board::{all_icons, Board};
pub use config::{ConfigError, GameConfig};
pub use layout::Layout;
pub use rng::SimpleRng;
pub use session::{ClickOutcome, GameSession, Phase};
