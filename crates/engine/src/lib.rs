//! Game engine: runs the memory game over any surface, clock and event source.
//!
//! [`MemoryGame`] is generic over the three seams so the same loop drives the
//! terminal (`TerminalRenderer`, `FrameClock`, `TerminalEvents`) and headless
//! tests (`HeadlessRenderer`, `ManualClock`, `ScriptedEvents`).

pub mod game;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;

pub use game::{MemoryGame, Step};
