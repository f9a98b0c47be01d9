//! Terminal input module (engine-facing).
//!
//! Maps crossterm events into [`crate::types::InputEvent`], folds each
//! frame's events into a [`PointerState`], and abstracts where events come
//! from behind [`EventSource`] so the game loop can be driven by a script.

pub mod map;
pub mod pointer;
pub mod source;

pub use tui_memory_types as types;

pub use map::{is_restart, map_event, map_key, map_mouse, should_quit};
pub use pointer::PointerState;
pub use source::{EventSource, ScriptedEvents, TerminalEvents};
