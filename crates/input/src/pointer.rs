//! Per-frame pointer state.
//!
//! Folds one frame's worth of [`InputEvent`]s into what the game loop asks
//! each frame: where is the pointer, was the button released, should we quit,
//! did the surface change size.

use crate::map::{is_restart, should_quit};
use crate::types::{InputEvent, PixelPos};

#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pos: PixelPos,
    clicked: bool,
    quit: bool,
    restart: bool,
    resize: Option<(u16, u16)>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-frame flags. The pointer position persists.
    pub fn begin_frame(&mut self) {
        self.clicked = false;
        self.restart = false;
        self.resize = None;
    }

    pub fn apply(&mut self, event: &InputEvent) {
        if should_quit(event) {
            self.quit = true;
            return;
        }
        if is_restart(event) {
            self.restart = true;
            return;
        }
        match *event {
            InputEvent::MouseMove(pos) => self.pos = pos,
            InputEvent::MouseUp(pos) => {
                self.pos = pos;
                self.clicked = true;
            }
            InputEvent::Resize { width, height } => self.resize = Some((width, height)),
            _ => {}
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn position(&self) -> PixelPos {
        self.pos
    }

    /// The button was released this frame (at [`PointerState::position`])
    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Sticky: once set it stays set
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn restart_requested(&self) -> bool {
        self.restart
    }

    pub fn resized(&self) -> Option<(u16, u16)> {
        self.resize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeyInput;

    #[test]
    fn test_click_updates_position_and_flag() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::MouseMove(PixelPos::new(3, 4)));
        assert_eq!(p.position(), PixelPos::new(3, 4));
        assert!(!p.clicked());

        p.apply(&InputEvent::MouseUp(PixelPos::new(10, 2)));
        assert_eq!(p.position(), PixelPos::new(10, 2));
        assert!(p.clicked());
    }

    #[test]
    fn test_begin_frame_keeps_position() {
        let mut p = PointerState::new();
        p.apply_all(&[
            InputEvent::MouseUp(PixelPos::new(7, 8)),
            InputEvent::Resize {
                width: 90,
                height: 30,
            },
            InputEvent::KeyUp(KeyInput::Char('r')),
        ]);
        assert_eq!(p.resized(), Some((90, 30)));
        assert!(p.restart_requested());

        p.begin_frame();
        assert!(!p.clicked());
        assert!(!p.restart_requested());
        assert_eq!(p.resized(), None);
        assert_eq!(p.position(), PixelPos::new(7, 8));
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::KeyUp(KeyInput::Escape));
        p.begin_frame();
        assert!(p.quit_requested());
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut p = PointerState::new();
        p.apply(&InputEvent::KeyUp(KeyInput::Char('x')));
        assert!(!p.quit_requested());
        assert!(!p.restart_requested());
        assert!(!p.clicked());
    }
}
