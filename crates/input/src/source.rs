//! Event sources: the real terminal and a scripted replay.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::map_event;
use crate::types::InputEvent;

/// Produces the events that arrived since the previous frame.
pub trait EventSource {
    /// Never blocks.
    fn drain(&mut self) -> Result<Vec<InputEvent>>;
}

/// Reads pending crossterm events without waiting.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn drain(&mut self) -> Result<Vec<InputEvent>> {
        let mut out = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = map_event(&event::read()?) {
                out.push(ev);
            }
        }
        Ok(out)
    }
}

/// Replays one scripted batch of events per frame.
///
/// Once the script runs out every frame yields [`InputEvent::Quit`], so a
/// game loop driven by it always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
    drained: usize,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a batch for the next unscripted frame.
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = InputEvent>) -> &mut Self {
        self.frames.push_back(events.into_iter().collect());
        self
    }

    /// Queue an empty frame.
    pub fn idle(&mut self) -> &mut Self {
        self.frames.push_back(Vec::new());
        self
    }

    /// Frames handed out so far
    pub fn drained(&self) -> usize {
        self.drained
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn drain(&mut self) -> Result<Vec<InputEvent>> {
        self.drained += 1;
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelPos;

    #[test]
    fn scripted_events_replay_in_order_then_quit() {
        let mut src = ScriptedEvents::new();
        src.push_frame([InputEvent::MouseMove(PixelPos::new(1, 1))])
            .idle();

        assert_eq!(
            src.drain().unwrap(),
            vec![InputEvent::MouseMove(PixelPos::new(1, 1))]
        );
        assert!(src.drain().unwrap().is_empty());
        assert_eq!(src.drain().unwrap(), vec![InputEvent::Quit]);
        assert_eq!(src.drained(), 3);
        assert_eq!(src.remaining(), 0);
    }
}
