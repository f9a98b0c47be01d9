//! Mapping from crossterm events to game input events.

use crate::types::{InputEvent, KeyInput, PixelPos};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Translate one terminal event. Events the games ignore map to `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Map a key event.
///
/// Most terminals never report key releases, so a press is taken as the
/// completed stroke. Repeats and (rare) releases are dropped so a key is never
/// counted twice.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }
    let key = match key.code {
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Char(c) => KeyInput::Char(c),
        _ => KeyInput::Other,
    };
    Some(InputEvent::KeyUp(key))
}

/// Map a mouse event; x comes from the column and y from the row.
pub fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let pos = PixelPos::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::MouseMove(pos)),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::MouseUp(pos)),
        _ => None,
    }
}

/// Check if an event should end the program.
pub fn should_quit(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Quit
            | InputEvent::KeyUp(KeyInput::Escape)
            | InputEvent::KeyUp(KeyInput::Char('q'))
            | InputEvent::KeyUp(KeyInput::Char('Q'))
    )
}

/// Check if an event asks for a fresh board.
pub fn is_restart(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::KeyUp(KeyInput::Char('r')) | InputEvent::KeyUp(KeyInput::Char('R'))
    )
}
