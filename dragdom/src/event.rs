use crossterm::event::{Event as CrosstermEvent, MouseEventKind};

/// Pointer events as delivered by the embedder's event loop. Every bound
/// controller sees every event; down events are hit-tested against the
/// controller's host, move and up events are global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: u16, y: u16, button: MouseButton },
    Move { x: u16, y: u16 },
    Up { x: u16, y: u16, button: MouseButton },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

// Conversion from crossterm types
impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Convert a raw crossterm event into a pointer event, if it is one.
/// Both plain moves and button-held drags count as moves; scroll wheel
/// and modifier-only events are ignored.
pub fn pointer_event(event: &CrosstermEvent) -> Option<PointerEvent> {
    let CrosstermEvent::Mouse(mouse) = event else {
        return None;
    };
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(button) => Some(PointerEvent::Down {
            x,
            y,
            button: button.into(),
        }),
        MouseEventKind::Drag(_) | MouseEventKind::Moved => Some(PointerEvent::Move { x, y }),
        MouseEventKind::Up(button) => Some(PointerEvent::Up {
            x,
            y,
            button: button.into(),
        }),
        _ => None,
    }
}
