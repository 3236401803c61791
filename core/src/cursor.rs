pub const CURSOR_STYLE: &str = "position: fixed; width: 8px; height: 8px; border-radius: 50%; \
background: rgba(201, 168, 76, 0.7); pointer-events: none; \
z-index: 9999; transition: transform 0.15s ease, opacity 0.3s ease; \
transform: translate(-50%, -50%);";

pub const CURSOR_PRESSED_TRANSFORM: &str = "translate(-50%, -50%) scale(2)";
pub const CURSOR_RELEASED_TRANSFORM: &str = "translate(-50%, -50%) scale(1)";
pub const CURSOR_PRESSED_OPACITY: &str = "0.4";
pub const CURSOR_SHOWN_OPACITY: &str = "1";
pub const CURSOR_HIDDEN_OPACITY: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorEvent {
    Move { x: i32, y: i32 },
    Press,
    Release,
    EnterInteractive,
    LeaveInteractive,
}

/// Inline style properties to overwrite on the cursor element. `None` leaves
/// the property as the previous event set it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorPatch {
    pub left: Option<String>,
    pub top: Option<String>,
    pub transform: Option<&'static str>,
    pub opacity: Option<&'static str>,
}

impl CursorPatch {
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        let mut props = Vec::with_capacity(4);
        if let Some(left) = self.left.as_deref() {
            props.push(("left", left));
        }
        if let Some(top) = self.top.as_deref() {
            props.push(("top", top));
        }
        if let Some(transform) = self.transform {
            props.push(("transform", transform));
        }
        if let Some(opacity) = self.opacity {
            props.push(("opacity", opacity));
        }
        props
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    pub x: i32,
    pub y: i32,
}

impl CursorState {
    pub fn apply(&mut self, event: CursorEvent) -> CursorPatch {
        match event {
            CursorEvent::Move { x, y } => {
                self.x = x;
                self.y = y;
                CursorPatch {
                    left: Some(format!("{x}px")),
                    top: Some(format!("{y}px")),
                    ..CursorPatch::default()
                }
            }
            CursorEvent::Press => CursorPatch {
                transform: Some(CURSOR_PRESSED_TRANSFORM),
                opacity: Some(CURSOR_PRESSED_OPACITY),
                ..CursorPatch::default()
            },
            CursorEvent::Release => CursorPatch {
                transform: Some(CURSOR_RELEASED_TRANSFORM),
                opacity: Some(CURSOR_SHOWN_OPACITY),
                ..CursorPatch::default()
            },
            CursorEvent::EnterInteractive => CursorPatch {
                opacity: Some(CURSOR_HIDDEN_OPACITY),
                ..CursorPatch::default()
            },
            CursorEvent::LeaveInteractive => CursorPatch {
                opacity: Some(CURSOR_SHOWN_OPACITY),
                ..CursorPatch::default()
            },
        }
    }
}
