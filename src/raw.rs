//! Raw hook records and event normalization.
//!
//! A [`RawEvent`] is the unnormalized notification an external hook component
//! delivers for each physical input event: a numeric type discriminant,
//! modifier flags, and a kind-specific field bag. [`normalize`] converts one
//! record into exactly one canonical [`InputEvent`], passing fields through
//! verbatim. It is pure and retains no state between calls.
//!
//! Wire discriminants and the wheel direction values follow the hook
//! protocol; see the constants below.

use crate::error::HookError;
use crate::event::{
    EventKind, InputEvent, KeyboardEvent, Modifiers, MouseEvent, WheelDirection, WheelEvent,
};

// ---------------------------------------------------------------------------
// Wire constants
// ---------------------------------------------------------------------------

pub const EVENT_KEY_PRESSED: u32 = 4;
pub const EVENT_KEY_RELEASED: u32 = 5;
pub const EVENT_MOUSE_CLICKED: u32 = 6;
pub const EVENT_MOUSE_PRESSED: u32 = 7;
pub const EVENT_MOUSE_RELEASED: u32 = 8;
pub const EVENT_MOUSE_MOVED: u32 = 9;
/// Drag records are coalesced into moves during normalization; subscribers
/// never observe a distinct drag kind.
pub const EVENT_MOUSE_DRAGGED: u32 = 10;
pub const EVENT_MOUSE_WHEEL: u32 = 11;

/// Wheel direction wire value for vertical scrolling.
pub const WHEEL_VERTICAL: u32 = 3;
/// Wheel direction wire value for horizontal scrolling.
pub const WHEEL_HORIZONTAL: u32 = 4;

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// Unnormalized record from the OS-level hook.
///
/// The discriminant decides which fields are meaningful; the rest are ignored
/// by [`normalize`]. `Default` yields a zeroed record, convenient for
/// building records field by field the way native shims populate them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawEvent {
    /// Type discriminant; one of the `EVENT_*` constants.
    pub event_type: u32,
    /// Hook timestamp in milliseconds, when the platform supplies one.
    pub time: Option<u64>,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Keyboard events only.
    pub keycode: u16,
    /// Mouse and wheel events.
    pub x: i32,
    /// Mouse and wheel events.
    pub y: i32,
    /// Mouse events only; platform-dependent value, passed through untyped.
    pub button: u16,
    /// Mouse and wheel events.
    pub clicks: u16,
    /// Wheel events only.
    pub amount: u16,
    /// Wheel events only; `WHEEL_VERTICAL` or `WHEEL_HORIZONTAL`.
    pub direction: u32,
    /// Wheel events only; signed rotation delta.
    pub rotation: i16,
}

impl RawEvent {
    fn modifiers(&self) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl,
            alt: self.alt,
            shift: self.shift,
            meta: self.meta,
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Converts one raw record into its canonical event.
///
/// Fields are copied verbatim; no validation beyond the discriminant match is
/// performed. Unknown discriminants yield
/// [`HookError::UnrecognizedEventType`], which the dispatcher treats as a
/// droppable record rather than a fault.
pub fn normalize(raw: &RawEvent) -> Result<InputEvent, HookError> {
    let kind = match raw.event_type {
        EVENT_KEY_PRESSED => EventKind::KeyPressed,
        EVENT_KEY_RELEASED => EventKind::KeyReleased,
        EVENT_MOUSE_CLICKED => EventKind::MouseClicked,
        EVENT_MOUSE_PRESSED => EventKind::MousePressed,
        EVENT_MOUSE_RELEASED => EventKind::MouseReleased,
        // Drags carry the same field bag as moves and are reported as moves.
        EVENT_MOUSE_MOVED | EVENT_MOUSE_DRAGGED => EventKind::MouseMoved,
        EVENT_MOUSE_WHEEL => EventKind::MouseWheel,
        other => return Err(HookError::UnrecognizedEventType(other)),
    };

    let event = match kind {
        EventKind::KeyPressed | EventKind::KeyReleased => InputEvent::Keyboard(KeyboardEvent {
            kind,
            time: raw.time,
            modifiers: raw.modifiers(),
            keycode: raw.keycode,
        }),
        EventKind::MouseWheel => InputEvent::Wheel(WheelEvent {
            time: raw.time,
            modifiers: raw.modifiers(),
            x: raw.x,
            y: raw.y,
            clicks: raw.clicks,
            amount: raw.amount,
            // Passthrough, not validation: anything other than the horizontal
            // wire value is reported as vertical.
            direction: if raw.direction == WHEEL_HORIZONTAL {
                WheelDirection::Horizontal
            } else {
                WheelDirection::Vertical
            },
            rotation: raw.rotation,
        }),
        _ => InputEvent::Mouse(MouseEvent {
            kind,
            time: raw.time,
            modifiers: raw.modifiers(),
            x: raw.x,
            y: raw.y,
            button: raw.button,
            clicks: raw.clicks,
        }),
    };

    Ok(event)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
