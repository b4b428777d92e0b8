//! Canonical event model and subscription channels.
//!
//! Every raw record the hook delivers is normalized into one of three
//! [`InputEvent`] shapes (keyboard, mouse, wheel). The shape, its kind tag,
//! and its populated fields always agree: no event carries fields from a
//! different shape.
//!
//! Modifier flags reflect the OS-reported key state at the instant of the
//! event, not any bookkeeping done by the injection side.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Kinds and modifiers
// ---------------------------------------------------------------------------

/// Canonical kind tag, one per recognized hook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    KeyPressed,
    KeyReleased,
    MouseClicked,
    MousePressed,
    MouseReleased,
    MouseMoved,
    MouseWheel,
}

/// Modifier key state captured with each event. Each flag is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

/// Scroll axis of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelDirection {
    Vertical,
    Horizontal,
}

// ---------------------------------------------------------------------------
// Event shapes
// ---------------------------------------------------------------------------

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyboardEvent {
    /// `KeyPressed` or `KeyReleased`.
    pub kind: EventKind,
    /// Hook-reported timestamp in milliseconds, when available.
    pub time: Option<u64>,
    pub modifiers: Modifiers,
    /// Platform-defined key code, opaque to this layer.
    pub keycode: u16,
}

/// A mouse click, press, release, or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MouseEvent {
    /// `MouseClicked`, `MousePressed`, `MouseReleased`, or `MouseMoved`.
    pub kind: EventKind,
    pub time: Option<u64>,
    pub modifiers: Modifiers,
    pub x: i32,
    pub y: i32,
    /// Platform-dependent button identifier, passed through untyped.
    pub button: u16,
    pub clicks: u16,
}

/// A scroll wheel movement. Kind is always `MouseWheel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WheelEvent {
    pub time: Option<u64>,
    pub modifiers: Modifiers,
    pub x: i32,
    pub y: i32,
    pub clicks: u16,
    /// Scroll amount per notch, as reported by the OS.
    pub amount: u16,
    pub direction: WheelDirection,
    /// Signed rotation delta; sign indicates scroll direction along the axis.
    pub rotation: i16,
}

/// The normalized, kind-tagged event emitted to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InputEvent {
    Keyboard(KeyboardEvent),
    Mouse(MouseEvent),
    Wheel(WheelEvent),
}

impl InputEvent {
    /// Returns the canonical kind tag of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Keyboard(e) => e.kind,
            InputEvent::Mouse(e) => e.kind,
            InputEvent::Wheel(_) => EventKind::MouseWheel,
        }
    }

    /// Returns the modifier flags captured with this event.
    pub fn modifiers(&self) -> Modifiers {
        match self {
            InputEvent::Keyboard(e) => e.modifiers,
            InputEvent::Mouse(e) => e.modifiers,
            InputEvent::Wheel(e) => e.modifiers,
        }
    }

    /// Fixed lookup from event kind to the one type-specific channel this
    /// event is published on (in addition to [`Channel::Input`]).
    pub fn channel(&self) -> Channel {
        match self.kind() {
            EventKind::KeyPressed => Channel::KeyDown,
            EventKind::KeyReleased => Channel::KeyUp,
            EventKind::MouseClicked => Channel::Click,
            EventKind::MousePressed => Channel::MouseDown,
            EventKind::MouseReleased => Channel::MouseUp,
            EventKind::MouseMoved => Channel::MouseMove,
            EventKind::MouseWheel => Channel::Wheel,
        }
    }
}

// ---------------------------------------------------------------------------
// Subscription channels
// ---------------------------------------------------------------------------

/// Named subscription topic. `Input` receives every event; the others receive
/// exactly the events their name implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Input,
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    MouseMove,
    Click,
    Wheel,
}

impl Channel {
    /// Every channel, in the order the public enumeration fixes.
    pub const ALL: [Channel; 8] = [
        Channel::Input,
        Channel::KeyDown,
        Channel::KeyUp,
        Channel::MouseDown,
        Channel::MouseUp,
        Channel::MouseMove,
        Channel::Click,
        Channel::Wheel,
    ];

    /// The channel's wire name, stable across releases.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Input => "input",
            Channel::KeyDown => "keydown",
            Channel::KeyUp => "keyup",
            Channel::MouseDown => "mousedown",
            Channel::MouseUp => "mouseup",
            Channel::MouseMove => "mousemove",
            Channel::Click => "click",
            Channel::Wheel => "wheel",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_kinds_map_to_key_channels() {
        for (kind, channel) in [
            (EventKind::KeyPressed, Channel::KeyDown),
            (EventKind::KeyReleased, Channel::KeyUp),
        ] {
            let event = InputEvent::Keyboard(KeyboardEvent {
                kind,
                time: None,
                modifiers: Modifiers::default(),
                keycode: 65,
            });
            assert_eq!(event.channel(), channel, "{kind:?}");
        }
    }

    #[test]
    fn mouse_kinds_map_to_mouse_channels() {
        for (kind, channel) in [
            (EventKind::MouseClicked, Channel::Click),
            (EventKind::MousePressed, Channel::MouseDown),
            (EventKind::MouseReleased, Channel::MouseUp),
            (EventKind::MouseMoved, Channel::MouseMove),
        ] {
            let event = InputEvent::Mouse(MouseEvent {
                kind,
                time: None,
                modifiers: Modifiers::default(),
                x: 0,
                y: 0,
                button: 0,
                clicks: 0,
            });
            assert_eq!(event.channel(), channel, "{kind:?}");
        }
    }

    #[test]
    fn wheel_variant_maps_to_wheel_channel() {
        let event = InputEvent::Wheel(WheelEvent {
            time: None,
            modifiers: Modifiers::default(),
            x: 0,
            y: 0,
            clicks: 0,
            amount: 3,
            direction: WheelDirection::Vertical,
            rotation: -1,
        });
        assert_eq!(event.kind(), EventKind::MouseWheel);
        assert_eq!(event.channel(), Channel::Wheel);
    }

    #[test]
    fn channel_names_match_public_enumeration() {
        let names: Vec<&str> = Channel::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            [
                "input",
                "keydown",
                "keyup",
                "mousedown",
                "mouseup",
                "mousemove",
                "click",
                "wheel"
            ]
        );
    }

    #[test]
    fn modifiers_default_to_all_clear() {
        let m = Modifiers::default();
        assert!(!m.ctrl && !m.alt && !m.shift && !m.meta);
    }

    #[test]
    fn keyboard_event_serializes_flat() {
        let event = InputEvent::Keyboard(KeyboardEvent {
            kind: EventKind::KeyPressed,
            time: Some(12),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            keycode: 65,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "key_pressed");
        assert_eq!(json["keycode"], 65);
        assert_eq!(json["modifiers"]["ctrl"], true);
    }
}
