//! Symbolic key names and per-platform code tables.
//!
//! [`Key`] enumerates every key the hook can name symbolically. The child
//! modules map those names to the raw numeric codes each platform family
//! uses; the codes differ entirely between families, so each family carries
//! its own complete table. Pure data, no logic beyond the lookup.

pub mod macos;
pub mod windows;

/// Symbolic key name, platform-independent.
///
/// Modifier keys carry explicit left/right variants because chord injection
/// must name a concrete physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Top-row digits
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,

    // Function keys
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    // Modifiers, left/right variants
    CtrlLeft, CtrlRight,
    ShiftLeft, ShiftRight,
    AltLeft, AltRight,
    MetaLeft, MetaRight,

    // Navigation and editing
    Space, Enter, Tab, Escape, Backspace, Delete, Insert,
    Home, End, PageUp, PageDown,
    Up, Down, Left, Right,

    // Lock and system keys
    CapsLock, NumLock, ScrollLock, PrintScreen, Pause,

    // Numeric keypad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadAdd, NumpadSub, NumpadMul, NumpadDiv, NumpadDecimal, NumpadEnter,

    // Punctuation / symbol keys (ANSI layout)
    Backtick, Minus, Equal, LeftBracket, RightBracket, Backslash,
    Semicolon, Apostrophe, Comma, Period, Slash,
}
