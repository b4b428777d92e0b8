//! Windows virtual-key code table.
//!
//! VK codes are from the Windows SDK (winuser.h). Left/right modifiers have
//! distinct VK codes (VK_LCONTROL/VK_RCONTROL, etc.). `NumpadEnter` shares
//! `VK_RETURN` with the main Enter; distinguishing the two at injection time
//! is the injection backend's concern (extended-key flag), not this table's.

use super::Key;

/// Converts a symbolic key name to its Windows virtual-key code.
pub fn key_to_vkcode(key: Key) -> u16 {
    match key {
        // Letters (VK_A = 0x41 .. VK_Z = 0x5A, same as ASCII uppercase)
        Key::A => 0x41,
        Key::B => 0x42,
        Key::C => 0x43,
        Key::D => 0x44,
        Key::E => 0x45,
        Key::F => 0x46,
        Key::G => 0x47,
        Key::H => 0x48,
        Key::I => 0x49,
        Key::J => 0x4A,
        Key::K => 0x4B,
        Key::L => 0x4C,
        Key::M => 0x4D,
        Key::N => 0x4E,
        Key::O => 0x4F,
        Key::P => 0x50,
        Key::Q => 0x51,
        Key::R => 0x52,
        Key::S => 0x53,
        Key::T => 0x54,
        Key::U => 0x55,
        Key::V => 0x56,
        Key::W => 0x57,
        Key::X => 0x58,
        Key::Y => 0x59,
        Key::Z => 0x5A,

        // Top-row digits (VK_0 = 0x30 .. VK_9 = 0x39, same as ASCII)
        Key::Key0 => 0x30,
        Key::Key1 => 0x31,
        Key::Key2 => 0x32,
        Key::Key3 => 0x33,
        Key::Key4 => 0x34,
        Key::Key5 => 0x35,
        Key::Key6 => 0x36,
        Key::Key7 => 0x37,
        Key::Key8 => 0x38,
        Key::Key9 => 0x39,

        // Function keys
        Key::F1 => 0x70,
        Key::F2 => 0x71,
        Key::F3 => 0x72,
        Key::F4 => 0x73,
        Key::F5 => 0x74,
        Key::F6 => 0x75,
        Key::F7 => 0x76,
        Key::F8 => 0x77,
        Key::F9 => 0x78,
        Key::F10 => 0x79,
        Key::F11 => 0x7A,
        Key::F12 => 0x7B,
        Key::F13 => 0x7C,
        Key::F14 => 0x7D,
        Key::F15 => 0x7E,
        Key::F16 => 0x7F,
        Key::F17 => 0x80,
        Key::F18 => 0x81,
        Key::F19 => 0x82,
        Key::F20 => 0x83,
        Key::F21 => 0x84,
        Key::F22 => 0x85,
        Key::F23 => 0x86,
        Key::F24 => 0x87,

        // Modifiers
        Key::CtrlLeft => 0xA2,   // VK_LCONTROL
        Key::CtrlRight => 0xA3,  // VK_RCONTROL
        Key::ShiftLeft => 0xA0,  // VK_LSHIFT
        Key::ShiftRight => 0xA1, // VK_RSHIFT
        Key::AltLeft => 0xA4,    // VK_LMENU
        Key::AltRight => 0xA5,   // VK_RMENU
        Key::MetaLeft => 0x5B,   // VK_LWIN
        Key::MetaRight => 0x5C,  // VK_RWIN

        // Navigation and editing
        Key::Space => 0x20,
        Key::Enter => 0x0D,
        Key::Tab => 0x09,
        Key::Escape => 0x1B,
        Key::Backspace => 0x08,
        Key::Delete => 0x2E,
        Key::Insert => 0x2D,
        Key::Home => 0x24,
        Key::End => 0x23,
        Key::PageUp => 0x21,
        Key::PageDown => 0x22,
        Key::Up => 0x26,
        Key::Down => 0x28,
        Key::Left => 0x25,
        Key::Right => 0x27,

        // Lock and system keys
        Key::CapsLock => 0x14,
        Key::NumLock => 0x90,
        Key::ScrollLock => 0x91,
        Key::PrintScreen => 0x2C,
        Key::Pause => 0x13,

        // Numeric keypad
        Key::Numpad0 => 0x60,
        Key::Numpad1 => 0x61,
        Key::Numpad2 => 0x62,
        Key::Numpad3 => 0x63,
        Key::Numpad4 => 0x64,
        Key::Numpad5 => 0x65,
        Key::Numpad6 => 0x66,
        Key::Numpad7 => 0x67,
        Key::Numpad8 => 0x68,
        Key::Numpad9 => 0x69,
        Key::NumpadAdd => 0x6B,
        Key::NumpadSub => 0x6D,
        Key::NumpadMul => 0x6A,
        Key::NumpadDiv => 0x6F,
        Key::NumpadDecimal => 0x6E,
        // VK_RETURN; the extended-key flag distinguishes keypad enter.
        Key::NumpadEnter => 0x0D,

        // Punctuation / symbol keys (OEM codes, ANSI layout assumed)
        Key::Backtick => 0xC0,
        Key::Minus => 0xBD,
        Key::Equal => 0xBB,
        Key::LeftBracket => 0xDB,
        Key::RightBracket => 0xDD,
        Key::Backslash => 0xDC,
        Key::Semicolon => 0xBA,
        Key::Apostrophe => 0xDE,
        Key::Comma => 0xBC,
        Key::Period => 0xBE,
        Key::Slash => 0xBF,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_letter_codes() {
        assert_eq!(key_to_vkcode(Key::A), 0x41);
        assert_eq!(key_to_vkcode(Key::Z), 0x5A);
    }

    #[test]
    fn spot_check_digit_codes() {
        assert_eq!(key_to_vkcode(Key::Key0), 0x30);
        assert_eq!(key_to_vkcode(Key::Key9), 0x39);
    }

    #[test]
    fn spot_check_function_key_codes() {
        assert_eq!(key_to_vkcode(Key::F1), 0x70);
        assert_eq!(key_to_vkcode(Key::F12), 0x7B);
        assert_eq!(key_to_vkcode(Key::F24), 0x87);
    }

    #[test]
    fn left_and_right_modifiers_have_distinct_codes() {
        assert_ne!(key_to_vkcode(Key::CtrlLeft), key_to_vkcode(Key::CtrlRight));
        assert_ne!(
            key_to_vkcode(Key::ShiftLeft),
            key_to_vkcode(Key::ShiftRight)
        );
        assert_ne!(key_to_vkcode(Key::AltLeft), key_to_vkcode(Key::AltRight));
        assert_ne!(key_to_vkcode(Key::MetaLeft), key_to_vkcode(Key::MetaRight));
    }

    #[test]
    fn numpad_enter_shares_vk_return() {
        assert_eq!(key_to_vkcode(Key::NumpadEnter), key_to_vkcode(Key::Enter));
    }
}
