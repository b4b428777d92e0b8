//! macOS virtual-key code (CGKeyCode) table.
//!
//! Key codes are physical key positions per Apple HIToolbox/Events.h and
//! assume an ANSI keyboard. `PrintScreen`, `ScrollLock`, and `Pause` map to
//! F13/F14/F15, the standard extended-keyboard convention. F21–F24 have no
//! standard macOS virtual-key code and return `None`.

use super::Key;

/// Converts a symbolic key name to its macOS CGKeyCode.
pub fn key_to_cgcode(key: Key) -> Option<u16> {
    let code = match key {
        // Letters
        Key::A => 0x00,
        Key::B => 0x0B,
        Key::C => 0x08,
        Key::D => 0x02,
        Key::E => 0x0E,
        Key::F => 0x03,
        Key::G => 0x05,
        Key::H => 0x04,
        Key::I => 0x22,
        Key::J => 0x26,
        Key::K => 0x28,
        Key::L => 0x25,
        Key::M => 0x2E,
        Key::N => 0x2D,
        Key::O => 0x1F,
        Key::P => 0x23,
        Key::Q => 0x0C,
        Key::R => 0x0F,
        Key::S => 0x01,
        Key::T => 0x11,
        Key::U => 0x20,
        Key::V => 0x09,
        Key::W => 0x0D,
        Key::X => 0x07,
        Key::Y => 0x10,
        Key::Z => 0x06,

        // Top-row digits
        Key::Key0 => 0x1D,
        Key::Key1 => 0x12,
        Key::Key2 => 0x13,
        Key::Key3 => 0x14,
        Key::Key4 => 0x15,
        Key::Key5 => 0x17,
        Key::Key6 => 0x16,
        Key::Key7 => 0x1A,
        Key::Key8 => 0x1C,
        Key::Key9 => 0x19,

        // Function keys
        Key::F1 => 0x7A,
        Key::F2 => 0x78,
        Key::F3 => 0x63,
        Key::F4 => 0x76,
        Key::F5 => 0x60,
        Key::F6 => 0x61,
        Key::F7 => 0x62,
        Key::F8 => 0x64,
        Key::F9 => 0x65,
        Key::F10 => 0x6D,
        Key::F11 => 0x67,
        Key::F12 => 0x6F,
        Key::F13 => 0x69,
        Key::F14 => 0x6B,
        Key::F15 => 0x71,
        Key::F16 => 0x6A,
        Key::F17 => 0x40,
        Key::F18 => 0x4F,
        Key::F19 => 0x50,
        Key::F20 => 0x5A,
        Key::F21 | Key::F22 | Key::F23 | Key::F24 => return None,

        // Modifiers
        Key::CtrlLeft => 0x3B,
        Key::CtrlRight => 0x3E,
        Key::ShiftLeft => 0x38,
        Key::ShiftRight => 0x3C,
        Key::AltLeft => 0x3A,
        Key::AltRight => 0x3D,
        Key::MetaLeft => 0x37,
        Key::MetaRight => 0x36,

        // Navigation and editing
        Key::Space => 0x31,
        Key::Enter => 0x24,
        Key::Tab => 0x30,
        Key::Escape => 0x35,
        Key::Backspace => 0x33, // kVK_Delete (Backspace on PC keyboards)
        Key::Delete => 0x75,    // kVK_ForwardDelete
        Key::Insert => 0x72,    // kVK_Help (Insert on PC keyboards)
        Key::Home => 0x73,
        Key::End => 0x77,
        Key::PageUp => 0x74,
        Key::PageDown => 0x79,
        Key::Up => 0x7E,
        Key::Down => 0x7D,
        Key::Left => 0x7B,
        Key::Right => 0x7C,

        // Lock and system keys
        Key::CapsLock => 0x39,
        // kVK_ANSI_KeypadClear acts as NumLock on PC-layout keyboards.
        Key::NumLock => 0x47,
        Key::ScrollLock => 0x6B,  // F14 position
        Key::PrintScreen => 0x69, // F13 position
        Key::Pause => 0x71,       // F15 position

        // Numeric keypad
        Key::Numpad0 => 0x52,
        Key::Numpad1 => 0x53,
        Key::Numpad2 => 0x54,
        Key::Numpad3 => 0x55,
        Key::Numpad4 => 0x56,
        Key::Numpad5 => 0x57,
        Key::Numpad6 => 0x58,
        Key::Numpad7 => 0x59,
        Key::Numpad8 => 0x5B,
        Key::Numpad9 => 0x5C,
        Key::NumpadAdd => 0x45,
        Key::NumpadSub => 0x4E,
        Key::NumpadMul => 0x43,
        Key::NumpadDiv => 0x4B,
        Key::NumpadDecimal => 0x41,
        Key::NumpadEnter => 0x4C,

        // Punctuation / symbol keys
        Key::Backtick => 0x32,
        Key::Minus => 0x1B,
        Key::Equal => 0x18,
        Key::LeftBracket => 0x21,
        Key::RightBracket => 0x1E,
        Key::Backslash => 0x2A,
        Key::Semicolon => 0x29,
        Key::Apostrophe => 0x27,
        Key::Comma => 0x2B,
        Key::Period => 0x2F,
        Key::Slash => 0x2C,
    };
    Some(code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_letter_codes() {
        assert_eq!(key_to_cgcode(Key::A), Some(0x00));
        assert_eq!(key_to_cgcode(Key::B), Some(0x0B));
        assert_eq!(key_to_cgcode(Key::Z), Some(0x06));
    }

    #[test]
    fn spot_check_digit_codes() {
        assert_eq!(key_to_cgcode(Key::Key0), Some(0x1D));
        assert_eq!(key_to_cgcode(Key::Key9), Some(0x19));
    }

    #[test]
    fn spot_check_navigation_keys() {
        assert_eq!(key_to_cgcode(Key::Up), Some(0x7E));
        assert_eq!(key_to_cgcode(Key::Home), Some(0x73));
        assert_eq!(key_to_cgcode(Key::Backspace), Some(0x33));
        assert_eq!(key_to_cgcode(Key::Delete), Some(0x75));
    }

    #[test]
    fn left_and_right_modifiers_have_distinct_codes() {
        assert_ne!(key_to_cgcode(Key::CtrlLeft), key_to_cgcode(Key::CtrlRight));
        assert_ne!(
            key_to_cgcode(Key::ShiftLeft),
            key_to_cgcode(Key::ShiftRight)
        );
        assert_ne!(key_to_cgcode(Key::AltLeft), key_to_cgcode(Key::AltRight));
        assert_ne!(key_to_cgcode(Key::MetaLeft), key_to_cgcode(Key::MetaRight));
    }

    #[test]
    fn f21_f24_have_no_cgcode() {
        for key in [Key::F21, Key::F22, Key::F23, Key::F24] {
            assert_eq!(key_to_cgcode(key), None, "{key:?}");
        }
    }

    #[test]
    fn printscreen_scrolllock_pause_map_to_f13_f14_f15() {
        assert_eq!(key_to_cgcode(Key::PrintScreen), key_to_cgcode(Key::F13));
        assert_eq!(key_to_cgcode(Key::ScrollLock), key_to_cgcode(Key::F14));
        assert_eq!(key_to_cgcode(Key::Pause), key_to_cgcode(Key::F15));
    }
}
