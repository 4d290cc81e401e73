//! Usage code to character mapping
//!
//! Scanners configured for a US layout emit lowercase letters and digits.
//! Anything else (punctuation, function keys, shifted input) is dropped;
//! modifiers are not consulted.

/// Usage code of 'a'
pub const KEY_A: u8 = 0x04;
/// Usage code of 'z'
pub const KEY_Z: u8 = 0x1D;
/// Usage code of '1'
pub const KEY_1: u8 = 0x1E;
/// Usage code of '9'
pub const KEY_9: u8 = 0x26;
/// Usage code of '0' (follows '9' on the keyboard row)
pub const KEY_0: u8 = 0x27;
/// Usage code of Enter
pub const KEY_ENTER: u8 = 0x28;
/// Usage code of Tab
pub const KEY_TAB: u8 = 0x2B;
/// Usage code of Space
pub const KEY_SPACE: u8 = 0x2C;

/// Keys that end a scan
pub const TERMINATOR_KEYS: [u8; 3] = [KEY_ENTER, KEY_TAB, KEY_SPACE];

/// What a released key does to the scan in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Commit the buffered characters
    Terminate,
    /// Append a character
    Char(char),
    /// No effect
    Ignore,
}

/// Classify a usage code
pub fn classify(key_code: u8) -> KeyAction {
    if is_terminator(key_code) {
        return KeyAction::Terminate;
    }
    match key_to_char(key_code) {
        Some(ch) => KeyAction::Char(ch),
        None => KeyAction::Ignore,
    }
}

/// Returns true for Enter, Tab and Space
pub fn is_terminator(key_code: u8) -> bool {
    TERMINATOR_KEYS.contains(&key_code)
}

/// Map a usage code to a lowercase letter or digit
pub fn key_to_char(key_code: u8) -> Option<char> {
    match key_code {
        KEY_0 => Some('0'),
        KEY_1..=KEY_9 => Some((b'1' + (key_code - KEY_1)) as char),
        KEY_A..=KEY_Z => Some((b'a' + (key_code - KEY_A)) as char),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(key_to_char(0x27), Some('0'));
        assert_eq!(key_to_char(30), Some('1'));
        assert_eq!(key_to_char(38), Some('9'));
    }

    #[test]
    fn test_letters() {
        assert_eq!(key_to_char(4), Some('a'));
        assert_eq!(key_to_char(29), Some('z'));
        for code in KEY_A..=KEY_Z {
            let ch = key_to_char(code).unwrap();
            assert!(ch.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_unmapped() {
        for code in [0x00, 0x03, 0x2D, 0x39, 0x64, 0xE1, 0xFF] {
            assert_eq!(key_to_char(code), None);
            assert_eq!(classify(code), KeyAction::Ignore);
        }
    }

    #[test]
    fn test_terminators() {
        assert_eq!(classify(KEY_ENTER), KeyAction::Terminate);
        assert_eq!(classify(KEY_TAB), KeyAction::Terminate);
        assert_eq!(classify(KEY_SPACE), KeyAction::Terminate);
        assert_eq!(classify(KEY_A), KeyAction::Char('a'));
    }
}
