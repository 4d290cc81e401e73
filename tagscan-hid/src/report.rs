//! HID boot keyboard input report
//!
//! Report layout (8 bytes):
//! - MODIFIER (1 byte): Ctrl/Shift/Alt/GUI bitfield, left then right
//! - RESERVED (1 byte): always 0x00
//! - KEYS (6 bytes): usage codes of the currently pressed non-modifier keys
//!
//! Slot order carries no meaning; a held key may move between slots from one
//! report to the next.

/// Boot keyboard report size in bytes
pub const REPORT_LEN: usize = 8;

/// Number of simultaneous non-modifier key slots
pub const KEY_SLOTS: usize = 6;

/// Highest usage code that is a status value rather than a key
///
/// 0x00 = no event, 0x01 = rollover error, 0x02 = POST fail,
/// 0x03 = undefined error.
pub const KEY_ERROR_UNDEFINED: u8 = 0x03;

/// Modifier bits read by the decoder
pub mod modifier {
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
}

/// Errors when reading a report from raw bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
    /// Fewer than `REPORT_LEN` bytes were delivered
    TooShort {
        /// Number of bytes actually received
        len: usize,
    },
}

/// Parsed boot keyboard report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield
    pub modifier: u8,
    /// Reserved byte
    pub reserved: u8,
    /// Key slots, 0x00 when empty
    pub keys: [u8; KEY_SLOTS],
}

impl KeyboardReport {
    /// Report with no keys held
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keys: [0; KEY_SLOTS],
        }
    }

    /// Build a report from a modifier byte and up to six key codes
    ///
    /// Codes beyond the sixth are ignored.
    pub fn with_keys(modifier: u8, codes: &[u8]) -> Self {
        let mut keys = [0u8; KEY_SLOTS];
        for (slot, &code) in keys.iter_mut().zip(codes) {
            *slot = code;
        }
        Self {
            modifier,
            reserved: 0,
            keys,
        }
    }

    /// Parse a report from the raw interrupt transfer payload
    ///
    /// Trailing bytes past the boot layout are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ReportError> {
        if data.len() < REPORT_LEN {
            return Err(ReportError::TooShort { len: data.len() });
        }

        let mut keys = [0u8; KEY_SLOTS];
        keys.copy_from_slice(&data[2..REPORT_LEN]);

        Ok(Self {
            modifier: data[0],
            reserved: data[1],
            keys,
        })
    }

    /// Key codes currently held, in slot order, skipping status values
    pub fn pressed(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().copied().filter(|&code| is_key(code))
    }

    /// Returns true if no key is held
    pub fn is_empty(&self) -> bool {
        self.pressed().next().is_none()
    }

    /// Returns true if either shift key is held
    pub fn shift(&self) -> bool {
        self.modifier & (modifier::LEFT_SHIFT | modifier::RIGHT_SHIFT) != 0
    }
}

/// Returns true if `code` names a key rather than a status value
#[inline]
pub const fn is_key(code: u8) -> bool {
    code > KEY_ERROR_UNDEFINED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boot_report() {
        let data = [modifier::LEFT_SHIFT, 0, 0x04, 0x05, 0, 0, 0, 0];
        let report = KeyboardReport::from_bytes(&data).unwrap();

        assert_eq!(report.modifier, modifier::LEFT_SHIFT);
        assert_eq!(report.keys, [0x04, 0x05, 0, 0, 0, 0]);
        assert!(report.shift());
    }

    #[test]
    fn test_short_report_rejected() {
        let result = KeyboardReport::from_bytes(&[0, 0, 0x04]);
        assert_eq!(result, Err(ReportError::TooShort { len: 3 }));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let data = [0, 0, 0x1E, 0, 0, 0, 0, 0, 0xFF, 0xFF];
        let report = KeyboardReport::from_bytes(&data).unwrap();
        assert_eq!(report.keys[0], 0x1E);
    }

    #[test]
    fn test_status_codes_are_not_keys() {
        // Rollover error fills every slot with 0x01
        let report = KeyboardReport::with_keys(0, &[0x01; KEY_SLOTS]);
        assert!(report.is_empty());

        let report = KeyboardReport::with_keys(0, &[0x00, 0x03, 0x04]);
        let mut pressed = report.pressed();
        assert_eq!(pressed.next(), Some(0x04));
        assert_eq!(pressed.next(), None);
    }

    #[test]
    fn test_right_shift() {
        let report = KeyboardReport::with_keys(modifier::RIGHT_SHIFT, &[0x04]);
        assert!(report.shift());
        assert!(!KeyboardReport::with_keys(0x01, &[0x04]).shift());
    }
}
