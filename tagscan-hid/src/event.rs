//! Key edge events derived from consecutive reports

/// Direction of a key edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Key went down
    Pressed,
    /// Key came up
    Released,
}

/// A single press or release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    /// Edge direction
    pub state: KeyState,
    /// Modifier byte of the report that produced a press; 0 on release
    pub modifier: u8,
    /// HID usage code
    pub key_code: u8,
}

impl KeyEvent {
    /// Press edge
    pub const fn pressed(key_code: u8, modifier: u8) -> Self {
        Self {
            state: KeyState::Pressed,
            modifier,
            key_code,
        }
    }

    /// Release edge
    pub const fn released(key_code: u8) -> Self {
        Self {
            state: KeyState::Released,
            modifier: 0,
            key_code,
        }
    }

    /// Returns true for a release edge
    pub fn is_release(&self) -> bool {
        self.state == KeyState::Released
    }
}
