//! Fixed-size set of held key codes

/// Set of key codes currently held down
///
/// One bit per usage code over the whole 0–255 space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySet {
    bits: [u32; 8],
}

impl KeySet {
    /// Empty set
    pub const fn new() -> Self {
        Self { bits: [0; 8] }
    }

    /// Build a set from key codes
    pub fn from_codes(codes: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::new();
        for code in codes {
            set.insert(code);
        }
        set
    }

    /// Mark a key as held
    pub fn insert(&mut self, code: u8) {
        self.bits[(code >> 5) as usize] |= 1 << (code & 0x1F);
    }

    /// Check whether a key is held
    pub fn contains(&self, code: u8) -> bool {
        self.bits[(code >> 5) as usize] & (1 << (code & 0x1F)) != 0
    }

    /// Number of held keys
    pub fn len(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns true if no key is held
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&word| word == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains() {
        let mut set = KeySet::new();
        assert!(set.is_empty());

        set.insert(0x04);
        set.insert(0xFF);
        set.insert(0x04);
        assert!(set.contains(0x04));
        assert!(set.contains(0xFF));
        assert!(!set.contains(0x05));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_codes() {
        let set = KeySet::from_codes([0x2C, 0x04, 0x80, 0x04]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(0x80));
        assert!(!set.contains(0x00));
    }
}
