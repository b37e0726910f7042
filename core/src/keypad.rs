use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
///
/// Tracks which keys are currently held and which were released since the
/// previous refresh. Both are replaced wholesale once per tick by whatever
/// frontend is polling the real keyboard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    held: [bool; KEY_COUNT],
    released: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn refresh(&mut self, held: [bool; KEY_COUNT], released: [bool; KEY_COUNT]) {
        self.held = held;
        self.released = released;
    }

    /// Only the low nibble of `key` is significant
    pub fn is_held(&self, key: u8) -> bool {
        self.held[usize::from(key & 0xF)]
    }

    /// Takes the highest numbered newly released key.
    ///
    /// The remaining releases are discarded so a single release can't satisfy
    /// two key waits within the same tick.
    pub fn take_released(&mut self) -> Option<u8> {
        let key = (0..KEY_COUNT).rev().find(|&k| self.released[k])?;
        self.released = [false; KEY_COUNT];
        u8::try_from(key).ok()
    }
}
