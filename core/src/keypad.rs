use crate::constants::KEY_COUNT;

/// Current down/up state of the 16-key input device.
///
/// The driver feeds key transitions in; the engine only ever reads the
/// boolean state. Key ids are taken mod 16 since they come from register
/// values.
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            keys: [false; KEY_COUNT],
        }
    }

    pub fn press(&mut self, key: u8) {
        self.keys[(key & 0x0F) as usize] = true;
    }

    pub fn release(&mut self, key: u8) {
        self.keys[(key & 0x0F) as usize] = false;
    }

    pub fn is_down(&self, key: u8) -> bool {
        self.keys[(key & 0x0F) as usize]
    }

    /// The lowest-id key currently down, if any. Lowest-id-wins keeps the
    /// blocking key read deterministic under simultaneous presses.
    pub fn first_down(&self) -> Option<u8> {
        self.keys.iter().position(|&down| down).map(|key| key as u8)
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
