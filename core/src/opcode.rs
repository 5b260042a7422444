use std::fmt;

/// One 16-bit big-endian instruction word.
///
/// Every bit pattern is syntactically decodable; the fields here are pure
/// extractions and never fail. Whether a pattern names a real operation is
/// decided later, at dispatch.
///
/// Field layout, most significant nibble first:
/// - `[c___]` class: selects one of 16 operation groups
/// - `[_x__]` x: a register id, or the upper bound of a register range
/// - `[__y_]` y: a second register id
/// - `[___n]` n: a 4-bit immediate (sprite height)
/// - `[__nn]` nn: an 8-bit immediate
/// - `[_nnn]` nnn: a 12-bit address
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Opcode(u16);

impl Opcode {
    /// Assembles the word from the two program bytes at the program counter,
    /// high byte first. This matches the assembler's on-disk byte order.
    pub fn from_bytes(high: u8, low: u8) -> Self {
        Opcode(u16::from(high) << 8 | u16::from(low))
    }

    pub fn word(self) -> u16 {
        self.0
    }

    pub fn class(self) -> u8 {
        (self.0 >> 12) as u8
    }

    pub fn x(self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    pub fn y(self) -> u8 {
        ((self.0 >> 4) & 0x0F) as u8
    }

    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    pub fn nn(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

impl From<u16> for Opcode {
    fn from(word: u16) -> Self {
        Opcode(word)
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode({:#06X})", self.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
