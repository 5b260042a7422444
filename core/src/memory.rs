use crate::constants::{FONT, GLYPH_HEIGHT, MEMORY_SIZE, PROGRAM_START};
use crate::error::Fault;
use crate::opcode::Opcode;

/// Address of the 5-byte font bitmap for a glyph id. Ids are taken mod 16
/// since only the low nibble of a register can name a glyph.
pub fn glyph_address(glyph: u8) -> u16 {
    u16::from(glyph & 0x0F) * GLYPH_HEIGHT
}

/// The flat 4096-byte store.
///
/// The font glyph table occupies the low bytes; program images start at
/// 0x200. All access is bounds-checked and faults explicitly instead of
/// silently truncating the address.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..FONT.len()].copy_from_slice(&FONT);
        Memory { bytes }
    }

    /// Copies a flat program image to the program region.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), Fault> {
        let max = MEMORY_SIZE - PROGRAM_START as usize;
        if image.len() > max {
            return Err(Fault::ProgramTooLarge { size: image.len(), max });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    pub fn read(&self, addr: u16) -> Result<u8, Fault> {
        self.bytes
            .get(addr as usize)
            .copied()
            .ok_or(Fault::AddressOutOfRange { addr })
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), Fault> {
        match self.bytes.get_mut(addr as usize) {
            Some(byte) => {
                *byte = value;
                Ok(())
            }
            None => Err(Fault::AddressOutOfRange { addr }),
        }
    }

    /// Reads the big-endian instruction word at `addr`.
    pub fn read_word(&self, addr: u16) -> Result<Opcode, Fault> {
        let high = self.read(addr)?;
        let low = self.read(addr + 1)?;
        Ok(Opcode::from_bytes(high, low))
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
