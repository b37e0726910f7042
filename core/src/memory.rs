use crate::constants::{ADDRESS_MASK, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::error::Error;

/// # Memory
/// 4096 bytes of flat addressable memory.
///
/// - `0x000..0x200` is reserved for the interpreter; the sprite sheet lives at the bottom
/// - `0x200..0x1000` holds the loaded program and whatever scratch space it uses
///
/// Every address is masked to 12 bits so a runaway `I` or `PC` wraps around
/// rather than indexing past the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Copies a program image verbatim into memory starting at `PROGRAM_START`.
    ///
    /// Nothing is written if the image doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Error> {
        let start = usize::from(PROGRAM_START);
        let capacity = MEMORY_SIZE - start;
        if program.len() > capacity {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.bytes[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr & ADDRESS_MASK)]
    }

    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[usize::from(addr & ADDRESS_MASK)] = byte;
    }

    /// Instructions are 16 bits but memory is stored as bytes, so two
    /// subsequent bytes are combined with the first as the high byte.
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from(self.read(addr)) << 8 | u16::from(self.read(addr.wrapping_add(1)))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
