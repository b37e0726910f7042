use crate::constants::{PROGRAM_START, REGISTER_COUNT, STACK_SIZE};

/// # Register File
///
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting where programs are loaded
///
/// Stack
/// - (sp) an 8-bit stack pointer; always the number of pushed return addresses
/// - 16 slots of 16-bit return addresses
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
        }
    }

    /// Pushes a return address, returning false without touching anything if the stack is full
    pub fn push(&mut self, addr: u16) -> bool {
        let sp = usize::from(self.sp);
        if sp >= STACK_SIZE {
            return false;
        }
        self.stack[sp] = addr;
        self.sp += 1;
        true
    }

    /// Pops the most recent return address, if there is one
    pub fn pop(&mut self) -> Option<u16> {
        if self.sp == 0 {
            return None;
        }
        self.sp -= 1;
        Some(self.stack[usize::from(self.sp)])
    }

    /// Sets VF to 1 or 0
    pub fn set_flag(&mut self, flag: bool) {
        self.v[0xF] = u8::from(flag);
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
