use crate::framebuffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::timers::Timers;

/// A snapshot of the Chip-8 internal state
///
/// Every instruction operates on this through an exclusive reference; there is
/// no other machine state anywhere.
///
/// ## Input
/// - Emulation halts while `awaiting_key` names the register that the next released key
///   should be written to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub registers: Registers,
    pub memory: Memory,
    pub timers: Timers,
    pub keypad: Keypad,
    pub frame_buffer: FrameBuffer,
    pub awaiting_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            memory: Memory::new(),
            timers: Timers::default(),
            keypad: Keypad::default(),
            frame_buffer: FrameBuffer::new(),
            awaiting_key: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
