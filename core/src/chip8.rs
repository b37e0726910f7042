use std::io::Read;

use log::{info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::KEY_COUNT;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::operations;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random number generator used by `RND`
///
/// Supplies interfaces for:
/// - loading programs
/// - refreshing the keypad
/// - advancing the CPU and its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A machine whose `RND` results are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Chip8 {
            state: State::new(),
            rng,
        }
    }

    /// Load a program image into memory at 0x200
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Error> {
        self.state.memory.load_program(program)?;
        info!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of a ROM image
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the CPU by a single cycle
    /// - stalls if awaiting a key release
    /// - otherwise fetches, decodes and executes the next instruction
    pub fn cycle(&mut self) {
        if self.state.awaiting_key.is_some() {
            operations::resume_key_wait(&mut self.state);
            return;
        }

        let pc = self.state.registers.pc;
        let word = self.state.memory.read_word(pc);
        let instruction = Instruction::decode(word);
        trace!(
            "{:03X}: {:04X} {:<16} v{:02X?} i{:03X}",
            pc,
            word,
            instruction.to_string(),
            self.state.registers.v,
            self.state.registers.i
        );
        operations::execute(instruction, &mut self.state, &mut self.rng);
    }

    /// Decrements the delay and sound timers
    pub fn tick_timers(&mut self) {
        self.state.timers.tick();
    }

    /// Replace the keypad's state with a fresh poll
    ///
    /// # Arguments
    /// * `held` which keys are currently down
    /// * `released` which keys went up since the last refresh
    pub fn set_keys(&mut self, held: [bool; KEY_COUNT], released: [bool; KEY_COUNT]) {
        self.state.keypad.refresh(held, released);
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
