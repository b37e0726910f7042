//! # Chip-8 core
//!
//! The interpreter itself: memory, registers, timers, keypad and frame buffer,
//! the instruction decoder and executor, and the scheduler that drives them at
//! a fixed tick rate. Rendering, keyboards and sound are left to whatever
//! implements the traits in `frontend`.

pub use chip8::Chip8;
pub use error::Error;
pub use framebuffer::FrameBuffer;
pub use instruction::Instruction;
pub use scheduler::{Config, Scheduler};

mod chip8;
pub mod constants;
mod error;
pub mod framebuffer;
pub mod frontend;
pub mod instruction;
pub mod keypad;
pub mod memory;
mod operations;
pub mod registers;
mod scheduler;
pub mod state;
pub mod timers;
