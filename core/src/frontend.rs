//! The collaborators the interpreter drives once per tick.
//!
//! These abstract the implementation details of the outside world so the
//! interpreter doesn't need to know how pixels are shown, keys are read or
//! tones are made.

use crate::constants::KEY_COUNT;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;

/// Presents the frame buffer, with whatever colours and scaling it likes
pub trait Display {
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Error>;
}

/// Reads the keypad and any request to stop
pub trait Input {
    /// Collects everything that happened since the previous poll; must not block
    fn poll(&mut self) -> Result<Poll, Error>;
}

/// Makes a tone while the sound timer is running
pub trait Audio {
    fn set_active(&mut self, active: bool);
}

/// The result of a single input poll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Poll {
    /// keys that are currently down
    pub held: [bool; KEY_COUNT],
    /// keys that went up since the last poll
    pub released: [bool; KEY_COUNT],
    /// whether the frontend wants the interpreter to stop
    pub stop: bool,
}

/// Audio that never makes a sound
#[derive(Clone, Copy, Debug, Default)]
pub struct Mute;

impl Audio for Mute {
    fn set_active(&mut self, _active: bool) {}
}
