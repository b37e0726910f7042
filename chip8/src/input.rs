use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use chip8_core::frontend::{Input, Poll};
use chip8_core::Error;

use crate::keymap::keymap;

/// Reads the keypad from an SDL2 event pump.
///
/// Held keys come from the keyboard state at poll time, released keys from
/// the `KeyUp` events queued since the previous poll. Closing the window or
/// pressing escape asks the interpreter to stop.
pub struct Keyboard {
    events: EventPump,
}

impl Keyboard {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, Error> {
        let events = sdl.event_pump().map_err(Error::Frontend)?;
        Ok(Keyboard { events })
    }
}

impl Input for Keyboard {
    fn poll(&mut self) -> Result<Poll, Error> {
        let mut poll = Poll::default();

        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    debug!("stop requested");
                    poll.stop = true;
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(code) = keymap(key) {
                        poll.released[usize::from(code)] = true;
                    }
                }
                _ => continue,
            }
        }

        for scancode in self.events.keyboard_state().pressed_scancodes() {
            if let Some(code) = Keycode::from_scancode(scancode).and_then(keymap) {
                poll.held[usize::from(code)] = true;
            }
        }

        Ok(poll)
    }
}
