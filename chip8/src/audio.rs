use log::warn;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8_core::frontend::Audio;
use chip8_core::Error;

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;
const SAMPLE_RATE: i32 = 44_100;

/// A square wave generator
struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// Plays a constant tone while the sound timer is running
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    active: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, Error> {
        let audio_subsystem = sdl.audio().map_err(Error::Frontend)?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| SquareWave {
                phase_inc: TONE_HZ / spec.freq as f32,
                phase: 0.0,
                volume: VOLUME,
            })
            .map_err(Error::Frontend)?;

        Ok(Beeper {
            device,
            active: false,
        })
    }
}

impl Audio for Beeper {
    fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.active = active;
    }
}

/// Falls back to silence if no audio device can be opened
pub fn open(sdl: &sdl2::Sdl) -> Box<dyn Audio> {
    match Beeper::new(sdl) {
        Ok(beeper) => Box::new(beeper),
        Err(e) => {
            warn!("continuing without sound: {}", e);
            Box::new(chip8_core::frontend::Mute)
        }
    }
}
