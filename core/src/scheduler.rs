use std::thread;
use std::time::{Duration, Instant};

use log::info;

use crate::chip8::Chip8;
use crate::constants::{DEFAULT_CYCLES_PER_TICK, TIMER_RATE_HZ};
use crate::error::Error;
use crate::frontend::{Audio, Display, Input};

/// How fast the interpreter runs
///
/// Only the instruction throughput is tunable; ticks, and with them the
/// timers, always run at `TIMER_RATE_HZ`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// CPU cycles executed per tick
    pub cycles_per_tick: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cycles_per_tick: DEFAULT_CYCLES_PER_TICK,
        }
    }
}

/// The wall-clock length of one tick
pub fn tick_duration() -> Duration {
    Duration::from_secs(1) / TIMER_RATE_HZ
}

/// # Scheduler
/// Drives a Chip8 and its collaborators.
///
/// Each tick, in order:
/// - runs `cycles_per_tick` CPU cycles
/// - decrements the timers once
/// - starts or stops the tone
/// - renders the frame buffer
/// - refreshes the keypad, so instructions only ever see the previous tick's keys
pub struct Scheduler {
    config: Config,
    tick_duration: Duration,
}

impl Scheduler {
    pub fn new(config: Config) -> Self {
        Scheduler {
            config,
            tick_duration: tick_duration(),
        }
    }

    /// Paces ticks faster than real time so `run` can be tested quickly
    #[cfg(test)]
    fn with_tick_duration(config: Config, tick_duration: Duration) -> Self {
        Scheduler {
            config,
            tick_duration,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a single tick, returning whether the input asked to stop
    pub fn tick(
        &self,
        chip8: &mut Chip8,
        display: &mut dyn Display,
        input: &mut dyn Input,
        audio: &mut dyn Audio,
    ) -> Result<bool, Error> {
        for _ in 0..self.config.cycles_per_tick {
            chip8.cycle();
        }
        chip8.tick_timers();
        audio.set_active(chip8.sound_active());
        display.render(chip8.frame())?;

        let poll = input.poll()?;
        chip8.set_keys(poll.held, poll.released);
        Ok(poll.stop)
    }

    /// Ticks until the input asks to stop, sleeping off whatever is left of each tick
    pub fn run(
        &self,
        chip8: &mut Chip8,
        display: &mut dyn Display,
        input: &mut dyn Input,
        audio: &mut dyn Audio,
    ) -> Result<(), Error> {
        info!(
            "running {} cycles per tick at {}Hz",
            self.config.cycles_per_tick, TIMER_RATE_HZ
        );

        let mut ticks: u64 = 0;
        loop {
            let tick_start = Instant::now();
            let stop = self.tick(chip8, display, input, audio)?;
            ticks += 1;
            if stop {
                break;
            }

            let elapsed = tick_start.elapsed();
            if self.tick_duration > elapsed {
                thread::sleep(self.tick_duration - elapsed);
            }
        }

        audio.set_active(false);
        info!("stopped after {} ticks", ticks);
        Ok(())
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
