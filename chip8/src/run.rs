use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use log::info;

use chip8_core::frontend::{Audio, Mute};
use chip8_core::{Chip8, Config, Scheduler};
use chip8_display::{Display, Palette};

use crate::audio;
use crate::input::Keyboard;

/// How the executable was asked to run
pub struct Options {
    pub cycles_per_tick: u32,
    pub scale: u32,
    pub mute: bool,
}

pub fn run(rom: &Path, options: &Options) -> anyhow::Result<()> {
    let mut chip8 = Chip8::new();

    // Load ROM
    let file = File::open(rom).with_context(|| format!("unable to open {}", rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", rom.display()))?;
    info!("loaded {}", rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let mut display = Display::new(&sdl, options.scale, Palette::default())?;
    let mut input = Keyboard::new(&sdl)?;
    let mut audio: Box<dyn Audio> = if options.mute {
        Box::new(Mute)
    } else {
        audio::open(&sdl)
    };

    let scheduler = Scheduler::new(Config {
        cycles_per_tick: options.cycles_per_tick,
    });
    scheduler.run(&mut chip8, &mut display, &mut input, audio.as_mut())?;
    Ok(())
}
