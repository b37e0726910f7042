use std::path::PathBuf;

use clap::Parser;

use chip8_core::constants::DEFAULT_CYCLES_PER_TICK;

mod audio;
mod input;
mod keymap;
mod run;

/// A CHIP-8 interpreter
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the ROM to run
    rom: PathBuf,

    /// Instructions executed per 60Hz tick
    #[arg(long, default_value_t = DEFAULT_CYCLES_PER_TICK)]
    cycles_per_tick: u32,

    /// Window pixels per CHIP-8 pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Don't open an audio device
    #[arg(long)]
    mute: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    run::run(
        &args.rom,
        &run::Options {
            cycles_per_tick: args.cycles_per_tick,
            scale: args.scale,
            mute: args.mute,
        },
    )
}
