use std::path::PathBuf;

use clap::Parser;

use okto_core::constants::DEFAULT_CYCLE_HZ;

mod keymap;
mod run;

/// CHIP-8 virtual machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pre-assembled program image to run
    rom: PathBuf,

    /// Window size multiplier per framebuffer pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// CPU clock in instructions per second
    #[arg(long, default_value_t = DEFAULT_CYCLE_HZ)]
    cycle_hz: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    run::run(&args.rom, args.scale, args.cycle_hz)
}
