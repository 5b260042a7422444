use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use okto_core::{Machine, Step};
use okto_display::{Beeper, Screen};

use crate::keymap::keymap;

/// Runs a program image to completion: halt, window close, Escape, or a
/// fatal fault.
///
/// Each iteration presents the frame if it changed, drains key events,
/// executes one instruction, banks the elapsed wall-clock time into the
/// timers, gates the beeper, and sleeps out the rest of the cycle period.
/// Timer cadence comes from the sampled clock, never from the cycle count,
/// so a slow or fast host does not bend the 60 Hz rate.
pub fn run(rom: &Path, scale: u32, cycle_hz: u32) -> Result<()> {
    let mut machine = Machine::new();

    let image = fs::read(rom).with_context(|| format!("cannot read program {}", rom.display()))?;
    machine.load_program(&image)?;
    info!("loaded {} byte program from {}", image.len(), rom.display());

    let sdl = sdl2::init().map_err(|e| anyhow!(e))?;
    let mut screen = Screen::new(&sdl, scale).map_err(|e| anyhow!(e))?;
    let mut beeper = Beeper::new(&sdl).map_err(|e| anyhow!(e))?;
    let mut events = sdl.event_pump().map_err(|e| anyhow!(e))?;

    let cycle_time = Duration::from_secs(1) / cycle_hz;
    let mut last_cycle = Instant::now();

    'event: loop {
        if let Some(frame) = machine.take_frame() {
            screen.render(&frame).map_err(|e| anyhow!(e))?;
        }

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(id) = keymap(key) {
                        machine.press_key(id);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(id) = keymap(key) {
                        machine.release_key(id);
                    }
                }
                _ => continue,
            };
        }

        match machine.step() {
            Ok(Step::Running) => {}
            Ok(Step::Halted) => {
                info!("program halted");
                break;
            }
            Err(fault) => {
                error!("{}", fault);
                eprintln!("{}", machine);
                return Err(fault).context("execution fault");
            }
        }

        beeper.set_active(machine.sound_active());

        // One clock sample per iteration feeds both the timers and the
        // cycle pacing.
        let now = Instant::now();
        machine.advance_timers(now - last_cycle);
        let elapsed = now - last_cycle;
        if cycle_time > elapsed {
            thread::sleep(cycle_time - elapsed);
        }
        last_cycle = now;
    }

    Ok(())
}
