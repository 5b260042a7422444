use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.15;

struct SquareWave {
    phase_inc: f32,
    phase: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 { VOLUME } else { -VOLUME };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Beeper
/// A square-wave tone gated by the engine's sound timer. The engine never
/// synthesizes audio itself; the driver polls its sound state each cycle
/// and starts or stops the tone accordingly.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: TONE_HZ / spec.freq as f32,
            phase: 0.0,
        })?;

        Ok(Beeper {
            device,
            playing: false,
        })
    }

    /// Starts or stops the tone to match the engine's sound state.
    pub fn set_active(&mut self, active: bool) {
        if active == self.playing {
            return;
        }
        if active {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.playing = active;
    }
}
