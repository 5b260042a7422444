use std::time::Duration;

use crate::constants::TIMER_TICK;

/// The two 8-bit down-counters, decremented at 60 Hz of wall-clock time.
///
/// The cadence is driven purely by elapsed time the driver reports, never
/// by instruction throughput: a fast interpreter and a slow one decrement
/// at the same rate. Unused elapsed time is banked so short driver
/// iterations still add up to ticks.
pub struct Timers {
    delay: u8,
    sound: u8,
    budget: Duration,
}

impl Timers {
    pub fn new() -> Self {
        Timers {
            delay: 0,
            sound: 0,
            budget: Duration::ZERO,
        }
    }

    /// Banks `elapsed` wall-clock time and decrements both counters once
    /// per full 60 Hz interval it covers, saturating at zero.
    pub fn advance(&mut self, elapsed: Duration) {
        self.budget += elapsed;
        while self.budget >= TIMER_TICK {
            self.budget -= TIMER_TICK;
            self.delay = self.delay.saturating_sub(1);
            self.sound = self.sound.saturating_sub(1);
        }
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    /// The external signal to play a tone.
    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
