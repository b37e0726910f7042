/// # Timers
/// Two 8-bit counters that count down towards zero at a fixed 60Hz,
/// regardless of how fast the CPU runs.
/// - while the sound timer is non-zero a tone should be played
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    /// Decrements both timers by one, never going below zero
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}
