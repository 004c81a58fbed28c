//! Haptic feedback

/// Fire-and-forget vibration motor
pub trait Haptics {
    /// Buzz once
    fn vibrate_once(&mut self);
}

/// Discards every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate_once(&mut self) {}
}

/// Logs each request and counts them (for hosts without a motor)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics {
    pub count: u32,
}

impl Haptics for LogHaptics {
    fn vibrate_once(&mut self) {
        self.count += 1;
        log::info!("bzzt (haptic #{})", self.count);
    }
}
