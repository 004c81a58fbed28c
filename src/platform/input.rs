//! Discrete key events pushed by the host

/// Physical keys on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Center/OK button
    Action,
    Back,
}

/// Event phase. Repeat is sent periodically while a key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Press,
    Release,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub key: Key,
    pub phase: Phase,
}

impl InputEvent {
    pub const fn new(key: Key, phase: Phase) -> Self {
        Self { key, phase }
    }

    pub const fn press(key: Key) -> Self {
        Self::new(key, Phase::Press)
    }

    pub const fn release(key: Key) -> Self {
        Self::new(key, Phase::Release)
    }

    pub const fn repeat(key: Key) -> Self {
        Self::new(key, Phase::Repeat)
    }
}
