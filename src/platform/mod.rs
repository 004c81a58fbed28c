//! Platform abstraction layer
//!
//! The narrow surface the host device provides:
//! - Input events (key + press/release/repeat)
//! - Haptic feedback
//! - A scripted input tape for headless runs

pub mod haptics;
pub mod input;
pub mod script;

pub use haptics::{Haptics, LogHaptics, NoHaptics};
pub use input::{InputEvent, Key, Phase};
pub use script::InputScript;
