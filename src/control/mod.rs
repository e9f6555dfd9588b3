//! Control surface: the inputs a viewer can give the walkthrough

pub mod keys;
pub mod reader;

pub use keys::{Keymap, SpeedSlider, KEYBOARD_HINTS};
pub use reader::spawn_key_reader;

/// A discrete control event dispatched to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    /// Go to the next step
    Advance,
    /// Go back one step
    Retreat,
    /// Stop auto-play and return to the first step
    Reset,
    /// Start or pause auto-play
    ToggleAutoPlay,
    /// New auto-play interval in milliseconds
    SetSpeed(u64),
    /// Show a specific step
    Jump(usize),
    /// End the session
    Quit,
}
