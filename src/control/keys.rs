//! Keyboard bindings

use crate::control::ControlInput;
use crate::script::SpeedRange;
use console::Key;

/// Keys and what they do, as shown in the hints footer
pub const KEYBOARD_HINTS: &[(&str, &str)] = &[
    ("Space or →", "Next step"),
    ("←", "Previous step"),
    ("P", "Play / pause"),
    ("R", "Reset"),
    ("+ / -", "Faster / slower"),
    ("0-9", "Jump to step"),
    ("Q", "Quit"),
];

/// Keyboard stand-in for a range input
///
/// Like the slider it replaces, it can only ever produce values inside its
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedSlider {
    range: SpeedRange,
    value: u64,
}

impl SpeedSlider {
    pub fn new(range: SpeedRange, value: u64) -> Self {
        Self {
            range,
            value: range.clamp(value),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn faster(&mut self) -> u64 {
        self.value = self.range.faster(self.value);
        self.value
    }

    pub fn slower(&mut self) -> u64 {
        self.value = self.range.slower(self.value);
        self.value
    }
}

/// Maps terminal keys to control inputs
#[derive(Debug, Clone)]
pub struct Keymap {
    slider: SpeedSlider,
    step_count: usize,
}

impl Keymap {
    pub fn new(slider: SpeedSlider, step_count: usize) -> Self {
        Self { slider, step_count }
    }

    /// Translate a key press, or `None` for keys without a binding
    pub fn map(&mut self, key: &Key) -> Option<ControlInput> {
        match key {
            Key::ArrowRight | Key::Enter | Key::Char(' ') => Some(ControlInput::Advance),
            Key::ArrowLeft => Some(ControlInput::Retreat),
            Key::Char('r') | Key::Char('R') => Some(ControlInput::Reset),
            Key::Char('p') | Key::Char('P') => Some(ControlInput::ToggleAutoPlay),
            Key::Char('+') | Key::Char('=') => Some(ControlInput::SetSpeed(self.slider.faster())),
            Key::Char('-') | Key::Char('_') => Some(ControlInput::SetSpeed(self.slider.slower())),
            Key::Char(c) if c.is_ascii_digit() => {
                let index = c.to_digit(10)? as usize;
                (index < self.step_count).then_some(ControlInput::Jump(index))
            }
            Key::Char('q') | Key::Char('Q') | Key::Escape | Key::CtrlC => Some(ControlInput::Quit),
            _ => None,
        }
    }
}
