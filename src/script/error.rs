//! Script loading errors

use thiserror::Error;

/// Error types for script loading and validation
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("A script needs at least 2 steps (an intro and a final step), found {0}")]
    TooFewSteps(usize),

    #[error("Step {0} has an empty description")]
    EmptyDescription(usize),

    #[error("Step {step} has an invalid {kind} identifier '{id}'")]
    InvalidIdentifier {
        step: usize,
        kind: &'static str,
        id: String,
    },

    #[error("Step {step} lists {kind} '{id}' more than once")]
    DuplicateIdentifier {
        step: usize,
        kind: &'static str,
        id: String,
    },

    #[error("Invalid playback settings: {0}")]
    InvalidPlayback(String),
}
