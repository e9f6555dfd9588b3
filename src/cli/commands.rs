//! CLI command definitions

use crate::script::{Script, ScriptConfig, ScriptError};
use clap::Args;

/// Step through a script interactively
#[derive(Debug, Args, Clone)]
pub struct PlayCommand {
    /// Path to script YAML file (defaults to the built-in script)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Auto-play interval in milliseconds
    #[arg(long)]
    pub speed: Option<u64>,

    /// Start auto-playing right away
    #[arg(long)]
    pub autoplay: bool,
}

/// Auto-play a script without keyboard input
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to script YAML file (defaults to the built-in script)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Auto-play interval in milliseconds
    #[arg(long)]
    pub speed: Option<u64>,
}

/// Validate a script file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to script YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// List the steps of a script
#[derive(Debug, Args, Clone)]
pub struct StepsCommand {
    /// Path to script YAML file (defaults to the built-in script)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Load the script at `file`, or the built-in one
pub fn load_config(file: Option<&str>) -> Result<ScriptConfig, ScriptError> {
    match file {
        Some(path) => ScriptConfig::from_file(path),
        None => ScriptConfig::builtin(),
    }
}

/// Build the runtime script, applying a speed override within the slider range
pub fn build_script(config: &ScriptConfig, speed: Option<u64>) -> Script {
    let mut playback = config.playback;
    if let Some(millis) = speed {
        playback.interval_ms = playback.speed.clamp(millis);
    }
    config.to_script().with_playback(playback)
}
