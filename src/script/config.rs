//! Walkthrough script configuration from YAML

use crate::script::{Script, ScriptError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// The script shipped with the binary
const BUILTIN_SCRIPT: &str = include_str!("../../scripts/mcp.yaml");

/// Element identifiers: a letter followed by letters, digits, `_` or `-`
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_-]*$";

/// Top-level script configuration loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Script name
    pub name: String,

    /// Playback settings
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Ordered walkthrough steps
    pub steps: Vec<StepConfig>,
}

/// Step configuration as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepConfig {
    /// Text shown while the step is current
    pub description: String,

    /// Component identifiers to highlight
    #[serde(default)]
    pub components: Vec<String>,

    /// Connection identifiers to highlight
    #[serde(default)]
    pub connections: Vec<String>,

    /// Message identifiers to reveal
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Auto-play and animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Auto-advance cadence in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Pause between clearing and re-activating elements
    #[serde(default = "default_activation_delay_ms")]
    pub activation_delay_ms: u64,

    /// Range of the speed control
    #[serde(default)]
    pub speed: SpeedRange,
}

fn default_interval_ms() -> u64 {
    1500
}

fn default_activation_delay_ms() -> u64 {
    50
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            activation_delay_ms: default_activation_delay_ms(),
            speed: SpeedRange::default(),
        }
    }
}

impl PlaybackConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }

    /// Validate the playback settings
    pub fn validate(&self) -> Result<(), ScriptError> {
        let speed = &self.speed;
        if speed.min_ms == 0 || speed.step_ms == 0 {
            return Err(ScriptError::InvalidPlayback(
                "speed.min_ms and speed.step_ms must be positive".to_string(),
            ));
        }
        if speed.min_ms > speed.max_ms {
            return Err(ScriptError::InvalidPlayback(format!(
                "speed.min_ms ({}) is greater than speed.max_ms ({})",
                speed.min_ms, speed.max_ms
            )));
        }
        if !speed.contains(self.interval_ms) {
            return Err(ScriptError::InvalidPlayback(format!(
                "interval_ms ({}) is outside the speed range {}..={}",
                self.interval_ms, speed.min_ms, speed.max_ms
            )));
        }
        // Highlights must land before the fastest possible tick re-renders
        if self.activation_delay_ms >= speed.min_ms {
            return Err(ScriptError::InvalidPlayback(format!(
                "activation_delay_ms ({}) must be shorter than speed.min_ms ({})",
                self.activation_delay_ms, speed.min_ms
            )));
        }
        Ok(())
    }
}

/// Bounds of the speed slider, in milliseconds per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedRange {
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,

    #[serde(default = "default_max_ms")]
    pub max_ms: u64,

    #[serde(default = "default_step_ms")]
    pub step_ms: u64,
}

fn default_min_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    3000
}

fn default_step_ms() -> u64 {
    100
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
            step_ms: default_step_ms(),
        }
    }
}

impl SpeedRange {
    pub fn contains(&self, millis: u64) -> bool {
        (self.min_ms..=self.max_ms).contains(&millis)
    }

    /// Clamp a value into the range, like a slider would
    pub fn clamp(&self, millis: u64) -> u64 {
        millis.clamp(self.min_ms, self.max_ms.max(self.min_ms))
    }

    /// One slider notch faster (shorter interval)
    pub fn faster(&self, millis: u64) -> u64 {
        self.clamp(millis.saturating_sub(self.step_ms))
    }

    /// One slider notch slower (longer interval)
    pub fn slower(&self, millis: u64) -> u64 {
        self.clamp(millis.saturating_add(self.step_ms))
    }
}

impl ScriptConfig {
    /// Load script configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse script configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ScriptError> {
        let config: ScriptConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// The script bundled with the binary
    pub fn builtin() -> Result<Self, ScriptError> {
        Self::from_yaml(BUILTIN_SCRIPT)
    }

    /// Validate the script configuration
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.steps.len() < 2 {
            return Err(ScriptError::TooFewSteps(self.steps.len()));
        }

        for (index, step) in self.steps.iter().enumerate() {
            if step.description.trim().is_empty() {
                return Err(ScriptError::EmptyDescription(index));
            }
            check_identifiers(index, "component", &step.components)?;
            check_identifiers(index, "connection", &step.connections)?;
            check_identifiers(index, "message", &step.messages)?;
        }

        self.playback.validate()
    }

    /// Build the runtime script
    pub fn to_script(&self) -> Script {
        Script::from_config(self)
    }
}

fn identifier_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"))
}

fn check_identifiers(step: usize, kind: &'static str, ids: &[String]) -> Result<(), ScriptError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !identifier_regex().is_match(id) {
            return Err(ScriptError::InvalidIdentifier {
                step,
                kind,
                id: id.clone(),
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(ScriptError::DuplicateIdentifier {
                step,
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
