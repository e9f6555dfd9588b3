//! Walkthrough scripts
//!
//! A script is the fixed, ordered list of steps the controller walks
//! through. Scripts are loaded from YAML (or the built-in one) and never
//! change after loading.

pub mod config;
pub mod error;
pub mod step;

pub use config::{PlaybackConfig, ScriptConfig, SpeedRange};
pub use error::ScriptError;
pub use step::Step;

/// An ordered, read-only walkthrough script with at least two steps
#[derive(Debug, Clone)]
pub struct Script {
    name: String,
    steps: Vec<Step>,
    playback: PlaybackConfig,
}

/// Every highlightable identifier of a script, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub components: Vec<String>,
    pub connections: Vec<String>,
    pub messages: Vec<String>,
}

impl Script {
    /// Create a script with default playback settings
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Result<Self, ScriptError> {
        if steps.len() < 2 {
            return Err(ScriptError::TooFewSteps(steps.len()));
        }
        Ok(Self {
            name: name.into(),
            steps,
            playback: PlaybackConfig::default(),
        })
    }

    /// Create a script from an already validated config
    pub fn from_config(config: &ScriptConfig) -> Self {
        Self {
            name: config.name.clone(),
            steps: config.steps.iter().map(Step::from_config).collect(),
            playback: config.playback,
        }
    }

    /// Load the built-in script
    pub fn builtin() -> Result<Self, ScriptError> {
        Ok(ScriptConfig::builtin()?.to_script())
    }

    pub fn with_playback(mut self, playback: PlaybackConfig) -> Self {
        self.playback = playback;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The terminal index (N-1)
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Collect every identifier the script ever highlights
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();
        for step in &self.steps {
            extend_unique(&mut catalog.components, &step.components);
            extend_unique(&mut catalog.connections, &step.connections);
            extend_unique(&mut catalog.messages, &step.messages);
        }
        catalog
    }
}

fn extend_unique(target: &mut Vec<String>, ids: &[String]) {
    for id in ids {
        if !target.contains(id) {
            target.push(id.clone());
        }
    }
}
