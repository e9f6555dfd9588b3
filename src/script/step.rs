//! Step domain model

use crate::script::config::StepConfig;
use serde::Serialize;

/// A single step of a walkthrough script
///
/// Steps are immutable once the script is loaded. Each one bundles the text
/// shown to the viewer with the visual elements that light up for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Display text for this step
    pub description: String,

    /// Components to highlight
    pub components: Vec<String>,

    /// Connection lines to highlight
    pub connections: Vec<String>,

    /// Message bubbles to reveal
    pub messages: Vec<String>,
}

impl Step {
    /// Create a step with a description and nothing highlighted
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
            connections: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Create a step from a step config
    pub fn from_config(config: &StepConfig) -> Self {
        Self {
            description: config.description.trim().to_string(),
            components: config.components.clone(),
            connections: config.connections.clone(),
            messages: config.messages.clone(),
        }
    }

    pub fn with_components<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_connections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connections = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_messages<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Check if the step highlights nothing at all
    pub fn is_blank(&self) -> bool {
        self.components.is_empty() && self.connections.is_empty() && self.messages.is_empty()
    }
}
