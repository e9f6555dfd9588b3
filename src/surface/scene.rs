//! Headless surface holding exactly what is on screen

use crate::surface::{AutoPlayStyle, PresentationSurface};
use std::collections::BTreeSet;

/// The displayed state of a walkthrough
///
/// `Scene` is a complete [`PresentationSurface`] on its own: it keeps the
/// last value of every output and nothing else. The terminal and plain
/// surfaces draw from one, and tests inspect one directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub step_counter: Option<usize>,
    pub total_steps: Option<usize>,
    pub description: String,
    pub timeline_marker: Option<usize>,
    pub active_components: BTreeSet<String>,
    pub active_connections: BTreeSet<String>,
    pub active_messages: BTreeSet<String>,
    pub next_enabled: bool,
    pub auto_play_label: String,
    pub auto_play_style: AutoPlayStyle,
    pub speed_label: String,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no element is highlighted
    pub fn is_clear(&self) -> bool {
        self.active_components.is_empty()
            && self.active_connections.is_empty()
            && self.active_messages.is_empty()
    }

    pub fn is_component_active(&self, id: &str) -> bool {
        self.active_components.contains(id)
    }

    pub fn is_connection_active(&self, id: &str) -> bool {
        self.active_connections.contains(id)
    }

    pub fn is_message_shown(&self, id: &str) -> bool {
        self.active_messages.contains(id)
    }
}

impl PresentationSurface for Scene {
    fn set_step_counter(&mut self, index: usize) {
        self.step_counter = Some(index);
    }

    fn set_total_steps(&mut self, last_index: usize) {
        self.total_steps = Some(last_index);
    }

    fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
    }

    fn set_timeline_marker(&mut self, index: usize) {
        self.timeline_marker = Some(index);
    }

    fn clear_all_visual_state(&mut self) {
        self.active_components.clear();
        self.active_connections.clear();
        self.active_messages.clear();
    }

    fn activate_components(&mut self, ids: &[String]) {
        self.active_components.extend(ids.iter().cloned());
    }

    fn activate_connections(&mut self, ids: &[String]) {
        self.active_connections.extend(ids.iter().cloned());
    }

    fn activate_messages(&mut self, ids: &[String]) {
        self.active_messages.extend(ids.iter().cloned());
    }

    fn set_next_affordance_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    fn set_auto_play_label(&mut self, label: &str) {
        self.auto_play_label = label.to_string();
    }

    fn set_auto_play_style(&mut self, style: AutoPlayStyle) {
        self.auto_play_style = style;
    }

    fn set_speed_label(&mut self, label: &str) {
        self.speed_label = label.to_string();
    }
}
