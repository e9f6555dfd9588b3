//! Presentation surfaces
//!
//! The controller never draws anything itself. It describes what should be
//! visible through the [`PresentationSurface`] trait, and each surface
//! decides how to show it.

pub mod plain;
pub mod scene;
pub mod terminal;

pub use plain::PlainSurface;
pub use scene::Scene;
pub use terminal::TerminalSurface;

use serde::{Deserialize, Serialize};

/// Visual variant of the auto-play control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoPlayStyle {
    /// Auto-play is running; the control offers to pause
    Playing,
    /// Auto-play is stopped; the control offers to play
    #[default]
    Paused,
}

/// Trait for anything that can display a walkthrough
pub trait PresentationSurface {
    /// Display the current step index
    fn set_step_counter(&mut self, index: usize);

    /// Display the terminal index (N-1), once at startup
    fn set_total_steps(&mut self, last_index: usize);

    fn set_description(&mut self, text: &str);

    /// Mark the current step on the timeline strip
    fn set_timeline_marker(&mut self, index: usize);

    /// Deactivate every component, connection and message
    fn clear_all_visual_state(&mut self);

    fn activate_components(&mut self, ids: &[String]);

    fn activate_connections(&mut self, ids: &[String]);

    fn activate_messages(&mut self, ids: &[String]);

    fn set_next_affordance_enabled(&mut self, enabled: bool);

    fn set_auto_play_label(&mut self, label: &str);

    fn set_auto_play_style(&mut self, style: AutoPlayStyle);

    fn set_speed_label(&mut self, label: &str);

    /// Called after each batch of updates so the surface can redraw once
    fn present(&mut self) {}
}
