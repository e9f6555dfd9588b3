//! Line-oriented surface for non-interactive runs

use crate::script::Script;
use crate::surface::{AutoPlayStyle, PresentationSurface, Scene};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Prints one line per step above a progress bar
///
/// Every line written is also kept in [`PlainSurface::transcript`].
pub struct PlainSurface {
    scene: Scene,
    progress: ProgressBar,
    transcript: Vec<String>,
    printed_step: Option<usize>,
    activated: bool,
}

impl PlainSurface {
    /// Create a surface with a visible progress bar
    pub fn new(script: &Script) -> Self {
        let progress = ProgressBar::new(script.last_index() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self::with_progress(progress)
    }

    /// Create a surface whose progress bar draws nowhere
    pub fn hidden(script: &Script) -> Self {
        Self::with_progress(ProgressBar::hidden().with_position(0).with_message(script.name().to_string()))
    }

    fn with_progress(progress: ProgressBar) -> Self {
        Self {
            scene: Scene::new(),
            progress,
            transcript: Vec::new(),
            printed_step: None,
            activated: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn finish(&self) {
        self.progress.finish_with_message("done");
    }

    fn print(&mut self, line: String) {
        self.progress.println(&line);
        self.transcript.push(line);
    }

    fn highlights_line(&self) -> Option<String> {
        let scene = &self.scene;
        if scene.is_clear() {
            return None;
        }
        let mut parts = Vec::new();
        if !scene.active_components.is_empty() {
            parts.push(join(&scene.active_components));
        }
        if !scene.active_connections.is_empty() {
            parts.push(join(&scene.active_connections));
        }
        if !scene.active_messages.is_empty() {
            parts.push(join(&scene.active_messages));
        }
        Some(format!("    {}", style(parts.join(" · ")).dim()))
    }
}

fn join<'a>(ids: impl IntoIterator<Item = &'a String>) -> String {
    ids.into_iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl PresentationSurface for PlainSurface {
    fn set_step_counter(&mut self, index: usize) {
        self.scene.set_step_counter(index);
    }

    fn set_total_steps(&mut self, last_index: usize) {
        self.scene.set_total_steps(last_index);
        self.progress.set_length(last_index as u64);
    }

    fn set_description(&mut self, text: &str) {
        self.scene.set_description(text);
    }

    fn set_timeline_marker(&mut self, index: usize) {
        self.scene.set_timeline_marker(index);
    }

    fn clear_all_visual_state(&mut self) {
        self.scene.clear_all_visual_state();
        self.activated = false;
    }

    fn activate_components(&mut self, ids: &[String]) {
        self.scene.activate_components(ids);
        self.activated = true;
    }

    fn activate_connections(&mut self, ids: &[String]) {
        self.scene.activate_connections(ids);
        self.activated = true;
    }

    fn activate_messages(&mut self, ids: &[String]) {
        self.scene.activate_messages(ids);
        self.activated = true;
    }

    fn set_next_affordance_enabled(&mut self, enabled: bool) {
        self.scene.set_next_affordance_enabled(enabled);
    }

    fn set_auto_play_label(&mut self, label: &str) {
        self.scene.set_auto_play_label(label);
    }

    fn set_auto_play_style(&mut self, style: AutoPlayStyle) {
        self.scene.set_auto_play_style(style);
    }

    fn set_speed_label(&mut self, label: &str) {
        self.scene.set_speed_label(label);
        self.progress.set_message(label.to_string());
    }

    fn present(&mut self) {
        let Some(index) = self.scene.step_counter else {
            return;
        };

        if self.printed_step != Some(index) {
            let total = self.scene.total_steps.unwrap_or(0);
            let line = format!(
                "[{}/{}] {}",
                style(index).cyan(),
                style(total).dim(),
                self.scene.description
            );
            self.print(line);
            self.printed_step = Some(index);
            self.progress.set_position(index as u64);
        }

        if self.activated {
            if let Some(line) = self.highlights_line() {
                self.print(line);
            }
            self.activated = false;
        }
    }
}
