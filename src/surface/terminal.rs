//! Full-screen terminal surface
//!
//! Redraws the whole walkthrough on every [`PresentationSurface::present`]:
//! a header with the step counter, the description, every component,
//! connection and message of the script (active ones highlighted), a
//! timeline strip, the control bar and the keyboard hints.

use crate::control::keys::KEYBOARD_HINTS;
use crate::script::{Catalog, Script};
use crate::surface::{AutoPlayStyle, PresentationSurface, Scene};
use console::{style, Emoji, Term};
use std::io;
use tracing::warn;

static ACTIVE: Emoji<'_, '_> = Emoji("● ", "* ");
static INACTIVE: Emoji<'_, '_> = Emoji("○ ", "o ");
static MESSAGE: Emoji<'_, '_> = Emoji("✉ ", "> ");
static PLAYING: Emoji<'_, '_> = Emoji("⏸ ", "");
static PAUSED: Emoji<'_, '_> = Emoji("▶ ", "");

/// Terminal presentation surface
#[derive(Debug)]
pub struct TerminalSurface {
    term: Term,
    scene: Scene,
    catalog: Catalog,
    title: String,
    step_count: usize,
}

impl TerminalSurface {
    /// Create a surface drawing on stdout
    pub fn new(script: &Script) -> Self {
        Self::with_term(Term::stdout(), script)
    }

    pub fn with_term(term: Term, script: &Script) -> Self {
        Self {
            term,
            scene: Scene::new(),
            catalog: script.catalog(),
            title: script.name().to_string(),
            step_count: script.len(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Hide the cursor while the walkthrough owns the screen
    pub fn enter(&self) -> io::Result<()> {
        self.term.hide_cursor()
    }

    /// Build the screen contents for a terminal `width` columns wide
    pub fn render_lines(&self, width: usize) -> Vec<String> {
        let scene = &self.scene;
        let rule = "─".repeat(width.max(1));
        let mut lines = Vec::new();

        let counter = scene.step_counter.unwrap_or(0);
        let total = scene.total_steps.unwrap_or(self.step_count.saturating_sub(1));
        lines.push(format!(
            "{}  {}",
            style(&self.title).bold(),
            style(format!("Step {} / {}", counter, total)).cyan()
        ));
        lines.push(style(&rule).dim().to_string());
        lines.push(scene.description.clone());
        lines.push(String::new());

        lines.push(format!(
            "{:<13}{}",
            "Components:",
            join_items(&self.catalog.components, |id| {
                if scene.is_component_active(id) {
                    style(format!("{}{}", ACTIVE, id)).green().bold().to_string()
                } else {
                    style(format!("{}{}", INACTIVE, id)).dim().to_string()
                }
            })
        ));
        lines.push(format!(
            "{:<13}{}",
            "Connections:",
            join_items(&self.catalog.connections, |id| {
                if scene.is_connection_active(id) {
                    style(format!("━━ {} ━━", id)).cyan().bold().to_string()
                } else {
                    style(format!("── {} ──", id)).dim().to_string()
                }
            })
        ));
        lines.push(format!(
            "{:<13}{}",
            "Messages:",
            join_items(&self.catalog.messages, |id| {
                if scene.is_message_shown(id) {
                    style(format!("{}{}", MESSAGE, id)).yellow().to_string()
                } else {
                    style(format!("· {}", id)).dim().to_string()
                }
            })
        ));
        lines.push(String::new());

        let timeline: Vec<String> = (0..self.step_count)
            .map(|index| {
                if scene.timeline_marker == Some(index) {
                    style(format!("[{}]", index)).cyan().bold().to_string()
                } else {
                    style(index.to_string()).dim().to_string()
                }
            })
            .collect();
        lines.push(format!("{:<13}{}", "Timeline:", timeline.join(" ")));
        lines.push(style(&rule).dim().to_string());

        let next = if scene.next_enabled {
            style("→ Next").green().to_string()
        } else {
            style("→ Next").dim().strikethrough().to_string()
        };
        let auto_play = match scene.auto_play_style {
            AutoPlayStyle::Playing => style(format!("{}{}", PLAYING, scene.auto_play_label))
                .red()
                .bold()
                .to_string(),
            AutoPlayStyle::Paused => style(format!("{}{}", PAUSED, scene.auto_play_label))
                .blue()
                .bold()
                .to_string(),
        };
        lines.push(format!(
            "{}   {}   Speed: {}",
            next,
            auto_play,
            style(&scene.speed_label).cyan()
        ));
        lines.push(String::new());

        lines.push(style("Keyboard Shortcuts").bold().to_string());
        for (keys, action) in KEYBOARD_HINTS {
            lines.push(format!("  {:<12} {}", style(keys).dim(), action));
        }

        lines
    }

    fn draw(&self) -> io::Result<()> {
        let width = term_size::dimensions_stdout()
            .map(|(w, _)| w)
            .unwrap_or(80);
        self.term.clear_screen()?;
        for line in self.render_lines(width) {
            self.term.write_line(&line)?;
        }
        self.term.flush()
    }
}

fn join_items<F>(ids: &[String], format: F) -> String
where
    F: Fn(&str) -> String,
{
    if ids.is_empty() {
        return style("(none)").dim().to_string();
    }
    ids.iter()
        .map(|id| format(id))
        .collect::<Vec<_>>()
        .join("  ")
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = self.term.show_cursor();
    }
}

impl PresentationSurface for TerminalSurface {
    fn set_step_counter(&mut self, index: usize) {
        self.scene.set_step_counter(index);
    }

    fn set_total_steps(&mut self, last_index: usize) {
        self.scene.set_total_steps(last_index);
    }

    fn set_description(&mut self, text: &str) {
        self.scene.set_description(text);
    }

    fn set_timeline_marker(&mut self, index: usize) {
        self.scene.set_timeline_marker(index);
    }

    fn clear_all_visual_state(&mut self) {
        self.scene.clear_all_visual_state();
    }

    fn activate_components(&mut self, ids: &[String]) {
        self.scene.activate_components(ids);
    }

    fn activate_connections(&mut self, ids: &[String]) {
        self.scene.activate_connections(ids);
    }

    fn activate_messages(&mut self, ids: &[String]) {
        self.scene.activate_messages(ids);
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
    }

    fn present(&mut self) {
        if let Err(e) = self.draw() {
            warn!("Failed to redraw walkthrough: {}", e);
        }
    }
}
