//! CLI output formatting

use crate::script::{ScriptConfig, Step};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format one step as a listing line plus its highlights
pub fn format_step(index: usize, step: &Step) -> String {
    let mut line = format!("{:>3}. {}", style(index).cyan(), step.description);

    let highlights = [
        ("components", &step.components),
        ("connections", &step.connections),
        ("messages", &step.messages),
    ];
    for (label, ids) in highlights {
        if !ids.is_empty() {
            line.push_str(&format!(
                "\n     {} {}",
                style(format!("{}:", label)).dim(),
                ids.join(", ")
            ));
        }
    }

    line
}

/// Format the summary printed after a successful validation
pub fn format_script_summary(config: &ScriptConfig) -> String {
    let playback = &config.playback;
    format!(
        "  Name: {}\n  Steps: {}\n  Interval: {}ms (range {}..={}ms, step {}ms)\n  Activation delay: {}ms",
        style(&config.name).bold(),
        style(config.steps.len()).cyan(),
        playback.interval_ms,
        playback.speed.min_ms,
        playback.speed.max_ms,
        playback.speed.step_ms,
        playback.activation_delay_ms
    )
}
