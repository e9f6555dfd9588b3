//! Test: the session loop serializing inputs and timers

use crate::helpers::*;
use tokio::sync::mpsc;
use walkthrough::script::PlaybackConfig;
use walkthrough::surface::PlainSurface;
use walkthrough::{ControlInput, Controller, Script, Walkthrough};

#[tokio::test(start_paused = true)]
async fn test_run_applies_inputs_until_quit() {
    let (controller, timers) = Controller::new(three_step_script(), RecordingSurface::default());
    let mut walkthrough = Walkthrough::new(controller, timers);

    let (sender, inputs) = mpsc::channel(8);
    let driver = tokio::spawn(async move {
        sender.send(ControlInput::Advance).await.unwrap();
        sender.send(ControlInput::Advance).await.unwrap();
        sender.send(ControlInput::Advance).await.unwrap();
        sender.send(ControlInput::Retreat).await.unwrap();
        sender.send(ControlInput::Quit).await.unwrap();
    });

    walkthrough.run(inputs).await;
    driver.await.unwrap();

    let controller = walkthrough.controller();
    assert_eq!(controller.current_index(), 1);
    assert!(!controller.is_auto_playing());
}

#[tokio::test(start_paused = true)]
async fn test_run_ends_when_inputs_close() {
    let (controller, timers) = Controller::new(three_step_script(), RecordingSurface::default());
    let mut walkthrough = Walkthrough::new(controller, timers);

    let (sender, inputs) = mpsc::channel(8);
    sender.send(ControlInput::ToggleAutoPlay).await.unwrap();
    drop(sender);

    walkthrough.run(inputs).await;
    assert!(!walkthrough.controller().is_auto_playing());
}

#[tokio::test(start_paused = true)]
async fn test_run_to_end_shows_final_step() {
    let (controller, timers) = Controller::new(three_step_script(), RecordingSurface::default());
    let mut walkthrough = Walkthrough::new(controller, timers);

    walkthrough.run_to_end().await;

    let controller = walkthrough.controller();
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.is_auto_playing());
    let scene = &controller.surface().scene;
    assert!(scene.is_component_active("client"));
    assert!(scene.is_connection_active("line1"));
    assert!(!scene.next_enabled);
}

/// A step's highlights can lose the race with the next tick; the run still
/// ends only after the final step lights up
#[tokio::test(start_paused = true)]
async fn test_run_to_end_waits_for_final_highlights_when_pulse_matches_interval() {
    let playback = PlaybackConfig {
        interval_ms: 500,
        activation_delay_ms: 500,
        ..PlaybackConfig::default()
    };
    let script = three_step_script().with_playback(playback);
    let (controller, timers) = Controller::new(script, RecordingSurface::default());
    let mut walkthrough = Walkthrough::new(controller, timers);

    walkthrough.run_to_end().await;

    let controller = walkthrough.controller();
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.has_pending_activation());
    let surface = controller.surface();
    assert!(surface.scene.is_component_active("host"));
    assert!(surface.scene.is_component_active("client"));
    assert!(surface.scene.is_connection_active("line1"));
    assert_eq!(
        surface.calls.last(),
        Some(&SurfaceCall::Present),
        "final highlights were never presented"
    );
    assert!(surface
        .calls
        .contains(&SurfaceCall::Components(ids(&["host", "client"]))));
}

#[tokio::test(start_paused = true)]
async fn test_builtin_script_plays_through_plain_surface() {
    let script = Script::builtin().unwrap();
    let surface = PlainSurface::hidden(&script);
    let (controller, timers) = Controller::new(script, surface);
    let mut walkthrough = Walkthrough::new(controller, timers);

    walkthrough.run_to_end().await;

    let surface = walkthrough.into_controller().into_surface();
    let step_lines = surface
        .transcript()
        .iter()
        .filter(|line| console::strip_ansi_codes(line).starts_with('['))
        .count();
    assert_eq!(step_lines, 11);
    assert_eq!(surface.scene().step_counter, Some(10));
    assert!(surface.scene().is_component_active("external"));
}
