//! Test: timer-driven auto-play

use crate::helpers::*;
use std::time::Duration;
use tokio::time::Instant;
use walkthrough::AutoPlayStyle;

/// N-1 simulated ticks walk to the end, then auto-play is off
#[tokio::test]
async fn test_simulated_ticks_reach_end_and_stop() {
    let (mut controller, _timers) = start(numbered_script(5));
    controller.start_auto_play();

    for expected in 1..5 {
        controller.tick();
        assert_eq!(controller.current_index(), expected);
    }
    assert!(!controller.is_auto_playing());

    let mark = controller.surface().mark();
    controller.tick();
    assert_eq!(controller.current_index(), 4);
    assert!(controller.surface().calls_since(mark).is_empty());
}

/// Real timer: ticks land one interval apart and stop at the end
#[tokio::test(start_paused = true)]
async fn test_timer_walks_to_end() {
    let (mut controller, mut timers) = start(three_step_script());
    settle(&mut controller, &mut timers).await;

    let started = Instant::now();
    controller.start_auto_play();
    assert_eq!(controller.surface().scene.auto_play_style, AutoPlayStyle::Playing);
    assert_eq!(controller.surface().scene.auto_play_label, "Pause");

    next_tick(&mut controller, &mut timers).await;
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
    assert_eq!(controller.current_index(), 1);

    next_tick(&mut controller, &mut timers).await;
    assert_eq!(started.elapsed(), Duration::from_millis(3000));
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.is_auto_playing());
    assert_eq!(controller.surface().scene.auto_play_style, AutoPlayStyle::Paused);
}

/// A tick at the terminal index stops auto-play instead of advancing
#[tokio::test]
async fn test_tick_at_end_stops() {
    let (mut controller, _timers) = start(three_step_script());
    controller.jump_to(2);
    controller.start_auto_play();
    assert!(controller.is_auto_playing());

    controller.tick();
    assert_eq!(controller.current_index(), 2);
    assert!(!controller.is_auto_playing());
}

/// Nothing advances once auto-play is stopped
#[tokio::test(start_paused = true)]
async fn test_stop_cancels_timer() {
    let (mut controller, mut timers) = start(numbered_script(6));
    controller.start_auto_play();
    next_tick(&mut controller, &mut timers).await;
    assert_eq!(controller.current_index(), 1);

    controller.stop_auto_play();
    pass_time(&mut controller, &mut timers, Duration::from_secs(10)).await;

    assert_eq!(controller.current_index(), 1);
    assert!(!controller.is_auto_playing());
}

/// Starting twice never leaves two timers running
#[tokio::test(start_paused = true)]
async fn test_restart_replaces_timer() {
    let (mut controller, mut timers) = start(numbered_script(10));
    controller.start_auto_play();
    controller.start_auto_play();

    pass_time(&mut controller, &mut timers, Duration::from_millis(1600)).await;
    assert_eq!(controller.current_index(), 1);
}

/// Reset stops auto-play and returns to the start
#[tokio::test(start_paused = true)]
async fn test_reset_while_playing() {
    let (mut controller, mut timers) = start(numbered_script(6));
    controller.toggle_auto_play();
    next_tick(&mut controller, &mut timers).await;
    next_tick(&mut controller, &mut timers).await;
    assert_eq!(controller.current_index(), 2);

    controller.reset();
    assert!(!controller.is_auto_playing());
    assert_eq!(controller.current_index(), 0);

    pass_time(&mut controller, &mut timers, Duration::from_secs(5)).await;
    assert_eq!(controller.current_index(), 0);
    assert!(controller.surface().scene.is_component_active("c0"));
}
