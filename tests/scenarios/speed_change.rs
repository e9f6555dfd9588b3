//! Test: changing speed while paused and while playing

use crate::helpers::*;
use std::time::Duration;
use tokio::time::Instant;

/// The next tick comes `x` ms after SetSpeed(x), not after the old interval
#[tokio::test(start_paused = true)]
async fn test_set_speed_restarts_running_timer() {
    let (mut controller, mut timers) = start(numbered_script(6));
    settle(&mut controller, &mut timers).await;

    controller.start_auto_play();
    tokio::time::advance(Duration::from_millis(1000)).await;
    assert_eq!(controller.current_index(), 0);

    let changed = Instant::now();
    controller.set_speed(400);
    assert!(controller.is_auto_playing());
    assert_eq!(controller.surface().scene.speed_label, "0.4s");

    next_tick(&mut controller, &mut timers).await;
    assert_eq!(changed.elapsed(), Duration::from_millis(400));
    assert_eq!(controller.current_index(), 1);

    next_tick(&mut controller, &mut timers).await;
    assert_eq!(changed.elapsed(), Duration::from_millis(800));
    assert_eq!(controller.current_index(), 2);
}

/// Restarting the timer on a speed change redraws once and keeps the Pause state
#[tokio::test(start_paused = true)]
async fn test_set_speed_while_playing_presents_once() {
    let (mut controller, mut timers) = start(numbered_script(4));
    settle(&mut controller, &mut timers).await;
    controller.start_auto_play();

    let mark = controller.surface().mark();
    controller.set_speed(900);

    assert_eq!(
        controller.surface().calls_since(mark),
        &[
            SurfaceCall::SpeedLabel("0.9s".to_string()),
            SurfaceCall::Present
        ]
    );
    assert!(controller.is_auto_playing());
    assert_eq!(controller.surface().scene.auto_play_label, "Pause");
}

/// Slowing down also takes effect from the moment of the change
#[tokio::test(start_paused = true)]
async fn test_slower_speed_delays_next_tick() {
    let (mut controller, mut timers) = start(numbered_script(6));
    settle(&mut controller, &mut timers).await;

    controller.start_auto_play();
    tokio::time::advance(Duration::from_millis(1400)).await;

    let changed = Instant::now();
    controller.set_speed(3000);

    next_tick(&mut controller, &mut timers).await;
    assert_eq!(changed.elapsed(), Duration::from_millis(3000));
    assert_eq!(controller.current_index(), 1);
}

/// Changing speed while paused only updates the label and the interval
#[tokio::test]
async fn test_set_speed_while_paused() {
    let (mut controller, _timers) = start(numbered_script(3));
    controller.set_speed(2500);

    assert!(!controller.is_auto_playing());
    assert_eq!(controller.interval(), Duration::from_millis(2500));
    assert_eq!(controller.surface().scene.speed_label, "2.5s");
    assert_eq!(controller.surface().scene.auto_play_label, "Auto Play");
}

/// Auto-play started after a speed change uses the new interval
#[tokio::test(start_paused = true)]
async fn test_start_after_speed_change_uses_new_interval() {
    let (mut controller, mut timers) = start(numbered_script(4));
    settle(&mut controller, &mut timers).await;
    controller.set_speed(700);

    let started = Instant::now();
    controller.toggle_auto_play();
    next_tick(&mut controller, &mut timers).await;
    assert_eq!(started.elapsed(), Duration::from_millis(700));
}
