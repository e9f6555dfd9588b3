//! Test: the three step example walked forward and reset

use crate::helpers::*;

/// Advance shows "host" after the pulse, clearing first
#[tokio::test(start_paused = true)]
async fn test_advance_clears_before_activating() {
    let (mut controller, mut timers) = start(three_step_script());
    settle(&mut controller, &mut timers).await;
    assert!(controller.surface().scene.is_clear());

    let mark = controller.surface().mark();
    controller.advance();

    // Before the delay only the clear is visible
    assert!(controller.surface().scene.is_clear());
    assert_eq!(controller.surface().scene.step_counter, Some(1));
    assert_eq!(controller.surface().scene.description, "The host wakes up");

    settle(&mut controller, &mut timers).await;
    let calls = controller.surface().calls_since(mark);

    let clear = calls
        .iter()
        .position(|c| *c == SurfaceCall::ClearAll)
        .expect("clear was sent");
    let activate = calls
        .iter()
        .position(|c| *c == SurfaceCall::Components(ids(&["host"])))
        .expect("host was activated");
    assert!(clear < activate);
    assert_eq!(calls[0], SurfaceCall::StepCounter(1));

    let scene = &controller.surface().scene;
    assert_eq!(
        scene.active_components.iter().cloned().collect::<Vec<_>>(),
        ids(&["host"])
    );
    assert!(scene.active_connections.is_empty());
    assert!(scene.next_enabled);
}

/// Step 2 lights host, client and line1 and disables next
#[tokio::test(start_paused = true)]
async fn test_final_step_disables_next() {
    let (mut controller, mut timers) = start(three_step_script());
    controller.advance();
    controller.advance();
    settle(&mut controller, &mut timers).await;

    let scene = &controller.surface().scene;
    assert!(scene.is_component_active("host"));
    assert!(scene.is_component_active("client"));
    assert!(scene.is_connection_active("line1"));
    assert!(!scene.next_enabled);
}

/// Reset goes back to an empty first step with next enabled
#[tokio::test(start_paused = true)]
async fn test_reset_returns_to_blank_start() {
    let (mut controller, mut timers) = start(three_step_script());
    controller.advance();
    controller.advance();
    settle(&mut controller, &mut timers).await;

    controller.reset();
    settle(&mut controller, &mut timers).await;

    assert_eq!(controller.current_index(), 0);
    let scene = &controller.surface().scene;
    assert!(scene.is_clear());
    assert!(scene.next_enabled);
    assert_eq!(scene.step_counter, Some(0));
    assert_eq!(scene.description, "Nothing is active yet");
}

/// Rendering the same index twice ends in the same scene
#[tokio::test(start_paused = true)]
async fn test_render_is_idempotent() {
    let (mut controller, mut timers) = start(three_step_script());
    controller.advance();
    controller.advance();
    settle(&mut controller, &mut timers).await;
    let once = controller.surface().scene.clone();

    controller.render();
    controller.render();
    settle(&mut controller, &mut timers).await;

    assert_eq!(controller.surface().scene, once);
}

/// A re-render clears even when the next step reuses the same elements
#[tokio::test(start_paused = true)]
async fn test_rerender_always_clears_fully() {
    let (mut controller, mut timers) = start(three_step_script());
    controller.advance();
    settle(&mut controller, &mut timers).await;

    let mark = controller.surface().mark();
    controller.render();
    assert!(controller
        .surface()
        .calls_since(mark)
        .contains(&SurfaceCall::ClearAll));
    assert!(controller.surface().scene.is_clear());

    settle(&mut controller, &mut timers).await;
    assert!(controller.surface().scene.is_component_active("host"));
}

/// Startup reports the terminal index once and the paused labels
#[tokio::test]
async fn test_initialize_reports_totals_and_labels() {
    let (controller, _timers) = start(three_step_script());
    let calls = &controller.surface().calls;

    assert_eq!(calls[0], SurfaceCall::TotalSteps(2));
    assert!(calls.contains(&SurfaceCall::SpeedLabel("1.5s".to_string())));
    assert!(calls.contains(&SurfaceCall::AutoPlayLabel("Auto Play".to_string())));
    assert_eq!(
        calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::TotalSteps(_)))
            .count(),
        1
    );
}
