//! Walkthrough controller - walks the script and drives the surface

use crate::control::ControlInput;
use crate::script::Script;
use crate::surface::{AutoPlayStyle, PresentationSurface};
use crate::timer::{self, TimerEvent, TimerHandle, TimerReceiver, TimerSender};
use std::time::Duration;
use tracing::{debug, info};

pub const PLAY_LABEL: &str = "Auto Play";
pub const PAUSE_LABEL: &str = "Pause";

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The controller moved to this index
    Moved(usize),
    /// Already at the first step
    AtStart,
    /// Already at the terminal step
    AtEnd,
    /// No step with that index
    OutOfRange,
}

/// Format an interval the way the speed control shows it
pub fn speed_label(interval: Duration) -> String {
    format!("{:.1}s", interval.as_millis() as f64 / 1000.0)
}

/// The walkthrough state machine
///
/// Owns the current position, the auto-play timer and the pending delayed
/// activation. Every operation is infallible: requests that make no sense
/// in the current state are no-ops.
///
/// Timers report back through the [`TimerReceiver`] returned by
/// [`Controller::new`]; whoever owns the controller feeds those events to
/// [`Controller::on_timer`]. Scheduling a timer requires a tokio runtime.
pub struct Controller<S> {
    script: Script,
    surface: S,
    current_index: usize,
    interval: Duration,
    activation_delay: Duration,
    auto_play: Option<TimerHandle>,
    auto_play_epoch: u64,
    pending_activation: Option<TimerHandle>,
    generation: u64,
    timers: TimerSender,
}

impl<S: PresentationSurface> Controller<S> {
    pub fn new(script: Script, surface: S) -> (Self, TimerReceiver) {
        let (timers, receiver) = timer::channel();
        let playback = *script.playback();
        let controller = Self {
            script,
            surface,
            current_index: 0,
            interval: playback.interval().max(Duration::from_millis(1)),
            activation_delay: playback.activation_delay(),
            auto_play: None,
            auto_play_epoch: 0,
            pending_activation: None,
            generation: 0,
            timers,
        };
        (controller, receiver)
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if a render is still waiting for its delayed activation
    pub fn has_pending_activation(&self) -> bool {
        self.pending_activation.is_some()
    }

    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.script.last_index()
    }

    /// Initial projection: totals, labels and the first step
    pub fn initialize(&mut self) {
        info!(
            "Starting walkthrough '{}' ({} steps)",
            self.script.name(),
            self.script.len()
        );
        self.surface.set_total_steps(self.script.last_index());
        self.surface.set_speed_label(&speed_label(self.interval));
        self.show_auto_play(false);
        self.render();
    }

    /// Apply a control input
    pub fn handle(&mut self, input: ControlInput) {
        debug!("Control input: {:?}", input);
        match input {
            ControlInput::Advance => {
                self.advance();
            }
            ControlInput::Retreat => {
                self.retreat();
            }
            ControlInput::Reset => self.reset(),
            ControlInput::ToggleAutoPlay => self.toggle_auto_play(),
            ControlInput::SetSpeed(millis) => self.set_speed(millis),
            ControlInput::Jump(index) => {
                self.jump_to(index);
            }
            ControlInput::Quit => self.stop_auto_play(),
        }
    }

    /// Apply a timer event
    pub fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick { epoch } => {
                if epoch == self.auto_play_epoch {
                    self.tick();
                } else {
                    debug!("Dropping stale tick from timer {}", epoch);
                }
            }
            TimerEvent::Activate { generation } => self.activate(generation),
        }
    }

    pub fn advance(&mut self) -> StepOutcome {
        if self.is_at_end() {
            debug!("Advance ignored: already at step {}", self.current_index);
            return StepOutcome::AtEnd;
        }
        self.current_index += 1;
        self.render();
        StepOutcome::Moved(self.current_index)
    }

    pub fn retreat(&mut self) -> StepOutcome {
        if self.current_index == 0 {
            debug!("Retreat ignored: already at the first step");
            return StepOutcome::AtStart;
        }
        self.current_index -= 1;
        self.render();
        StepOutcome::Moved(self.current_index)
    }

    pub fn reset(&mut self) {
        self.stop_auto_play();
        self.current_index = 0;
        self.render();
    }

    /// Show any step directly
    pub fn jump_to(&mut self, index: usize) -> StepOutcome {
        if self.script.step(index).is_none() {
            debug!("Jump ignored: no step {}", index);
            return StepOutcome::OutOfRange;
        }
        self.current_index = index;
        self.render();
        StepOutcome::Moved(index)
    }

    /// Project the current step onto the surface
    ///
    /// Clears every highlight right away and schedules the step's own
    /// highlights after the activation delay. Rendering the same index twice
    /// ends in the same displayed state.
    pub fn render(&mut self) {
        let index = self.current_index;
        let Some(step) = self.script.step(index) else {
            return;
        };
        debug!("Rendering step {}", index);

        self.surface.set_step_counter(index);
        self.surface.set_description(&step.description);
        self.surface.set_timeline_marker(index);
        self.surface.clear_all_visual_state();

        if let Some(pending) = self.pending_activation.take() {
            pending.cancel();
        }
        self.generation += 1;
        self.pending_activation = Some(timer::spawn_delayed(
            self.activation_delay,
            self.timers.clone(),
            TimerEvent::Activate {
                generation: self.generation,
            },
        ));

        let at_end = self.is_at_end();
        self.surface.set_next_affordance_enabled(!at_end);
        if at_end && self.is_auto_playing() {
            info!("Reached the final step, stopping auto-play");
            self.stop_auto_play();
        }
        self.surface.present();
    }

    fn activate(&mut self, generation: u64) {
        if generation != self.generation {
            debug!("Dropping superseded activation {}", generation);
            return;
        }
        self.pending_activation = None;
        let Some(step) = self.script.step(self.current_index) else {
            return;
        };
        self.surface.activate_components(&step.components);
        self.surface.activate_connections(&step.connections);
        self.surface.activate_messages(&step.messages);
        self.surface.present();
    }

    /// Change the auto-play interval, restarting a running timer at once
    pub fn set_speed(&mut self, millis: u64) {
        self.interval = Duration::from_millis(millis.max(1));
        debug!("Auto-play interval set to {:?}", self.interval);
        self.surface.set_speed_label(&speed_label(self.interval));

        if self.is_auto_playing() {
            self.restart_timer();
        }
        self.surface.present();
    }

    pub fn toggle_auto_play(&mut self) {
        if self.is_auto_playing() {
            self.stop_auto_play();
        } else {
            self.start_auto_play();
        }
    }

    /// Start advancing every interval, first tick one interval from now
    pub fn start_auto_play(&mut self) {
        self.restart_timer();
        debug!("Auto-play started ({:?})", self.interval);
        self.show_auto_play(true);
        self.surface.present();
    }

    /// Replace any running timer with one at the current interval
    fn restart_timer(&mut self) {
        if let Some(existing) = self.auto_play.take() {
            existing.cancel();
        }
        self.auto_play_epoch += 1;
        self.auto_play = Some(timer::spawn_repeating(
            self.interval,
            self.timers.clone(),
            TimerEvent::Tick {
                epoch: self.auto_play_epoch,
            },
        ));
    }

    pub fn stop_auto_play(&mut self) {
        let Some(timer) = self.auto_play.take() else {
            return;
        };
        timer.cancel();
        debug!("Auto-play stopped at step {}", self.current_index);
        self.show_auto_play(false);
        self.surface.present();
    }

    /// One auto-play period elapsed
    pub fn tick(&mut self) {
        if !self.is_auto_playing() {
            return;
        }
        if self.is_at_end() {
            self.stop_auto_play();
        } else {
            self.advance();
        }
    }

    fn show_auto_play(&mut self, playing: bool) {
        if playing {
            self.surface.set_auto_play_label(PAUSE_LABEL);
            self.surface.set_auto_play_style(AutoPlayStyle::Playing);
        } else {
            self.surface.set_auto_play_label(PLAY_LABEL);
            self.surface.set_auto_play_style(AutoPlayStyle::Paused);
        }
    }
}
