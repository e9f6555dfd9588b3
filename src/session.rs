//! Walkthrough session - the event loop around a controller

use crate::control::ControlInput;
use crate::controller::Controller;
use crate::surface::PresentationSurface;
use crate::timer::TimerReceiver;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Owns a controller and the timer events addressed to it
///
/// Control inputs and timer events are applied one at a time on the task
/// running the session, so the controller never sees two events at once.
pub struct Walkthrough<S> {
    controller: Controller<S>,
    timers: TimerReceiver,
}

impl<S: PresentationSurface> Walkthrough<S> {
    pub fn new(controller: Controller<S>, timers: TimerReceiver) -> Self {
        Self { controller, timers }
    }

    pub fn controller(&self) -> &Controller<S> {
        &self.controller
    }

    pub fn into_controller(self) -> Controller<S> {
        self.controller
    }

    /// Run until [`ControlInput::Quit`] arrives or the input channel closes
    pub async fn run(&mut self, mut inputs: mpsc::Receiver<ControlInput>) {
        self.controller.initialize();

        loop {
            tokio::select! {
                input = inputs.recv() => match input {
                    Some(ControlInput::Quit) | None => {
                        self.controller.handle(ControlInput::Quit);
                        break;
                    }
                    Some(input) => self.controller.handle(input),
                },
                Some(event) = self.timers.recv() => self.controller.on_timer(event),
            }
        }

        info!(
            "Walkthrough finished at step {}",
            self.controller.current_index()
        );
    }

    /// Auto-play from the first step to the last, then return
    ///
    /// Returns once the final step is shown and its highlights are applied.
    pub async fn run_to_end(&mut self) {
        self.controller.initialize();
        self.controller.start_auto_play();

        while let Some(event) = self.timers.recv().await {
            self.controller.on_timer(event);
            if self.controller.is_at_end() && !self.controller.has_pending_activation() {
                break;
            }
            if !self.controller.is_auto_playing() && !self.controller.is_at_end() {
                debug!("Auto-play stopped before the final step");
                break;
            }
        }

        info!(
            "Walkthrough finished at step {}",
            self.controller.current_index()
        );
    }
}
