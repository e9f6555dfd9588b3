//! Cancellable timers feeding the controller
//!
//! Timer tasks never touch walkthrough state. They only send [`TimerEvent`]s
//! back to the task that owns the controller, which applies them in order
//! with every other input.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

/// Events produced by the controller's timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One auto-play period elapsed for the timer started in `epoch`
    Tick { epoch: u64 },
    /// The delayed activation of the render identified by `generation`
    Activate { generation: u64 },
}

pub type TimerSender = mpsc::UnboundedSender<TimerEvent>;
pub type TimerReceiver = mpsc::UnboundedReceiver<TimerEvent>;

/// Create the channel timer events travel on
pub fn channel() -> (TimerSender, TimerReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to a scheduled timer task
///
/// The task is aborted on [`TimerHandle::cancel`] or when the handle is
/// dropped, so a handle can never outlive its owner.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Send `event` every `period`, first one period from now
pub fn spawn_repeating(period: Duration, sender: TimerSender, event: TimerEvent) -> TimerHandle {
    let period = period.max(Duration::from_millis(1));
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            trace!("Timer fired: {:?}", event);
            if sender.send(event).is_err() {
                break;
            }
        }
    });
    TimerHandle { task }
}

/// Send `event` once after `delay`
pub fn spawn_delayed(delay: Duration, sender: TimerSender, event: TimerEvent) -> TimerHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        trace!("Timer fired: {:?}", event);
        let _ = sender.send(event);
    });
    TimerHandle { task }
}
