//! Terminal key reader

use crate::control::{ControlInput, Keymap};
use console::Term;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Read keys from `term` on a blocking thread and forward mapped inputs
///
/// The reader stops after forwarding [`ControlInput::Quit`], when the
/// receiving side goes away, or when the terminal can't be read.
pub fn spawn_key_reader(
    term: Term,
    mut keymap: Keymap,
    sender: mpsc::Sender<ControlInput>,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || loop {
        let key = match term.read_key() {
            Ok(key) => key,
            Err(e) => {
                warn!("Failed to read key: {}", e);
                let _ = sender.blocking_send(ControlInput::Quit);
                break;
            }
        };

        let Some(input) = keymap.map(&key) else {
            debug!("Ignoring unbound key {:?}", key);
            continue;
        };

        if sender.blocking_send(input).is_err() || input == ControlInput::Quit {
            break;
        }
    })
}
