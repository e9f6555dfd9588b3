//! walkthrough - a step-by-step terminal walkthrough of a request/response protocol

pub mod cli;
pub mod control;
pub mod controller;
pub mod script;
pub mod session;
pub mod surface;
pub mod timer;

// Re-export commonly used types
pub use control::ControlInput;
pub use controller::{Controller, StepOutcome};
pub use script::{Script, ScriptConfig, ScriptError, Step};
pub use session::Walkthrough;
pub use surface::{AutoPlayStyle, PresentationSurface, Scene};
pub use timer::{TimerEvent, TimerReceiver};
