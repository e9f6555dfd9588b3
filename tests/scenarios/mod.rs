//! Scenario-based tests for walkthrough

mod auto_play;
mod example_script;
mod session;
mod speed_change;
