use mp3grab_core::core::events::StateEmitter;
use mp3grab_core::core::state::RequestSnapshot;

use crate::ui;

/// Prints each state change to stdout.
#[derive(Clone, Default)]
pub struct TerminalEmitter;

impl TerminalEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl StateEmitter for TerminalEmitter {
    fn emit_state(&self, state: &RequestSnapshot) {
        println!("{}", ui::render(state));
    }
}
