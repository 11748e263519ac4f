use super::state::RequestSnapshot;

/// Receives every state transition the orchestrator makes, in order.
///
/// Called with the state lock held, so implementations must not block or
/// call back into the orchestrator.
pub trait StateEmitter: Send + Sync + Clone + 'static {
    fn emit_state(&self, state: &RequestSnapshot);
}

impl StateEmitter for () {
    fn emit_state(&self, _state: &RequestSnapshot) {}
}
