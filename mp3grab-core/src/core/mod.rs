pub mod events;
pub mod orchestrator;
pub mod reply;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
