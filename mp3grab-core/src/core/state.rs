use std::fmt;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::platforms::Platform;

/// Lifecycle of the download request, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    None,
    Processing,
    Completed,
    Canceled,
    InvalidUrl,
    Unknown,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::None,
        Status::Processing,
        Status::Completed,
        Status::Canceled,
        Status::InvalidUrl,
        Status::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Processing => "processing",
            Status::Completed => "completed",
            Status::Canceled => "canceled",
            Status::InvalidUrl => "invalid-url",
            Status::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only copy of [`RequestState`] handed to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestSnapshot {
    pub status: Status,
    pub busy: bool,
    pub last_error: Option<String>,
    pub source: Option<Platform>,
    pub attempt: u64,
}

/// The one mutable request record. Created once, reset in place per attempt.
///
/// `busy` is true exactly while `status` is `Processing`; every mutator below
/// keeps the two in step.
#[derive(Debug, Default)]
pub struct RequestState {
    status: Status,
    busy: bool,
    last_error: Option<String>,
    source: Option<Platform>,
    attempt: u64,
    cancel: Option<CancellationToken>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn snapshot(&self) -> RequestSnapshot {
        RequestSnapshot {
            status: self.status,
            busy: self.busy,
            last_error: self.last_error.clone(),
            source: self.source,
            attempt: self.attempt,
        }
    }

    /// Starts a new attempt and returns its id together with the token the
    /// backend call should watch.
    pub(crate) fn begin(&mut self, source: Platform) -> (u64, CancellationToken) {
        let token = CancellationToken::new();
        self.attempt += 1;
        self.status = Status::Processing;
        self.busy = true;
        self.last_error = None;
        self.source = Some(source);
        self.cancel = Some(token.clone());
        (self.attempt, token)
    }

    /// Whether a reply for `attempt` may still be applied.
    pub(crate) fn is_current(&self, attempt: u64) -> bool {
        self.busy && self.attempt == attempt
    }

    /// Stops waiting on the in-flight call, if any, and fires its token.
    /// Returns whether there was one. Leaves `status` to the caller, which
    /// must follow up with [`settle`](Self::settle).
    pub(crate) fn abandon(&mut self) -> bool {
        if !self.busy {
            return false;
        }
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.busy = false;
        true
    }

    /// Settles on `InvalidUrl` for input that never matched a platform, so no
    /// source is reported.
    pub(crate) fn reject(&mut self) {
        self.settle(Status::InvalidUrl, None);
        self.source = None;
    }

    /// Moves to a resting status. `last_error` only survives with `Unknown`.
    pub(crate) fn settle(&mut self, status: Status, last_error: Option<String>) {
        debug_assert!(status != Status::Processing);
        self.status = status;
        self.busy = false;
        self.cancel = None;
        self.last_error = match status {
            Status::Unknown => last_error,
            _ => None,
        };
    }
}
