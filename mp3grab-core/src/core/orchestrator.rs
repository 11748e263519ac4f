use std::sync::Arc;

use tokio::sync::Mutex;

use super::events::StateEmitter;
use super::reply::BackendReply;
use super::state::{RequestSnapshot, RequestState, Status};
use crate::platforms::traits::AudioBackend;
use crate::platforms::Platform;

/// Drives a single download request at a time through its [`Status`]
/// lifecycle.
///
/// `submit` is the "Download" button. Pressing it with a bad URL reports
/// `invalid-url`; pressing it while a request is in flight cancels that
/// request; otherwise it starts one backend call and waits for the reply.
/// Several `submit` futures may run at once on the same orchestrator, which
/// is how re-submission while busy reaches it.
pub struct DownloadOrchestrator<E: StateEmitter> {
    backend: Arc<dyn AudioBackend>,
    state: Arc<Mutex<RequestState>>,
    emitter: E,
}

impl<E: StateEmitter> DownloadOrchestrator<E> {
    pub fn new(backend: Arc<dyn AudioBackend>, emitter: E) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(RequestState::new())),
            emitter,
        }
    }

    pub async fn snapshot(&self) -> RequestSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn is_busy(&self) -> bool {
        self.state.lock().await.is_busy()
    }

    pub async fn submit(&self, raw: &str) {
        let url = raw.trim();
        let classified = Platform::from_url(url);

        let (platform, attempt, cancel) = {
            let mut state = self.state.lock().await;

            let Some(platform) = classified else {
                if state.abandon() {
                    tracing::info!(
                        attempt = state.attempt(),
                        "Invalid input while busy, dropping the in-flight download"
                    );
                }
                state.reject();
                self.emitter.emit_state(&state.snapshot());
                tracing::info!("Rejected input: not a supported URL");
                return;
            };

            if state.abandon() {
                state.settle(Status::Canceled, None);
                self.emitter.emit_state(&state.snapshot());
                tracing::info!(origin = "client", attempt = state.attempt(), "Download canceled");
                return;
            }

            let (attempt, cancel) = state.begin(platform);
            self.emitter.emit_state(&state.snapshot());
            (platform, attempt, cancel)
        };

        tracing::info!(%platform, attempt, "Starting download");

        let result = match platform {
            Platform::YouTube => self.backend.download_youtube(url, cancel).await,
            Platform::SoundCloud => self.backend.download_soundcloud(url, cancel).await,
        };

        self.finish(attempt, result).await;
    }

    /// Cancels the in-flight request, if any. Returns whether there was one.
    pub async fn cancel(&self) -> bool {
        let mut state = self.state.lock().await;
        if !state.abandon() {
            return false;
        }
        state.settle(Status::Canceled, None);
        self.emitter.emit_state(&state.snapshot());
        tracing::info!(origin = "client", attempt = state.attempt(), "Download canceled");
        true
    }

    async fn finish(&self, attempt: u64, result: anyhow::Result<String>) {
        let (status, last_error) = match result {
            Ok(raw) => match BackendReply::decode(&raw) {
                BackendReply::Ok(detail) => {
                    tracing::info!(attempt, "Download complete: {}", detail);
                    (Status::Completed, None)
                }
                BackendReply::Error(_) => {
                    tracing::warn!(attempt, "Backend reported an error: {}", raw);
                    (Status::Unknown, Some(raw))
                }
                BackendReply::Canceled(_) => {
                    tracing::info!(origin = "backend", attempt, "Download canceled");
                    (Status::Canceled, None)
                }
                BackendReply::Invalid(_) => {
                    tracing::info!(attempt, "Backend rejected the URL");
                    (Status::InvalidUrl, None)
                }
                BackendReply::Unrecognized(_) => {
                    tracing::warn!(attempt, "Unrecognized backend reply: {}", raw);
                    (Status::Unknown, Some(raw))
                }
            },
            Err(e) => {
                tracing::error!(attempt, "Backend call failed: {:#}", e);
                (Status::Unknown, Some(format!("{e:#}")))
            }
        };

        let mut state = self.state.lock().await;
        if !state.is_current(attempt) {
            tracing::debug!(attempt, %status, "Ignoring reply of a superseded download");
            return;
        }
        state.settle(status, last_error);
        self.emitter.emit_state(&state.snapshot());
    }
}
