use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::{oneshot, Notify};
use tokio_util::sync::CancellationToken;

use super::events::StateEmitter;
use super::state::{RequestSnapshot, Status};
use crate::platforms::traits::AudioBackend;
use crate::platforms::Platform;

type Reply = anyhow::Result<String>;

#[derive(Debug, Clone)]
pub struct Call {
    pub platform: Platform,
    pub url: String,
    pub cancel: CancellationToken,
}

/// Backend whose replies are queued up front by the test. A call with no
/// queued reply fails.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    calls: Mutex<Vec<Call>>,
    /// Notified each time a call has been recorded.
    pub started: Notify,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            started: Notify::new(),
        })
    }

    pub fn push_reply(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.lock().unwrap().push_back(rx);
    }

    /// Queues a reply the test sends later through the returned sender.
    pub fn push_pending(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn answer(&self, platform: Platform, url: &str, cancel: CancellationToken) -> Reply {
        self.calls.lock().unwrap().push(Call {
            platform,
            url: url.to_string(),
            cancel,
        });
        let next = self.replies.lock().unwrap().pop_front();
        self.started.notify_one();
        match next {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(anyhow!("reply sender dropped"))),
            None => Err(anyhow!("no scripted reply for {url}")),
        }
    }
}

#[async_trait]
impl AudioBackend for ScriptedBackend {
    async fn download_youtube(&self, url: &str, cancel: CancellationToken) -> Reply {
        self.answer(Platform::YouTube, url, cancel).await
    }

    async fn download_soundcloud(&self, url: &str, cancel: CancellationToken) -> Reply {
        self.answer(Platform::SoundCloud, url, cancel).await
    }
}

#[derive(Clone, Default)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<RequestSnapshot>>>,
}

impl RecordingEmitter {
    pub fn snapshots(&self) -> Vec<RequestSnapshot> {
        self.events.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<Status> {
        self.snapshots().into_iter().map(|s| s.status).collect()
    }
}

impl StateEmitter for RecordingEmitter {
    fn emit_state(&self, state: &RequestSnapshot) {
        self.events.lock().unwrap().push(state.clone());
    }
}
