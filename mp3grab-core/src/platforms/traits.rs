use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// The backend side of the command boundary: one operation per platform.
///
/// `Ok` carries the backend's tagged reply string (see
/// [`BackendReply`](crate::core::reply::BackendReply)); `Err` means the call
/// itself failed and no reply was produced. Implementations should stop work
/// and answer `canceled` once `cancel` fires.
#[async_trait]
pub trait AudioBackend: Send + Sync {
    async fn download_youtube(&self, url: &str, cancel: CancellationToken) -> anyhow::Result<String>;
    async fn download_soundcloud(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> anyhow::Result<String>;
}
