use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use mp3grab_core::core::reply::BackendReply;
use mp3grab_core::models::settings::AppSettings;
use mp3grab_core::platforms::traits::AudioBackend;
use tokio_util::sync::CancellationToken;

use crate::core::{dependencies, filename, ytdlp};

pub async fn download_youtube(
    settings: &AppSettings,
    url: &str,
    cancel: CancellationToken,
) -> String {
    download_audio(settings, url, is_youtube_url, cancel).await
}

pub async fn download_soundcloud(
    settings: &AppSettings,
    url: &str,
    cancel: CancellationToken,
) -> String {
    download_audio(settings, url, is_soundcloud_url, cancel).await
}

/// Shared body of the per-platform commands. Always answers with a tagged
/// reply; failures become `Error: ...` replies rather than `Err`.
pub async fn download_audio<F>(
    settings: &AppSettings,
    url: &str,
    is_valid: F,
    cancel: CancellationToken,
) -> String
where
    F: Fn(&str) -> bool,
{
    if !is_valid(url) {
        tracing::info!("Backend rejected {}", url);
        return BackendReply::invalid().to_wire();
    }

    let timeout = settings.advanced.backend_timeout_secs;

    let reply = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::info!("Extraction of {} canceled", url);
            BackendReply::canceled()
        }
        _ = deadline(timeout) => {
            let secs = timeout.unwrap_or_default();
            tracing::warn!("Extraction of {} timed out after {}s", url, secs);
            BackendReply::error(format!("timed out after {}s", secs))
        }
        result = extract(settings, url) => match result {
            Ok(path) => {
                tracing::info!("Saved {}", path.display());
                BackendReply::ok(format!("path={}", path.display()))
            }
            Err(e) => {
                tracing::warn!("Extraction of {} failed: {:#}", url, e);
                BackendReply::error(format!("{:#}", e))
            }
        },
    };

    reply.to_wire()
}

async fn deadline(secs: Option<u64>) {
    match secs {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => std::future::pending().await,
    }
}

async fn extract(settings: &AppSettings, url: &str) -> anyhow::Result<PathBuf> {
    let ytdlp_path = dependencies::find_tool("yt-dlp", settings.advanced.ytdlp_path.as_deref())
        .await
        .ok_or_else(|| anyhow!("yt-dlp not found; install it or set advanced.ytdlp_path"))?;
    let ffmpeg = dependencies::find_tool("ffmpeg", settings.advanced.ffmpeg_path.as_deref()).await;
    if ffmpeg.is_none() {
        tracing::warn!("ffmpeg not found, leaving audio conversion to yt-dlp defaults");
    }

    let playlist = is_playlist_url(url);
    let title = ytdlp::fetch_title(&ytdlp_path, url, playlist).await?;
    let stem = filename::sanitize_title(&title);

    let folder = &settings.download.output_dir;
    tokio::fs::create_dir_all(folder)
        .await
        .with_context(|| format!("cannot create output folder {}", folder.display()))?;

    let format = settings.download.audio_format.as_str();
    let (output_template, saved) = if playlist {
        let dir = folder.join(&stem);
        (dir.join("%(title)s.%(ext)s"), dir)
    } else {
        (
            folder.join(format!("{}.%(ext)s", stem)),
            folder.join(format!("{}.{}", stem, format)),
        )
    };

    tracing::info!("Extracting {} audio from {} into {}", format, url, saved.display());

    let request = ytdlp::ExtractRequest {
        url,
        output_template: output_template.to_string_lossy().to_string(),
        audio_format: format,
        playlist,
        ffmpeg: ffmpeg.as_deref(),
        extra_flags: &settings.download.extra_ytdlp_flags,
    };
    ytdlp::extract_audio(&ytdlp_path, &request).await?;

    Ok(saved)
}

fn host_of(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let parsed = url::Url::parse(trimmed)
        .ok()
        .filter(|u| u.has_host())
        .or_else(|| url::Url::parse(&format!("https://{}", trimmed)).ok())?;
    parsed.host_str().map(|h| h.to_lowercase())
}

pub fn is_youtube_url(url: &str) -> bool {
    host_of(url).is_some_and(|host| {
        host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be"
    })
}

pub fn is_soundcloud_url(url: &str) -> bool {
    host_of(url).is_some_and(|host| host == "soundcloud.com" || host.ends_with(".soundcloud.com"))
}

pub fn is_playlist_url(url: &str) -> bool {
    let trimmed = url.trim();
    let parsed = url::Url::parse(trimmed)
        .ok()
        .filter(|u| u.has_host())
        .or_else(|| url::Url::parse(&format!("https://{}", trimmed)).ok());
    let Some(parsed) = parsed else {
        return false;
    };

    if parsed.path().starts_with("/playlist") {
        return true;
    }
    parsed
        .path_segments()
        .is_some_and(|mut segments| segments.nth(1) == Some("sets"))
}

/// [`AudioBackend`] that runs the download commands in their own task, so a
/// crashing command surfaces as a failed call rather than taking the caller
/// down with it.
pub struct CommandBackend {
    settings: Arc<AppSettings>,
}

impl CommandBackend {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl AudioBackend for CommandBackend {
    async fn download_youtube(&self, url: &str, cancel: CancellationToken) -> anyhow::Result<String> {
        let settings = self.settings.clone();
        let url = url.to_string();
        tokio::spawn(async move { download_youtube(&settings, &url, cancel).await })
            .await
            .context("download_youtube command crashed")
    }

    async fn download_soundcloud(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> anyhow::Result<String> {
        let settings = self.settings.clone();
        let url = url.to_string();
        tokio::spawn(async move { download_soundcloud(&settings, &url, cancel).await })
            .await
            .context("download_soundcloud command crashed")
    }
}
