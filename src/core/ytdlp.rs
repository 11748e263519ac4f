use std::path::Path;
use std::process::Stdio;

use anyhow::anyhow;

use crate::core::process;

/// Fetches the title yt-dlp would use for `url`. For playlists this is the
/// playlist title.
pub async fn fetch_title(ytdlp: &Path, url: &str, playlist: bool) -> anyhow::Result<String> {
    let mut cmd = process::command(ytdlp);
    if playlist {
        cmd.args(["--flat-playlist", "--playlist-items", "1", "--print", "playlist_title"]);
    } else {
        cmd.args(["--no-playlist", "--print", "title"]);
    }

    let output = cmd
        .args(["--no-warnings", url])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| anyhow!("yt-dlp exec error: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("yt-dlp title error: {}", stderr.trim()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().next().unwrap_or_default().trim().to_string())
}

pub struct ExtractRequest<'a> {
    pub url: &'a str,
    /// yt-dlp output template, e.g. `/music/Title.%(ext)s`.
    pub output_template: String,
    pub audio_format: &'a str,
    pub playlist: bool,
    pub ffmpeg: Option<&'a Path>,
    pub extra_flags: &'a [String],
}

pub fn extract_args(req: &ExtractRequest<'_>) -> Vec<String> {
    let mut args = vec![
        "-x".to_string(),
        "--audio-format".to_string(),
        req.audio_format.to_string(),
        "--no-warnings".to_string(),
        if req.playlist {
            "--yes-playlist".to_string()
        } else {
            "--no-playlist".to_string()
        },
        "-o".to_string(),
        req.output_template.clone(),
    ];

    if let Some(ff) = req.ffmpeg {
        args.push("--ffmpeg-location".to_string());
        args.push(ff.to_string_lossy().to_string());
    }

    args.extend(req.extra_flags.iter().cloned());
    args.push(req.url.to_string());
    args
}

/// Runs the extraction to completion. Dropping the returned future kills
/// yt-dlp.
pub async fn extract_audio(ytdlp: &Path, req: &ExtractRequest<'_>) -> anyhow::Result<()> {
    let output = process::command(ytdlp)
        .args(extract_args(req))
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| anyhow!("yt-dlp exec error: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("yt-dlp failed: {}", stderr.trim()));
    }

    Ok(())
}
