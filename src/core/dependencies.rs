use std::path::{Path, PathBuf};
use std::process::Stdio;

use mp3grab_core::fs_paths::{AppPaths, DesktopPaths};

pub fn bin_name(tool: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", tool)
    } else {
        tool.to_string()
    }
}

fn version_flag_for(tool: &str) -> &'static str {
    match tool {
        "ffmpeg" | "ffprobe" => "-version",
        _ => "--version",
    }
}

/// Looks for `tool` at the configured path, then on `PATH`, then in the
/// managed bin dir.
pub async fn find_tool(tool: &str, configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            tracing::debug!("{} found at configured path {}", tool, path.display());
            return Some(path.to_path_buf());
        }
        tracing::warn!(
            "Configured {} path {} does not exist, searching PATH",
            tool,
            path.display()
        );
    }

    let name = bin_name(tool);
    if let Ok(status) = crate::core::process::command(&name)
        .arg(version_flag_for(tool))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
    {
        if status.success() {
            tracing::debug!("{} found on PATH", tool);
            return Some(PathBuf::from(&name));
        }
    }

    let managed = DesktopPaths.bin_dir().join(&name);
    if managed.exists() {
        tracing::debug!("{} found in managed dir {}", tool, managed.display());
        return Some(managed);
    }

    tracing::debug!("{} not found", tool);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_name_matches_platform() {
        if cfg!(target_os = "windows") {
            assert_eq!(bin_name("yt-dlp"), "yt-dlp.exe");
        } else {
            assert_eq!(bin_name("yt-dlp"), "yt-dlp");
        }
    }

    #[test]
    fn ffmpeg_uses_single_dash_version_flag() {
        assert_eq!(version_flag_for("ffmpeg"), "-version");
        assert_eq!(version_flag_for("yt-dlp"), "--version");
    }

    #[tokio::test]
    async fn existing_configured_path_wins() {
        let exe = std::env::current_exe().unwrap();
        let found = find_tool("yt-dlp", Some(&exe)).await;
        assert_eq!(found, Some(exe));
    }
}
