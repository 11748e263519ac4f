use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fs_paths::{AppPaths, DesktopPaths};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub download: DownloadSettings,
    #[serde(default)]
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_audio_format")]
    pub audio_format: String,
    #[serde(default)]
    pub extra_ytdlp_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdvancedSettings {
    /// Overrides yt-dlp discovery on `PATH` and in the managed bin dir.
    #[serde(default)]
    pub ytdlp_path: Option<PathBuf>,
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
    /// Kill the backend after this many seconds. `None` waits forever.
    #[serde(default)]
    pub backend_timeout_secs: Option<u64>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_output_dir() -> PathBuf {
    DesktopPaths.downloads_dir()
}

pub fn default_audio_format() -> String {
    "mp3".into()
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            audio_format: default_audio_format(),
            extra_ytdlp_flags: Vec::new(),
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            download: DownloadSettings::default(),
            advanced: AdvancedSettings::default(),
        }
    }
}
