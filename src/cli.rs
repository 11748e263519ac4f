use std::path::PathBuf;

use clap::{ArgAction, Parser};
use mp3grab_core::models::settings::AppSettings;

/// Paste a YouTube or SoundCloud URL, get the audio.
#[derive(Debug, Parser)]
#[command(name = "mp3grab", version, about)]
pub struct Cli {
    /// URLs to download in order. Without any, URLs are read from stdin.
    pub urls: Vec<String>,

    /// Folder the audio files are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Audio format passed to yt-dlp (mp3, m4a, opus, ...).
    #[arg(long, value_name = "FMT")]
    pub audio_format: Option<String>,

    /// Path to the yt-dlp binary.
    #[arg(long, value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Path to the ffmpeg binary.
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<PathBuf>,

    /// Give up on a download after this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write the effective settings back to the settings file.
    #[arg(long)]
    pub save_settings: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overrides the loaded settings with whatever was given on the command line.
    pub fn apply(&self, settings: &mut AppSettings) {
        if let Some(dir) = &self.output_dir {
            settings.download.output_dir = dir.clone();
        }
        if let Some(format) = &self.audio_format {
            settings.download.audio_format = format.clone();
        }
        if let Some(path) = &self.ytdlp {
            settings.advanced.ytdlp_path = Some(path.clone());
        }
        if let Some(path) = &self.ffmpeg {
            settings.advanced.ffmpeg_path = Some(path.clone());
        }
        if let Some(secs) = self.timeout {
            settings.advanced.backend_timeout_secs = Some(secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_interactive() {
        let cli = Cli::try_parse_from(["mp3grab"]).unwrap();
        assert!(cli.urls.is_empty());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.save_settings);
    }

    #[test]
    fn urls_and_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "mp3grab",
            "-vv",
            "--output-dir",
            "/music",
            "--timeout",
            "300",
            "https://youtu.be/aaaaaaaaaaa",
            "https://soundcloud.com/a/b",
        ])
        .unwrap();
        assert_eq!(cli.urls.len(), 2);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/music")));
        assert_eq!(cli.timeout, Some(300));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["mp3grab", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "mp3grab",
            "--audio-format",
            "opus",
            "--ytdlp",
            "/opt/yt-dlp",
            "--timeout",
            "60",
        ])
        .unwrap();
        let mut settings = AppSettings::default();
        let output_dir = settings.download.output_dir.clone();

        cli.apply(&mut settings);

        assert_eq!(settings.download.audio_format, "opus");
        assert_eq!(settings.download.output_dir, output_dir);
        assert_eq!(settings.advanced.ytdlp_path, Some(PathBuf::from("/opt/yt-dlp")));
        assert_eq!(settings.advanced.ffmpeg_path, None);
        assert_eq!(settings.advanced.backend_timeout_secs, Some(60));
    }
}
