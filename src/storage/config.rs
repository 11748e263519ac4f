use std::path::{Path, PathBuf};

use anyhow::anyhow;
use mp3grab_core::fs_paths::{AppPaths, DesktopPaths};
use mp3grab_core::models::settings::AppSettings;

const SETTINGS_FILE: &str = "settings.json";

pub fn settings_path() -> PathBuf {
    DesktopPaths.data_dir().join(SETTINGS_FILE)
}

pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable settings are not an error; the defaults apply.
pub fn load_settings_from(path: &Path) -> AppSettings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return AppSettings::default(),
    };

    match serde_json::from_str::<AppSettings>(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring malformed settings at {}: {}", path.display(), e);
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> anyhow::Result<PathBuf> {
    let path = settings_path();
    save_settings_to(&path, settings)?;
    Ok(path)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Cannot create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json).map_err(|e| anyhow!("Cannot write {}: {}", path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_settings_from(&dir.path().join(SETTINGS_FILE)),
            AppSettings::default()
        );
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_settings_from(&path), AppSettings::default());
    }

    #[test]
    fn saved_settings_are_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let mut settings = AppSettings::default();
        settings.download.audio_format = "m4a".into();
        settings.advanced.backend_timeout_secs = Some(90);

        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }
}
