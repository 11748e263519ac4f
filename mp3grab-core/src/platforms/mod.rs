use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod traits;

/// A media platform the app knows how to pull audio from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    SoundCloud,
}

// Ids and path segments are ASCII only; `(?i)` covers scheme and host casing.
const YOUTUBE_SHAPES: &[&str] = &[
    r"(?i)^(?:https?://)?(?:www\.)?youtube\.com/watch\?v=[a-z0-9_-]{11}(?:[&#?].*)?$",
    r"(?i)^(?:https?://)?(?:www\.)?youtube\.com/shorts/[a-z0-9_-]{11}(?:[&#?].*)?$",
    r"(?i)^(?:https?://)?(?:www\.)?youtube\.com/embed/[a-z0-9_-]{11}(?:[&#?].*)?$",
    r"(?i)^(?:https?://)?youtu\.be/[a-z0-9_-]{11}(?:[&#?].*)?$",
    r"(?i)^(?:https?://)?(?:www\.)?youtube\.com/playlist\?list=[a-z0-9_-]+(?:[&#?].*)?$",
];

const SOUNDCLOUD_SHAPES: &[&str] = &[
    r"(?i)^(?:https?://)?(?:www\.)?soundcloud\.com/[a-z0-9_-]+/[a-z0-9_-]+(?:[?#].*)?$",
    r"(?i)^(?:https?://)?(?:www\.)?soundcloud\.com/[a-z0-9_-]+/sets/[a-z0-9_-]+(?:[?#].*)?$",
];

static YOUTUBE: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(YOUTUBE_SHAPES));
static SOUNDCLOUD: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SOUNDCLOUD_SHAPES));

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

impl Platform {
    /// Evaluation order of [`Platform::from_url`]. Shapes of different
    /// platforms never share a host today; a platform added later that does
    /// overlap loses to everything listed before it.
    pub const ALL: [Platform; 2] = [Platform::YouTube, Platform::SoundCloud];

    /// Classifies a raw user input. Returns `None` for anything that is not
    /// one of the accepted URL shapes, including empty or blank input.
    pub fn from_url(raw: &str) -> Option<Self> {
        let clean = raw.trim();
        if clean.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|p| p.matches(clean))
    }

    /// Whether `raw` is one of this platform's shapes, after trimming.
    pub fn matches(self, raw: &str) -> bool {
        let clean = raw.trim();
        self.shapes().iter().any(|re| re.is_match(clean))
    }

    pub fn shapes(self) -> &'static [Regex] {
        match self {
            Platform::YouTube => YOUTUBE.as_slice(),
            Platform::SoundCloud => SOUNDCLOUD.as_slice(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::SoundCloud => "soundcloud",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
