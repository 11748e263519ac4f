use regex::Regex;
use std::sync::LazyLock;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const FALLBACK_NAME: &str = "audio";

/// Turns a media title into a file stem: ASCII letters, digits, space, `-`
/// and `_` only. Titles with nothing left (e.g. all CJK) keep their original
/// characters minus the ones the filesystem forbids.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let kept = WS_RE.replace_all(kept.trim(), " ");
    if !kept.is_empty() {
        return kept.into_owned();
    }

    let fallback = sanitize_filename::sanitize(title.trim());
    let fallback = WS_RE.replace_all(fallback.trim(), " ");
    if fallback.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        fallback.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ascii_word_characters() {
        assert_eq!(sanitize_title("Artist - Song (Official Video)"), "Artist - Song Official Video");
    }

    #[test]
    fn strips_path_separators() {
        assert_eq!(sanitize_title("AC/DC: Back in Black"), "ACDC Back in Black");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(sanitize_title("  lots   of\tspace  "), "lots of space");
        assert_eq!(sanitize_title("line one\nline two"), "line one line two");
    }

    #[test]
    fn non_ascii_titles_keep_their_letters() {
        assert_eq!(sanitize_title("夜に駆ける"), "夜に駆ける");
    }

    #[test]
    fn nothing_usable_falls_back() {
        assert_eq!(sanitize_title("???"), "audio");
        assert_eq!(sanitize_title(""), "audio");
    }
}
