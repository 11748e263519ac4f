const ERROR_TAG: &str = "Error";
const OK_TAG: &str = "Ok";
const CANCELED_TAG: &str = "canceled";
const INVALID_TAG: &str = "invalid";

/// A backend reply, decoded from the tagged string that crosses the command
/// boundary. Nothing outside this module looks at the raw tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    Ok(String),
    Error(String),
    Canceled(String),
    Invalid(String),
    /// No known leading tag; holds the whole reply.
    Unrecognized(String),
}

impl BackendReply {
    /// Tags are matched case-sensitively against the start of the reply, in
    /// the order `Error`, `Ok`, `canceled`, `invalid`.
    pub fn decode(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(ERROR_TAG) {
            return Self::Error(detail(rest));
        }
        if let Some(rest) = raw.strip_prefix(OK_TAG) {
            return Self::Ok(detail(rest));
        }
        if let Some(rest) = raw.strip_prefix(CANCELED_TAG) {
            return Self::Canceled(detail(rest));
        }
        if let Some(rest) = raw.strip_prefix(INVALID_TAG) {
            return Self::Invalid(detail(rest));
        }
        Self::Unrecognized(raw.to_string())
    }

    pub fn ok(detail: impl Into<String>) -> Self {
        Self::Ok(detail.into())
    }

    pub fn error(detail: impl Into<String>) -> Self {
        Self::Error(detail.into())
    }

    pub fn canceled() -> Self {
        Self::Canceled(String::new())
    }

    pub fn invalid() -> Self {
        Self::Invalid("URL".to_string())
    }

    /// Encodes the reply the way the backend sends it, e.g. `Ok: path=/x.mp3`.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Ok(d) => tagged(OK_TAG, d, ": "),
            Self::Error(d) => tagged(ERROR_TAG, d, ": "),
            Self::Canceled(d) => tagged(CANCELED_TAG, d, ": "),
            Self::Invalid(d) => tagged(INVALID_TAG, d, " "),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }
}

fn detail(rest: &str) -> String {
    rest.trim_start().trim_start_matches(':').trim().to_string()
}

fn tagged(tag: &str, detail: &str, sep: &str) -> String {
    if detail.is_empty() {
        tag.to_string()
    } else {
        format!("{tag}{sep}{detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_tag() {
        assert_eq!(
            BackendReply::decode("Ok: path=/music/a.mp3"),
            BackendReply::Ok("path=/music/a.mp3".into())
        );
        assert_eq!(
            BackendReply::decode("Error: disk full"),
            BackendReply::Error("disk full".into())
        );
        assert_eq!(BackendReply::decode("canceled"), BackendReply::Canceled(String::new()));
        assert_eq!(BackendReply::decode("invalid URL"), BackendReply::Invalid("URL".into()));
    }

    #[test]
    fn tags_are_prefix_and_case_sensitive() {
        assert_eq!(BackendReply::decode("Okay"), BackendReply::Ok("ay".into()));
        assert_eq!(
            BackendReply::decode("error: lowercase"),
            BackendReply::Unrecognized("error: lowercase".into())
        );
        assert_eq!(
            BackendReply::decode("Canceled"),
            BackendReply::Unrecognized("Canceled".into())
        );
        assert_eq!(
            BackendReply::decode(" Ok: leading space"),
            BackendReply::Unrecognized(" Ok: leading space".into())
        );
    }

    #[test]
    fn unknown_shapes_keep_the_whole_reply() {
        let raw = "yt-dlp failed: HTTP Error 403";
        assert_eq!(BackendReply::decode(raw), BackendReply::Unrecognized(raw.into()));
        assert_eq!(BackendReply::decode(""), BackendReply::Unrecognized(String::new()));
    }

    #[test]
    fn wire_form_decodes_to_the_same_variant() {
        let replies = [
            BackendReply::ok("path=/tmp/x.mp3"),
            BackendReply::error("yt-dlp title error: nope"),
            BackendReply::canceled(),
            BackendReply::invalid(),
        ];
        for reply in replies {
            assert_eq!(BackendReply::decode(&reply.to_wire()), reply);
        }
        assert_eq!(BackendReply::canceled().to_wire(), "canceled");
        assert_eq!(BackendReply::invalid().to_wire(), "invalid URL");
        assert_eq!(BackendReply::ok("saved").to_wire(), "Ok: saved");
    }
}
