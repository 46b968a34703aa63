use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const COPIED_NOTICE: &str = "Joke copied to clipboard!";
pub const COPY_FAILED_NOTICE: &str = "Couldn't copy the joke, try selecting it instead.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    WhatsApp,
    Twitter,
    Facebook,
    Copy,
}

#[derive(Error, Debug)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    /// Open this link in a new window.
    Open(Url),
    /// Tell the user something, the copy went through or it didn't.
    Notice(String),
}

/// Share link for a platform, `None` for [`SharePlatform::Copy`].
pub fn share_url(platform: SharePlatform, text: &str, page_url: &str) -> Option<Url> {
    let (base, params): (&str, Vec<(&str, &str)>) = match platform {
        SharePlatform::WhatsApp => ("https://wa.me/", vec![("text", text)]),
        SharePlatform::Twitter => ("https://twitter.com/intent/tweet", vec![("text", text)]),
        SharePlatform::Facebook => (
            "https://www.facebook.com/sharer/sharer.php",
            vec![("u", page_url), ("quote", text)],
        ),
        SharePlatform::Copy => return None,
    };

    Url::parse_with_params(base, params).ok()
}

pub fn share(
    platform: SharePlatform,
    text: &str,
    page_url: &str,
    clipboard: &mut impl Clipboard,
) -> ShareOutcome {
    if let Some(url) = share_url(platform, text, page_url) {
        return ShareOutcome::Open(url);
    }

    match clipboard.write_text(text) {
        Ok(()) => ShareOutcome::Notice(COPIED_NOTICE.to_string()),
        Err(e) => {
            warn!("{e}");
            ShareOutcome::Notice(COPY_FAILED_NOTICE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<String>);

    impl Clipboard for Recorder {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl Clipboard for Denied {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("permission denied".to_string()))
        }
    }

    const JOKE: &str = "Why? Because & so!";

    #[test]
    fn test_links_encode_text() {
        let whatsapp = share_url(SharePlatform::WhatsApp, JOKE, "").unwrap();
        assert_eq!(whatsapp.as_str(), "https://wa.me/?text=Why%3F+Because+%26+so%21");

        let twitter = share_url(SharePlatform::Twitter, JOKE, "").unwrap();
        assert_eq!(twitter.host_str(), Some("twitter.com"));
        assert_eq!(twitter.query_pairs().next().unwrap().1, JOKE);
    }

    #[test]
    fn test_facebook_carries_page() {
        let url = share_url(SharePlatform::Facebook, JOKE, "https://jokes.example/").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs,
            vec![
                ("u".to_string(), "https://jokes.example/".to_string()),
                ("quote".to_string(), JOKE.to_string()),
            ]
        );
    }

    #[test]
    fn test_copy_uses_clipboard() {
        let mut clipboard = Recorder(Vec::new());

        let outcome = share(SharePlatform::Copy, JOKE, "", &mut clipboard);

        assert_eq!(outcome, ShareOutcome::Notice(COPIED_NOTICE.to_string()));
        assert_eq!(clipboard.0, vec![JOKE]);
    }

    #[test]
    fn test_clipboard_failure_is_a_notice() {
        let outcome = share(SharePlatform::Copy, JOKE, "", &mut Denied);

        assert_eq!(outcome, ShareOutcome::Notice(COPY_FAILED_NOTICE.to_string()));
    }
}
