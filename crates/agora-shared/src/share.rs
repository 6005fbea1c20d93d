//! Share targets and share-intent URL construction.
//!
//! Nothing here touches the network: a share resolves to an action the host
//! carries out (open a browsing context, write the clipboard) or to nothing
//! at all for targets without a web intent.

use serde::{Deserialize, Serialize};

use crate::constants::{FACEBOOK_SHARE_URL, SHARE_WINDOW_FEATURES, TWITTER_SHARE_URL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Facebook,
    Twitter,
    Instagram,
    #[serde(rename = "copy")]
    CopyLink,
}

impl ShareTarget {
    /// Menu order.
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Facebook,
        ShareTarget::Twitter,
        ShareTarget::Instagram,
        ShareTarget::CopyLink,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Instagram => "Instagram",
            ShareTarget::CopyLink => "Copy Link",
        }
    }
}

impl std::str::FromStr for ShareTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Ok(ShareTarget::Facebook),
            "twitter" => Ok(ShareTarget::Twitter),
            "instagram" => Ok(ShareTarget::Instagram),
            "copy" | "link" | "copy-link" => Ok(ShareTarget::CopyLink),
            other => Err(format!("unknown share target: {other}")),
        }
    }
}

/// What the host must do to complete a share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open `url` in a new browsing context.
    OpenWindow { url: String, features: &'static str },
    /// The platform has no web intent; the user is told to share by hand.
    Unsupported,
    /// Place `text` on the system clipboard.
    CopyToClipboard(String),
}

pub fn facebook_url(page_url: &str) -> String {
    format!("{FACEBOOK_SHARE_URL}?u={}", urlencoding::encode(page_url))
}

pub fn twitter_url(page_url: &str, text: &str) -> String {
    format!(
        "{TWITTER_SHARE_URL}?url={}&text={}",
        urlencoding::encode(page_url),
        urlencoding::encode(text)
    )
}

/// Resolve a share of a post with body `content` shown at `page_url`.
pub fn resolve(target: ShareTarget, page_url: &str, content: &str) -> ShareAction {
    match target {
        ShareTarget::Facebook => ShareAction::OpenWindow {
            url: facebook_url(page_url),
            features: SHARE_WINDOW_FEATURES,
        },
        ShareTarget::Twitter => ShareAction::OpenWindow {
            url: twitter_url(page_url, content),
            features: SHARE_WINDOW_FEATURES,
        },
        ShareTarget::Instagram => ShareAction::Unsupported,
        ShareTarget::CopyLink => ShareAction::CopyToClipboard(page_url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://feed.example/?tab=home";

    #[test]
    fn test_facebook_url_encodes_location() {
        assert_eq!(
            facebook_url(PAGE),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Ffeed.example%2F%3Ftab%3Dhome"
        );
    }

    #[test]
    fn test_twitter_url_carries_text() {
        let url = twitter_url(PAGE, "Hello world & more");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Ffeed.example%2F%3Ftab%3Dhome&text=Hello%20world%20%26%20more"
        );
    }

    #[test]
    fn test_resolve_each_target() {
        match resolve(ShareTarget::Facebook, PAGE, "x") {
            ShareAction::OpenWindow { features, .. } => assert_eq!(features, "width=600,height=400"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(resolve(ShareTarget::Instagram, PAGE, "x"), ShareAction::Unsupported);
        assert_eq!(
            resolve(ShareTarget::CopyLink, PAGE, "x"),
            ShareAction::CopyToClipboard(PAGE.to_string())
        );
    }

    #[test]
    fn test_parse_target() {
        assert_eq!("Twitter".parse::<ShareTarget>().unwrap(), ShareTarget::Twitter);
        assert_eq!("copy".parse::<ShareTarget>().unwrap(), ShareTarget::CopyLink);
        assert!("myspace".parse::<ShareTarget>().is_err());
    }
}
