//! View models handed to a front end, and a plain-text rendering of them.
//!
//! Relative times are computed at render time against the supplied clock and
//! never stored.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use agora_shared::constants::APP_TITLE;
use agora_shared::models::iso8601;
use agora_shared::share::ShareTarget;
use agora_shared::time::time_ago;
use agora_shared::Comment;

use crate::composer::Composer;
use crate::feed::FeedView;
use crate::post_card::PostCard;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub time_ago: String,
}

impl CommentView {
    pub fn from_comment(c: &Comment, now: DateTime<Utc>) -> Self {
        Self {
            id: c.id.0,
            author: c.author.clone(),
            content: c.content.clone(),
            timestamp: iso8601::format(&c.timestamp),
            time_ago: time_ago(c.timestamp, now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCardView {
    pub id: i64,
    pub author: String,
    pub content: String,
    /// Data URL.
    pub image: Option<String>,
    pub timestamp: String,
    pub time_ago: String,
    pub likes: u64,
    pub liked: bool,
    pub comment_count: usize,
    pub comments_open: bool,
    pub comments: Vec<CommentView>,
    pub comment_draft: String,
    /// Empty when the share menu is disabled.
    pub share_targets: Vec<&'static str>,
}

impl PostCardView {
    pub fn from_card(card: &PostCard, now: DateTime<Utc>) -> Self {
        let post = card.snapshot();
        Self {
            id: post.id.0,
            author: post.author.clone(),
            content: post.content.clone(),
            image: post.image.as_ref().map(|i| i.to_data_url()),
            timestamp: iso8601::format(&post.timestamp),
            time_ago: time_ago(post.timestamp, now),
            likes: card.likes(),
            liked: card.is_liked(),
            comment_count: card.comments().len(),
            comments_open: card.comments_open(),
            comments: card
                .comments()
                .iter()
                .map(|c| CommentView::from_comment(c, now))
                .collect(),
            comment_draft: card.comment_draft().to_string(),
            share_targets: if card.share_enabled() {
                ShareTarget::ALL.iter().map(ShareTarget::label).collect()
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerView {
    pub text: String,
    pub image_preview: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub title: &'static str,
    pub composer: ComposerView,
    pub posts: Vec<PostCardView>,
}

pub fn render_page(composer: &Composer, view: &FeedView, now: DateTime<Utc>) -> FeedPage {
    FeedPage {
        title: APP_TITLE,
        composer: ComposerView {
            text: composer.text().to_string(),
            image_preview: composer.image_preview(),
        },
        posts: view
            .cards()
            .iter()
            .map(|card| PostCardView::from_card(card, now))
            .collect(),
    }
}

/// Terminal rendering of a page.
pub fn render_text(page: &FeedPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", page.title);

    if !page.composer.text.is_empty() || page.composer.image_preview.is_some() {
        let _ = writeln!(out, "draft: {:?}", page.composer.text);
        if let Some(preview) = &page.composer.image_preview {
            let _ = writeln!(out, "draft image: {}", abbreviate(preview));
        }
    }

    for post in &page.posts {
        let _ = writeln!(out);
        let _ = writeln!(out, "#{} {} · {}", post.id, post.author, post.time_ago);
        if !post.content.is_empty() {
            let _ = writeln!(out, "  {}", post.content);
        }
        if let Some(image) = &post.image {
            let _ = writeln!(out, "  [image {}]", abbreviate(image));
        }
        let heart = if post.liked { "♥" } else { "♡" };
        let _ = write!(out, "  {heart} {}   💬 {}", post.likes, post.comment_count);
        if !post.share_targets.is_empty() {
            let _ = write!(out, "   ↗ {}", post.share_targets.join(" | "));
        }
        let _ = writeln!(out);

        if post.comments_open {
            for c in &post.comments {
                let _ = writeln!(out, "    > {} ({}): {}", c.author, c.time_ago, c.content);
            }
            let _ = writeln!(out, "    > write a comment...");
        }
    }
    out
}

fn abbreviate(data_url: &str) -> String {
    const KEEP: usize = 40;
    if data_url.len() <= KEEP {
        data_url.to_string()
    } else {
        let cut = data_url
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|&i| i <= KEEP)
            .last()
            .unwrap_or(0);
        format!("{}... ({} chars)", &data_url[..cut], data_url.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::feed::Feed;
    use chrono::TimeZone;

    fn page(config: &ClientConfig) -> (FeedView, Composer) {
        let mut view = FeedView::new();
        view.sync(&Feed::seeded(), config);
        (view, Composer::new(config))
    }

    #[test]
    fn test_page_view_models() {
        let config = ClientConfig::default();
        let (mut view, composer) = page(&config);
        view.card_mut(agora_shared::PostId(1)).unwrap().toggle_like();

        let now = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
        let page = render_page(&composer, &view, now);

        assert_eq!(page.title, "Social Feed");
        assert_eq!(page.posts.len(), 2);
        let first = &page.posts[0];
        assert_eq!(first.likes, 16);
        assert!(first.liked);
        assert_eq!(first.time_ago, "about 2 hours ago");
        assert_eq!(first.comment_count, 1);
        assert_eq!(first.comments[0].time_ago, "about 2 hours ago");
        assert_eq!(first.share_targets, vec!["Facebook", "Twitter", "Instagram", "Copy Link"]);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let config = ClientConfig::default();
        let (view, composer) = page(&config);
        let json = serde_json::to_value(render_page(&composer, &view, Utc::now())).unwrap();
        assert_eq!(json["posts"][1]["commentCount"], 0);
        assert_eq!(json["posts"][0]["timestamp"], "2024-02-10T10:00:00.000Z");
        assert!(json["composer"]["imagePreview"].is_null());
    }

    #[test]
    fn test_text_shows_comments_only_when_open() {
        let config = ClientConfig::default();
        let (mut view, composer) = page(&config);
        let now = Utc::now();

        let closed = render_text(&render_page(&composer, &view, now));
        assert!(!closed.contains("Mike Chen"));

        view.card_mut(agora_shared::PostId(1)).unwrap().toggle_comments();
        let open = render_text(&render_page(&composer, &view, now));
        assert!(open.contains("Mike Chen"));
    }

    #[test]
    fn test_share_targets_hidden_when_disabled() {
        let mut config = ClientConfig::default();
        config.features.share_menu_enabled = false;
        let (view, composer) = page(&config);
        let page = render_page(&composer, &view, Utc::now());
        assert!(page.posts.iter().all(|p| p.share_targets.is_empty()));
    }
}
