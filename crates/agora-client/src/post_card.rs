//! Post card: one post plus its local like, comment and share interactions.
//!
//! A card starts from an immutable snapshot of the post. Likes and comments
//! made through the card live only in the card and are never written back to
//! the feed's canonical list.

use chrono::Utc;
use tracing::{debug, info};

use agora_shared::share::{self, ShareAction, ShareTarget};
use agora_shared::{Comment, CommentId, FeedError, IdGenerator, Post, PostId, Result};

use crate::config::{ClientConfig, FeatureFlags};
use crate::events::{Toast, MSG_INSTAGRAM_UNSUPPORTED, MSG_LINK_COPIED};
use crate::host::Host;

#[derive(Debug, Clone)]
pub struct PostCard {
    snapshot: Post,
    features: FeatureFlags,
    current_user: String,
    liked: bool,
    /// Wider than `Post::likes` so a toggle can never overflow.
    likes: u64,
    comments: Vec<Comment>,
    comments_open: bool,
    comment_draft: String,
}

impl PostCard {
    pub fn new(snapshot: Post, config: &ClientConfig) -> Self {
        Self {
            likes: u64::from(snapshot.likes),
            comments: snapshot.comments.clone(),
            snapshot,
            features: config.features,
            current_user: config.current_user.clone(),
            liked: false,
            comments_open: false,
            comment_draft: String::new(),
        }
    }

    pub fn id(&self) -> PostId {
        self.snapshot.id
    }

    /// The post as it was handed to the card.
    pub fn snapshot(&self) -> &Post {
        &self.snapshot
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comments_open(&self) -> bool {
        self.comments_open
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn share_enabled(&self) -> bool {
        self.features.share_menu_enabled
    }

    /// Flip the like flag; the count moves in lockstep. Returns the new count.
    pub fn toggle_like(&mut self) -> u64 {
        if self.liked {
            self.likes -= 1;
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
        debug!(post_id = %self.id(), liked = self.liked, likes = self.likes, "Like toggled");
        self.likes
    }

    /// Show or hide the comment panel. Returns whether it is now open.
    pub fn toggle_comments(&mut self) -> bool {
        self.comments_open = !self.comments_open;
        self.comments_open
    }

    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    /// Append the draft as a new comment.
    ///
    /// A blank draft is ignored without notice and left as is.
    pub fn submit_comment(&mut self, ids: &IdGenerator) -> Option<CommentId> {
        let content = self.comment_draft.trim();
        if content.is_empty() {
            return None;
        }

        let comment = Comment::authored(
            ids.next_comment_id(),
            content,
            &self.current_user,
            Utc::now(),
        );
        let id = comment.id;
        self.comments.push(comment);
        self.comment_draft.clear();

        info!(post_id = %self.id(), comment_id = %id, "Comment added");
        Some(id)
    }

    /// Share this post to `target` through the host.
    pub fn share(&self, target: ShareTarget, host: &mut impl Host) -> Result<ShareAction> {
        if !self.features.share_menu_enabled {
            return Err(FeedError::ShareMenuDisabled);
        }

        let location = host.location();
        let action = share::resolve(target, &location, &self.snapshot.content);

        match &action {
            ShareAction::OpenWindow { url, features } => host.open_window(url, features)?,
            ShareAction::Unsupported => host.toast(Toast::info(MSG_INSTAGRAM_UNSUPPORTED)),
            ShareAction::CopyToClipboard(text) => {
                host.write_clipboard(text)?;
                host.toast(Toast::success(MSG_LINK_COPIED));
            }
        }

        info!(post_id = %self.id(), target = target.label(), "Post shared");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    fn card_with_likes(likes: u32) -> PostCard {
        let mut post = Post::authored(PostId(1), "Nice day".into(), None, "Sarah", Utc::now());
        post.likes = likes;
        PostCard::new(post, &ClientConfig::default())
    }

    #[test]
    fn test_like_toggle_round_trip() {
        let mut card = card_with_likes(15);
        assert!(!card.is_liked());

        assert_eq!(card.toggle_like(), 16);
        assert!(card.is_liked());

        assert_eq!(card.toggle_like(), 15);
        assert!(!card.is_liked());
    }

    #[test]
    fn test_like_at_max_count() {
        let mut card = card_with_likes(u32::MAX);

        assert_eq!(card.toggle_like(), u64::from(u32::MAX) + 1);
        assert!(card.is_liked());

        assert_eq!(card.toggle_like(), u64::from(u32::MAX));
        assert!(!card.is_liked());
    }

    #[test]
    fn test_like_from_zero() {
        let mut card = card_with_likes(0);
        card.toggle_like();
        card.toggle_like();
        assert_eq!(card.likes(), 0);
    }

    #[test]
    fn test_comment_appends_trimmed() {
        let mut card = card_with_likes(0);
        let ids = IdGenerator::new();
        card.set_comment_draft("  great post  ");

        let id = card.submit_comment(&ids).unwrap();
        assert_eq!(card.comments().len(), 1);
        let comment = card.comments().last().unwrap();
        assert_eq!(comment.id, id);
        assert_eq!(comment.content, "great post");
        assert_eq!(comment.author, "You");
        assert_eq!(card.comment_draft(), "");
    }

    #[test]
    fn test_blank_comment_ignored() {
        let mut card = card_with_likes(0);
        let ids = IdGenerator::new();

        assert!(card.submit_comment(&ids).is_none());
        card.set_comment_draft(" \t ");
        assert!(card.submit_comment(&ids).is_none());

        assert!(card.comments().is_empty());
        assert_eq!(card.comment_draft(), " \t ");
    }

    #[test]
    fn test_comment_panel_toggle_leaves_data_alone() {
        let mut card = card_with_likes(3);
        assert!(card.toggle_comments());
        assert!(!card.toggle_comments());
        assert_eq!(card.likes(), 3);
        assert!(card.comments().is_empty());
    }

    #[test]
    fn test_local_state_does_not_touch_snapshot() {
        let mut card = card_with_likes(15);
        let ids = IdGenerator::new();
        card.toggle_like();
        card.set_comment_draft("hi");
        card.submit_comment(&ids);

        assert_eq!(card.snapshot().likes, 15);
        assert!(card.snapshot().comments.is_empty());
    }

    #[test]
    fn test_share_copy_link() {
        let card = card_with_likes(0);
        let mut host = MemoryHost::new("https://feed.example/");

        card.share(ShareTarget::CopyLink, &mut host).unwrap();
        assert_eq!(host.clipboard(), Some("https://feed.example/"));
        assert_eq!(host.toasts()[0].description, MSG_LINK_COPIED);
        assert!(host.opened().is_empty());
    }

    #[test]
    fn test_share_twitter_opens_window() {
        let card = card_with_likes(0);
        let mut host = MemoryHost::new("https://feed.example/");

        card.share(ShareTarget::Twitter, &mut host).unwrap();
        let opened = &host.opened()[0];
        assert_eq!(
            opened.url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Ffeed.example%2F&text=Nice%20day"
        );
        assert_eq!(opened.features, "width=600,height=400");
        assert!(host.toasts().is_empty());
    }

    #[test]
    fn test_share_instagram_informs() {
        let card = card_with_likes(0);
        let mut host = MemoryHost::new("https://feed.example/");

        let action = card.share(ShareTarget::Instagram, &mut host).unwrap();
        assert_eq!(action, ShareAction::Unsupported);
        assert_eq!(host.toasts()[0].title, "Info");
        assert!(host.clipboard().is_none());
        assert!(host.opened().is_empty());
    }

    #[test]
    fn test_share_disabled() {
        let mut config = ClientConfig::default();
        config.features.share_menu_enabled = false;
        let post = Post::authored(PostId(1), "x".into(), None, "Sarah", Utc::now());
        let card = PostCard::new(post, &config);
        let mut host = MemoryHost::new("https://feed.example/");

        let err = card.share(ShareTarget::CopyLink, &mut host).unwrap_err();
        assert!(matches!(err, FeedError::ShareMenuDisabled));
        assert!(host.clipboard().is_none());
    }
}
