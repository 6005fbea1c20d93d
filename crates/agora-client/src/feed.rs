//! Feed container: the canonical newest-first post list and the cards
//! rendered from it.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use agora_shared::{Comment, CommentId, Post, PostId};

use crate::config::ClientConfig;
use crate::post_card::PostCard;

/// Ordered post list. Order is insertion order, newest first; the
/// `timestamp` field plays no part in it.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// The feed every session starts with.
    pub fn seeded() -> Self {
        Self {
            posts: fixture_posts(),
        }
    }

    /// Insert `post` ahead of every existing post.
    pub fn prepend(&mut self, post: Post) {
        info!(post_id = %post.id, total = self.posts.len() + 1, "Post added to feed");
        self.posts.insert(0, post);
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// One card per feed entry, keyed by post id.
///
/// [`FeedView::sync`] reconciles against the feed the way keyed list
/// rendering does: cards for ids already on screen are kept with their local
/// state, cards for new ids are built from the post, cards for ids no longer
/// in the feed are dropped.
#[derive(Debug, Default)]
pub struct FeedView {
    cards: Vec<PostCard>,
}

impl FeedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, feed: &Feed, config: &ClientConfig) {
        let mut existing: HashMap<PostId, PostCard> =
            self.cards.drain(..).map(|card| (card.id(), card)).collect();

        self.cards = feed
            .posts()
            .iter()
            .map(|post| {
                existing
                    .remove(&post.id)
                    .unwrap_or_else(|| PostCard::new(post.clone(), config))
            })
            .collect();
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn card(&self, id: PostId) -> Option<&PostCard> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: PostId) -> Option<&mut PostCard> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }
}

fn fixture_ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn fixture_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(1),
            content: "Just launched my new project! 🚀 Super excited to share it with everyone. What do you think?".to_string(),
            image: None,
            author: "Sarah Johnson".to_string(),
            timestamp: fixture_ts(2024, 2, 10, 10, 0),
            likes: 15,
            comments: vec![Comment::authored(
                CommentId(1),
                "This looks amazing! Can't wait to try it out.",
                "Mike Chen",
                fixture_ts(2024, 2, 10, 10, 30),
            )],
        },
        Post {
            id: PostId(2),
            content: "Beautiful sunset at the beach today. Nature never fails to amaze me. 🌅".to_string(),
            image: None,
            author: "Alex Thompson".to_string(),
            timestamp: fixture_ts(2024, 2, 10, 9, 0),
            likes: 24,
            comments: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, ts: DateTime<Utc>) -> Post {
        Post::authored(PostId(id), format!("post {id}"), None, "You", ts)
    }

    #[test]
    fn test_seeded_fixtures() {
        let feed = Feed::seeded();
        assert_eq!(feed.len(), 2);
        let ids: Vec<_> = feed.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PostId(1), PostId(2)]);
        assert_eq!(feed.posts()[0].likes, 15);
        assert_eq!(feed.posts()[0].comments.len(), 1);
        assert_eq!(feed.posts()[0].comments[0].author, "Mike Chen");
        assert_eq!(feed.posts()[1].likes, 24);
        assert!(feed.posts()[1].comments.is_empty());
    }

    #[test]
    fn test_prepend_ignores_timestamp() {
        let mut feed = Feed::seeded();
        // Older than both fixtures, still goes first.
        feed.prepend(post(100, fixture_ts(2001, 1, 1, 0, 0)));
        feed.prepend(post(200, fixture_ts(1999, 1, 1, 0, 0)));

        let ids: Vec<_> = feed.posts().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![200, 100, 1, 2]);
    }

    #[test]
    fn test_view_keeps_card_state_across_sync() {
        let config = ClientConfig::default();
        let mut feed = Feed::seeded();
        let mut view = FeedView::new();
        view.sync(&feed, &config);

        view.card_mut(PostId(1)).unwrap().toggle_like();
        feed.prepend(post(300, Utc::now()));
        view.sync(&feed, &config);

        assert_eq!(view.cards().len(), 3);
        assert_eq!(view.cards()[0].id(), PostId(300));
        let card = view.card(PostId(1)).unwrap();
        assert!(card.is_liked());
        assert_eq!(card.likes(), 16);
        // canonical list is not updated by card interactions
        assert_eq!(feed.get(PostId(1)).unwrap().likes, 15);
    }
}
