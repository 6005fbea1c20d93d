//! Application state shared by every command.
//!
//! [`AppState`] owns the composer, the canonical feed and the rendered
//! cards. The feed is only ever mutated by a successful composer submit.

use std::path::Path;

use bytes::Bytes;
use chrono::Utc;

use agora_shared::share::{ShareAction, ShareTarget};
use agora_shared::{CommentId, FeedError, IdGenerator, InlineImage, PostId, Result};

use crate::composer::{load_image, Composer};
use crate::config::ClientConfig;
use crate::feed::{Feed, FeedView};
use crate::host::Host;
use crate::post_card::PostCard;
use crate::render::{render_page, FeedPage};

pub struct AppState {
    pub config: ClientConfig,
    pub ids: IdGenerator,
    pub composer: Composer,
    pub feed: Feed,
    pub view: FeedView,
}

impl AppState {
    /// Fresh session: seeded feed, empty drafts.
    pub fn new(config: ClientConfig) -> Self {
        let feed = Feed::seeded();
        let mut view = FeedView::new();
        view.sync(&feed, &config);

        Self {
            ids: IdGenerator::new(),
            composer: Composer::new(&config),
            feed,
            view,
            config,
        }
    }

    pub fn submit_post(&mut self, host: &mut impl Host) -> Result<PostId> {
        let feed = &mut self.feed;
        let id = self
            .composer
            .submit(&self.ids, host, |post| feed.prepend(post))?;
        self.view.sync(&self.feed, &self.config);
        Ok(id)
    }

    pub fn stage_image(&mut self, intake: Result<InlineImage>, host: &mut impl Host) -> Result<()> {
        self.composer.stage_image(intake, host)
    }

    /// Read an image file and stage it. Nothing is read when image
    /// attachments are disabled.
    pub async fn attach_image(&mut self, path: &Path, host: &mut impl Host) -> Result<()> {
        if !self.composer.accepts_images() {
            return Err(FeedError::ImageAttachmentsDisabled);
        }
        let intake = load_image(path, self.composer.max_image_size()).await;
        self.stage_image(intake, host)
    }

    pub fn stage_image_bytes(&mut self, data: Bytes, host: &mut impl Host) -> Result<()> {
        self.composer.stage_image_bytes(data, host)
    }

    pub fn card(&self, id: PostId) -> Result<&PostCard> {
        self.view.card(id).ok_or(FeedError::UnknownPost(id))
    }

    fn card_mut(&mut self, id: PostId) -> Result<&mut PostCard> {
        self.view.card_mut(id).ok_or(FeedError::UnknownPost(id))
    }

    pub fn toggle_like(&mut self, id: PostId) -> Result<u64> {
        Ok(self.card_mut(id)?.toggle_like())
    }

    pub fn toggle_comments(&mut self, id: PostId) -> Result<bool> {
        Ok(self.card_mut(id)?.toggle_comments())
    }

    /// Type `text` into a card's comment box and press the comment button.
    pub fn add_comment(&mut self, id: PostId, text: &str) -> Result<Option<CommentId>> {
        let ids = &self.ids;
        let card = self
            .view
            .card_mut(id)
            .ok_or(FeedError::UnknownPost(id))?;
        card.set_comment_draft(text);
        Ok(card.submit_comment(ids))
    }

    pub fn share(&self, id: PostId, target: ShareTarget, host: &mut impl Host) -> Result<ShareAction> {
        self.card(id)?.share(target, host)
    }

    pub fn page(&self) -> FeedPage {
        render_page(&self.composer, &self.view, Utc::now())
    }
}
