//! Post composer: draft text, an optional staged image, and submission.

use std::path::Path;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use agora_shared::image::{check_size, inline_image};
use agora_shared::{FeedError, IdGenerator, InlineImage, Post, PostId, Result};

use crate::config::{ClientConfig, FeatureFlags};
use crate::events::{
    image_too_large_message, Toast, MSG_EMPTY_POST, MSG_EMPTY_TEXT, MSG_NOT_AN_IMAGE,
    MSG_POST_CREATED,
};
use crate::host::Host;

/// Read a user-selected image file.
///
/// The reported file size is checked before any bytes are read. The result
/// is applied to a composer separately with [`Composer::stage_image`], so
/// overlapping reads resolve last-writer-wins.
pub async fn load_image(path: impl AsRef<Path>, max: usize) -> Result<InlineImage> {
    let path = path.as_ref();
    let meta = tokio::fs::metadata(path).await?;
    check_size(meta.len(), max)?;

    let data = tokio::fs::read(path).await?;
    inline_image(Bytes::from(data), max)
}

#[derive(Debug)]
pub struct Composer {
    features: FeatureFlags,
    author: String,
    max_image_size: usize,
    text: String,
    image: Option<InlineImage>,
}

impl Composer {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            features: config.features,
            author: config.current_user.clone(),
            max_image_size: config.max_image_size,
            text: String::new(),
            image: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn staged_image(&self) -> Option<&InlineImage> {
        self.image.as_ref()
    }

    /// Data URL for the removable preview, if an image is staged.
    pub fn image_preview(&self) -> Option<String> {
        self.image.as_ref().map(InlineImage::to_data_url)
    }

    pub fn accepts_images(&self) -> bool {
        self.features.image_attachments_enabled
    }

    pub fn max_image_size(&self) -> usize {
        self.max_image_size
    }

    /// Apply the outcome of an image intake to the draft.
    ///
    /// Rejected images leave the draft untouched and surface an error toast.
    pub fn stage_image(&mut self, intake: Result<InlineImage>, host: &mut impl Host) -> Result<()> {
        if !self.accepts_images() {
            return Err(FeedError::ImageAttachmentsDisabled);
        }

        match intake {
            Ok(image) => {
                info!(mime = %image.mime(), size = image.len(), "Image staged");
                self.image = Some(image);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Image rejected");
                match &e {
                    FeedError::ImageTooLarge { max, .. } => {
                        host.toast(Toast::error(&image_too_large_message(*max)))
                    }
                    FeedError::NotAnImage => host.toast(Toast::error(MSG_NOT_AN_IMAGE)),
                    _ => {}
                }
                Err(e)
            }
        }
    }

    /// Validate and stage an in-memory image payload.
    pub fn stage_image_bytes(&mut self, data: Bytes, host: &mut impl Host) -> Result<()> {
        let intake = inline_image(data, self.max_image_size);
        self.stage_image(intake, host)
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Submit the draft.
    ///
    /// On success the new post is handed to `on_post_created`, the draft is
    /// cleared and a success toast is shown. On failure the draft is kept.
    pub fn submit(
        &mut self,
        ids: &IdGenerator,
        host: &mut impl Host,
        on_post_created: impl FnOnce(Post),
    ) -> Result<PostId> {
        let has_text = !self.text.trim().is_empty();

        if self.features.image_attachments_enabled {
            if !has_text && self.image.is_none() {
                warn!("Rejected empty post");
                host.toast(Toast::error(MSG_EMPTY_POST));
                return Err(FeedError::EmptyPost);
            }
        } else if !has_text {
            warn!("Rejected empty post");
            host.toast(Toast::error(MSG_EMPTY_TEXT));
            return Err(FeedError::EmptyPost);
        }

        let post = Post::authored(
            ids.next_post_id(),
            std::mem::take(&mut self.text),
            self.image.take(),
            &self.author,
            Utc::now(),
        );
        let id = post.id;
        info!(post_id = %id, has_image = post.image.is_some(), "Post created");

        on_post_created(post);
        host.toast(Toast::success(MSG_POST_CREATED));
        Ok(id)
    }
}
