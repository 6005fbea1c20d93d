//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the client starts with zero configuration.

use agora_shared::constants::{CURRENT_USER, DEFAULT_PAGE_URL, MAX_IMAGE_SIZE};

/// Optional capabilities of the composer and post cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Composer accepts an image and a post may be image-only.
    /// Env: `AGORA_IMAGE_ATTACHMENTS` (true/false)
    pub image_attachments_enabled: bool,

    /// Post cards offer the share menu.
    /// Env: `AGORA_SHARE_MENU` (true/false)
    pub share_menu_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            image_attachments_enabled: true,
            share_menu_enabled: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub features: FeatureFlags,

    /// Location of the page hosting the feed; what gets shared and copied.
    /// Env: `AGORA_PAGE_URL`
    pub page_url: String,

    /// Author name stamped on locally created posts and comments.
    /// Env: `AGORA_CURRENT_USER`
    pub current_user: String,

    /// Image attachment ceiling in bytes.
    /// Env: `AGORA_MAX_IMAGE_BYTES`
    pub max_image_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            features: FeatureFlags::default(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            current_user: CURRENT_USER.to_string(),
            max_image_size: MAX_IMAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("AGORA_IMAGE_ATTACHMENTS") {
            config.features.image_attachments_enabled = parse_flag(&val);
        }

        if let Some(val) = lookup("AGORA_SHARE_MENU") {
            config.features.share_menu_enabled = parse_flag(&val);
        }

        if let Some(url) = lookup("AGORA_PAGE_URL") {
            if !url.trim().is_empty() {
                config.page_url = url;
            }
        }

        if let Some(name) = lookup("AGORA_CURRENT_USER") {
            if !name.trim().is_empty() {
                config.current_user = name;
            }
        }

        if let Some(val) = lookup("AGORA_MAX_IMAGE_BYTES") {
            match val.parse::<usize>() {
                Ok(n) => config.max_image_size = n,
                Err(_) => {
                    tracing::warn!(value = %val, "Invalid AGORA_MAX_IMAGE_BYTES, using default");
                }
            }
        }

        config
    }
}

fn parse_flag(val: &str) -> bool {
    val != "false" && val != "0"
}
