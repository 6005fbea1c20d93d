use serde::Serialize;

pub const TITLE_ERROR: &str = "Error";
pub const TITLE_SUCCESS: &str = "Success";
pub const TITLE_INFO: &str = "Info";

pub const MSG_EMPTY_TEXT: &str = "Post content cannot be empty";
pub const MSG_EMPTY_POST: &str = "Post must contain text or an image";
pub const MSG_NOT_AN_IMAGE: &str = "Please select an image file";
pub const MSG_POST_CREATED: &str = "Post created successfully!";
pub const MSG_INSTAGRAM_UNSUPPORTED: &str =
    "Direct Instagram sharing is not available. Please copy the link and share manually.";
pub const MSG_LINK_COPIED: &str = "Link copied to clipboard!";

/// "Image size must be less than 5MB" for the default ceiling.
pub fn image_too_large_message(max: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    let limit = if max >= MIB && max % MIB == 0 {
        format!("{}MB", max / MIB)
    } else {
        format!("{max} bytes")
    };
    format!("Image size must be less than {limit}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn error(description: &str) -> Self {
        Self {
            title: TITLE_ERROR.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn success(description: &str) -> Self {
        Self {
            title: TITLE_SUCCESS.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }

    pub fn info(description: &str) -> Self {
        Self {
            title: TITLE_INFO.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        }
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.title, self.description)
    }
}
