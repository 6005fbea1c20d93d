//! Feed domain models.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! straight to a UI layer.  Timestamps travel as ISO-8601 strings with
//! millisecond precision (`2024-02-10T10:00:00.000Z`).

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::image::{decode_data_url, encode_data_url};
use crate::types::{CommentId, PostId};

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A feed entry.  At creation time at least one of `content` (trimmed) and
/// `image` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    /// Body text exactly as typed.
    pub content: String,
    /// Inline image, carried as a data URL on the wire.
    #[serde(default)]
    pub image: Option<InlineImage>,
    pub author: String,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    /// Insertion order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    /// A freshly authored post: no likes, no comments.
    pub fn authored(
        id: PostId,
        content: String,
        image: Option<InlineImage>,
        author: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            image,
            author: author.to_string(),
            timestamp,
            likes: 0,
            comments: Vec::new(),
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    /// Never empty; stored trimmed.
    pub content: String,
    pub author: String,
    #[serde(with = "iso8601")]
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn authored(id: CommentId, content: &str, author: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.to_string(),
            author: author.to_string(),
            timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// InlineImage
// ---------------------------------------------------------------------------

/// Image bytes held in memory together with their sniffed MIME type.
///
/// `Bytes` keeps clones cheap: the same payload is shared by the composer
/// draft, the feed entry and the card snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct InlineImage {
    mime: String,
    data: Bytes,
}

impl InlineImage {
    pub(crate) fn new(mime: impl Into<String>, data: Bytes) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `data:<mime>;base64,<payload>`
    pub fn to_data_url(&self) -> String {
        encode_data_url(&self.mime, &self.data)
    }
}

impl From<InlineImage> for String {
    fn from(image: InlineImage) -> Self {
        image.to_data_url()
    }
}

impl TryFrom<String> for InlineImage {
    type Error = crate::error::FeedError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        decode_data_url(&url)
    }
}

/// Serde adapter for ISO-8601 timestamps with millisecond precision.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(ts: &DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
