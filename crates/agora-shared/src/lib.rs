//! # agora-shared
//!
//! Domain layer of the Agora social feed: post and comment models, id
//! generation, image intake validation, share-intent URLs and relative
//! time formatting.  Nothing in this crate performs I/O.

pub mod constants;
pub mod error;
pub mod image;
pub mod models;
pub mod share;
pub mod time;
pub mod types;

pub use error::{FeedError, Result};
pub use models::{Comment, InlineImage, Post};
pub use types::{CommentId, IdGenerator, PostId};
