use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues creation-time-derived identifiers.
///
/// Each id is the current wall clock in milliseconds, bumped past the
/// previously issued id when two requests land in the same millisecond (or
/// the clock steps backwards). Ids from one generator are therefore strictly
/// increasing and never collide.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator whose first id is greater than `floor`.
    pub fn starting_after(floor: i64) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }

    pub fn next_raw(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        // fetch_update only fails when the closure returns None
        let prev = match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
                Some(now.max(prev + 1))
            }) {
            Ok(prev) | Err(prev) => prev,
        };
        now.max(prev + 1)
    }

    pub fn next_post_id(&self) -> PostId {
        PostId(self.next_raw())
    }

    pub fn next_comment_id(&self) -> CommentId {
        CommentId(self.next_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let ids = IdGenerator::new();
        let mut prev = ids.next_raw();
        for _ in 0..10_000 {
            let next = ids.next_raw();
            assert!(next > prev, "{next} should be greater than {prev}");
            prev = next;
        }
    }

    #[test]
    fn test_ids_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_post_id();
        let after = Utc::now().timestamp_millis();
        assert!(id.0 >= before && id.0 <= after);
    }

    #[test]
    fn test_starting_after_future_floor() {
        let floor = Utc::now().timestamp_millis() + 60_000;
        let ids = IdGenerator::starting_after(floor);
        assert_eq!(ids.next_raw(), floor + 1);
        assert_eq!(ids.next_comment_id(), CommentId(floor + 2));
    }

    #[test]
    fn test_post_id_parse() {
        assert_eq!(" 42 ".parse::<PostId>().unwrap(), PostId(42));
        assert!("abc".parse::<PostId>().is_err());
    }
}
