//! Per-post scoring functions, one per [`ScoringMode`].
//!
//! Every function is total: for any post and any evaluation time it returns
//! a finite `f64`. Higher scores rank first.

use crate::model::{Post, ScoringMode};
use chrono::{DateTime, Utc};

/// Signature shared by all scoring functions.
pub type ScoreFn = fn(&Post, DateTime<Utc>) -> f64;

/// Offset added to the age before applying hot decay.
pub const HOT_AGE_OFFSET: f64 = 2.0;

/// Exponent of the hot decay denominator.
pub const HOT_GRAVITY: f64 = 1.5;

/// Weight of one comment relative to one like in the hot score.
pub const HOT_COMMENT_WEIGHT: f64 = 2.0;

/// Offset added to the age in the rising denominator.
pub const RISING_AGE_OFFSET: f64 = 1.0;

/// Age in hours, with future timestamps (clock skew) treated as brand new.
///
/// The clamp applies before any formula offset, so every post dated after
/// `now` ties with a post created exactly at `now`. Time decay is strictly
/// decreasing only over non-negative ages.
fn effective_age_hours(post: &Post, now: DateTime<Utc>) -> f64 {
    post.age_hours(now).max(0.0)
}

/// `(likes + 2×comments) / (ageHours + 2)^1.5`
///
/// Negative ages count as zero, so posts from the future score like
/// brand-new ones.
pub fn hot_score(post: &Post, now: DateTime<Utc>) -> f64 {
    let engagement = post.likes as f64 + HOT_COMMENT_WEIGHT * post.comment_count as f64;
    let age = effective_age_hours(post, now);
    engagement / (age + HOT_AGE_OFFSET).powf(HOT_GRAVITY)
}

/// Creation time in Unix milliseconds; newer posts score higher.
pub fn new_score(post: &Post, _now: DateTime<Utc>) -> f64 {
    post.created_at.timestamp_millis() as f64
}

/// Raw like count.
pub fn top_score(post: &Post, _now: DateTime<Utc>) -> f64 {
    post.likes as f64
}

/// `(likes + comments) / (ageHours + 1)`
pub fn rising_score(post: &Post, now: DateTime<Utc>) -> f64 {
    let engagement = post.likes as f64 + post.comment_count as f64;
    let age = effective_age_hours(post, now);
    engagement / (age + RISING_AGE_OFFSET)
}

impl ScoringMode {
    /// Scoring function for this mode.
    pub fn scorer(self) -> ScoreFn {
        match self {
            ScoringMode::Hot => hot_score,
            ScoringMode::New => new_score,
            ScoringMode::Top => top_score,
            ScoringMode::Rising => rising_score,
        }
    }

    /// Score a single post under this mode at `now`.
    pub fn score(self, post: &Post, now: DateTime<Utc>) -> f64 {
        (self.scorer())(post, now)
    }
}
