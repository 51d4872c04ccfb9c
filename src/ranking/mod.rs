//! Feed ranking: scoring, ordering and mood filtering (pure core).
//!
//! The pipeline is `posts → filter_by_mood → rank_at → ordered feed`.
//! Nothing in this module mutates its input or touches I/O; the only
//! ambient input is the wall clock read by [`rank`] and [`build_feed`]'s
//! callers.
//!
//! # Complexity
//!
//! Ranking scores every post exactly once (O(n)) and then performs a
//! stable O(n log n) sort over the precomputed keys.

pub mod filter;
pub mod scoring;

pub use filter::filter_by_mood;
pub use scoring::{hot_score, new_score, rising_score, top_score, ScoreFn};

use crate::model::{InvalidModeError, Mood, Post, ScoringMode};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Order `posts` by `mode`, evaluated at `now`, highest score first.
///
/// Returns a new vector; `posts` is not modified. Posts with equal scores
/// keep their relative input order.
pub fn rank_at(posts: &[Post], mode: ScoringMode, now: DateTime<Utc>) -> Vec<Post> {
    let score = mode.scorer();
    let mut keyed: Vec<(f64, &Post)> = posts.iter().map(|post| (score(post, now), post)).collect();

    // slice::sort_by is stable
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));

    keyed.into_iter().map(|(_, post)| post.clone()).collect()
}

/// [`rank_at`] against the current wall clock.
pub fn rank(posts: &[Post], mode: ScoringMode) -> Vec<Post> {
    rank_at(posts, mode, Utc::now())
}

/// Rank by a mode name such as `"rising"`.
///
/// # Errors
///
/// Returns [`InvalidModeError`] for names that are not a [`ScoringMode`];
/// there is no fallback mode.
pub fn rank_by_name(posts: &[Post], mode: &str) -> Result<Vec<Post>, InvalidModeError> {
    let mode: ScoringMode = mode.parse()?;
    Ok(rank(posts, mode))
}

/// Filter by mood, then rank the survivors.
///
/// Filtering first means scores are only computed for eligible posts.
pub fn build_feed(
    posts: &[Post],
    mood: Option<Mood>,
    mode: ScoringMode,
    now: DateTime<Utc>,
) -> Vec<Post> {
    let eligible = filter_by_mood(posts, mood);
    let ranked = rank_at(&eligible, mode, now);
    debug!(
        total = posts.len(),
        eligible = ranked.len(),
        mode = %mode,
        mood = ?mood,
        "Feed rebuilt"
    );
    ranked
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
