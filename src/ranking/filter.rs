//! Mood pre-filter applied before ranking.

use crate::model::{Mood, Post};
use std::borrow::Cow;

/// Keep only posts tagged with `mood`, preserving relative order.
///
/// With no mood selected the input is returned borrowed and untouched;
/// otherwise a new vector is built. The input is never modified.
pub fn filter_by_mood(posts: &[Post], mood: Option<Mood>) -> Cow<'_, [Post]> {
    match mood {
        None => Cow::Borrowed(posts),
        Some(mood) => Cow::Owned(
            posts
                .iter()
                .filter(|post| post.mood == Some(mood))
                .cloned()
                .collect(),
        ),
    }
}
