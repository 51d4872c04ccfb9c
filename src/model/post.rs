//! Post records as supplied by the feed's data source.

use super::identifiers::PostId;
use super::mood::Mood;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Text only.
    #[default]
    Text,
    /// Image attachment.
    Image,
    /// Video attachment.
    Video,
    /// Audio attachment.
    Audio,
}

impl MediaType {
    /// Wire name, as used in post records.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Text => "text",
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Audio => "audio",
        }
    }
}

/// Opaque reference to the post's author.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author identifier.
    #[serde(default)]
    pub id: String,
    /// Display handle.
    #[serde(default)]
    pub username: String,
}

/// Opaque reference to the community a post belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommunityRef {
    /// Community identifier.
    #[serde(default)]
    pub id: String,
    /// Community name.
    #[serde(default)]
    pub name: String,
}

/// A community post.
///
/// The ranking core only reads `created_at`, `likes`, `comment_count` and
/// `mood`; everything else is carried through for display. Missing like and
/// comment counts deserialize as zero. Unknown fields in the record are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    pub id: PostId,
    /// Post title.
    #[serde(default)]
    pub title: String,
    /// Body text (rendered verbatim).
    #[serde(default)]
    pub content: String,
    /// Attached media kind.
    #[serde(default)]
    pub media_type: MediaType,
    /// Attached media location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Author reference.
    #[serde(default)]
    pub author: AuthorRef,
    /// Community reference.
    #[serde(default)]
    pub community: CommunityRef,
    /// Like count.
    #[serde(default)]
    pub likes: u64,
    /// Comment count.
    #[serde(default)]
    pub comment_count: u64,
    /// Whether the viewer liked this post.
    #[serde(default)]
    pub is_liked: bool,
    /// Whether the viewer saved this post.
    #[serde(default)]
    pub is_saved: bool,
    /// Mood tag, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Minimal post with zero engagement; the remaining fields are defaults.
    pub fn new(id: PostId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            media_type: MediaType::default(),
            media_url: None,
            author: AuthorRef::default(),
            community: CommunityRef::default(),
            likes: 0,
            comment_count: 0,
            is_liked: false,
            is_saved: false,
            mood: None,
            created_at,
        }
    }

    /// Builder: set the like count.
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Builder: set the comment count.
    pub fn with_comments(mut self, comment_count: u64) -> Self {
        self.comment_count = comment_count;
        self
    }

    /// Builder: set the mood tag.
    pub fn with_mood(mut self, mood: Option<Mood>) -> Self {
        self.mood = mood;
        self
    }

    /// Builder: set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Age in fractional hours at `now`. Negative when `created_at` is in the future.
    pub fn age_hours(&self, now: DateTime<Utc>) -> f64 {
        let millis = (now - self.created_at).num_milliseconds();
        millis as f64 / 3_600_000.0
    }
}
