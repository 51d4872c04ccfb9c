//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod mood;
pub mod post;
pub mod scoring_mode;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use identifiers::{InvalidPostId, PostId};
pub use key_action::KeyAction;
pub use mood::{InvalidMoodError, Mood};
pub use post::{AuthorRef, CommunityRef, MediaType, Post};
pub use scoring_mode::{InvalidModeError, ScoringMode};
