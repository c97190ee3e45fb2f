//! Post records from the `posts` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tamarind_core::UserId;

/// A community post document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post body.
    pub content: String,
    /// Author account.
    pub author_id: UserId,
    /// Whether the post is visible; moderation flips this off instead of
    /// deleting.
    pub active: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}
