//! Wrappers for the `posts` collection.

use serde::Serialize;
use tracing::instrument;

use tamarind_core::PostId;

use super::{DataError, Document, DocumentClient, fail};
use crate::models::Post;

const COLLECTION: &str = "posts";

#[derive(Serialize)]
struct ActiveUpdate {
    active: bool,
}

/// Fetch visible posts, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_active_posts(
    client: &DocumentClient,
) -> Result<Vec<Document<Post>>, DataError> {
    client
        .list(COLLECTION, Some(("active", "true")))
        .await
        .map_err(fail("Failed to fetch posts."))
}

/// Create a post.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client, post))]
pub async fn create_post(
    client: &DocumentClient,
    post: &Post,
) -> Result<Document<Post>, DataError> {
    client
        .create(COLLECTION, post)
        .await
        .map_err(fail("Failed to create post."))
}

/// Flip a post's visibility flag (moderation operation).
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn set_post_active(
    client: &DocumentClient,
    id: &PostId,
    active: bool,
) -> Result<Document<Post>, DataError> {
    client
        .update(COLLECTION, id.as_str(), &ActiveUpdate { active })
        .await
        .map_err(fail("Failed to update post."))
}

/// Delete a post.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn delete_post(client: &DocumentClient, id: &PostId) -> Result<(), DataError> {
    client
        .delete(COLLECTION, id.as_str())
        .await
        .map_err(fail("Failed to delete post."))
}
