//! Wrappers for the `users` collection.

use serde::Serialize;
use tracing::instrument;

use tamarind_core::{Role, UserId};

use super::{DataError, Document, DocumentClient, fail};
use crate::models::User;

const COLLECTION: &str = "users";

#[derive(Serialize)]
struct RoleUpdate {
    role: Role,
}

/// Fetch all user profiles, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_users(client: &DocumentClient) -> Result<Vec<Document<User>>, DataError> {
    client
        .list(COLLECTION, None)
        .await
        .map_err(fail("Failed to fetch users."))
}

/// Fetch the users holding one role (e.g. all sellers), newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_users_by_role(
    client: &DocumentClient,
    role: Role,
) -> Result<Vec<Document<User>>, DataError> {
    let role_value = role.to_string();
    client
        .list(COLLECTION, Some(("role", role_value.as_str())))
        .await
        .map_err(fail("Failed to fetch users."))
}

/// Change a user's role (admin panel operation).
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn update_user_role(
    client: &DocumentClient,
    id: &UserId,
    role: Role,
) -> Result<Document<User>, DataError> {
    client
        .update(COLLECTION, id.as_str(), &RoleUpdate { role })
        .await
        .map_err(fail("Failed to update user."))
}
