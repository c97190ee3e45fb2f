//! Wrappers for the `shops` collection.

use tracing::instrument;

use tamarind_core::{ShopId, UserId};

use super::{DataError, Document, DocumentClient, fail};
use crate::models::Shop;

const COLLECTION: &str = "shops";

/// Fetch all shops, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_shops(client: &DocumentClient) -> Result<Vec<Document<Shop>>, DataError> {
    client
        .list(COLLECTION, None)
        .await
        .map_err(fail("Failed to fetch shops."))
}

/// Fetch the shops owned by one seller, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_shops_by_owner(
    client: &DocumentClient,
    owner_id: &UserId,
) -> Result<Vec<Document<Shop>>, DataError> {
    client
        .list(COLLECTION, Some(("owner_id", owner_id.as_str())))
        .await
        .map_err(fail("Failed to fetch shops."))
}

/// Create a shop.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client, shop))]
pub async fn create_shop(
    client: &DocumentClient,
    shop: &Shop,
) -> Result<Document<Shop>, DataError> {
    client
        .create(COLLECTION, shop)
        .await
        .map_err(fail("Failed to create shop."))
}

/// Replace a shop's owner-supplied fields.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client, shop))]
pub async fn update_shop(
    client: &DocumentClient,
    id: &ShopId,
    shop: &Shop,
) -> Result<Document<Shop>, DataError> {
    client
        .update(COLLECTION, id.as_str(), shop)
        .await
        .map_err(fail("Failed to update shop."))
}
