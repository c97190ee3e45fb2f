//! Wrappers for the `products` collection.

use tracing::instrument;

use tamarind_core::{ProductId, UserId};

use super::{DataError, Document, DocumentClient, fail};
use crate::models::Product;

const COLLECTION: &str = "products";

/// Fetch all products, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_products(client: &DocumentClient) -> Result<Vec<Document<Product>>, DataError> {
    client
        .list(COLLECTION, None)
        .await
        .map_err(fail("Failed to fetch products."))
}

/// Fetch one product by id.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_product(
    client: &DocumentClient,
    id: &ProductId,
) -> Result<Document<Product>, DataError> {
    client
        .get(COLLECTION, id.as_str())
        .await
        .map_err(fail("Failed to fetch product."))
}

/// Fetch the products listed by one seller, newest first.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn fetch_products_by_seller(
    client: &DocumentClient,
    seller_id: &UserId,
) -> Result<Vec<Document<Product>>, DataError> {
    client
        .list(COLLECTION, Some(("seller_id", seller_id.as_str())))
        .await
        .map_err(fail("Failed to fetch products."))
}

/// Create a product listing.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client, product))]
pub async fn create_product(
    client: &DocumentClient,
    product: &Product,
) -> Result<Document<Product>, DataError> {
    client
        .create(COLLECTION, product)
        .await
        .map_err(fail("Failed to create product."))
}

/// Replace a product listing's fields.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client, product))]
pub async fn update_product(
    client: &DocumentClient,
    id: &ProductId,
    product: &Product,
) -> Result<Document<Product>, DataError> {
    client
        .update(COLLECTION, id.as_str(), product)
        .await
        .map_err(fail("Failed to update product."))
}

/// Delete a product listing.
///
/// # Errors
///
/// Returns a [`DataError`] with a fixed message when the call fails.
#[instrument(skip(client))]
pub async fn delete_product(client: &DocumentClient, id: &ProductId) -> Result<(), DataError> {
    client
        .delete(COLLECTION, id.as_str())
        .await
        .map_err(fail("Failed to delete product."))
}
