//! Product records from the `products` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tamarind_core::{Price, ProductId, UserId};

use crate::cart::ProductSnapshot;
use crate::db::Document;

/// A product listing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Regular price.
    pub price: Price,
    /// Discounted price, when a discount is active.
    pub discount_price: Option<Price>,
    /// Category label used for browsing.
    pub category: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// The seller account that listed this product.
    pub seller_id: UserId,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Document<Product>> for ProductSnapshot {
    /// Capture the denormalized snapshot the cart stores for this product.
    fn from(doc: &Document<Product>) -> Self {
        Self {
            id: ProductId::new(doc.id.clone()),
            name: doc.data.name.clone(),
            price: doc.data.price,
            discount_price: doc.data.discount_price,
            category: doc.data.category.clone(),
            images: doc.data.images.clone(),
        }
    }
}
