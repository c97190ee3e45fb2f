//! Shop records from the `shops` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tamarind_core::UserId;

/// A seller-owned shop document. Fields are owner-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop display name.
    pub name: String,
    /// Owner-supplied description.
    pub description: String,
    /// The seller account that owns this shop.
    pub owner_id: UserId,
    /// Optional street address.
    pub address: Option<String>,
    /// When the shop document was created.
    pub created_at: DateTime<Utc>,
}
