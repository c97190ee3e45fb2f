//! User records from the `users` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tamarind_core::{Email, Role};

/// A user account document.
///
/// Credentials and sessions live entirely in the identity provider; this
/// record only carries the profile data the storefront displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// Account role.
    pub role: Role,
    /// When the account document was created.
    pub created_at: DateTime<Utc>,
}
