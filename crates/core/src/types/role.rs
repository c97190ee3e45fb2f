//! Account roles stored on user documents.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account.
///
/// Stored lowercase in the `users` collection and used as an equality filter
/// (e.g. `role == "seller"`) when listing accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    User,
    /// Account that owns a shop and lists products.
    Seller,
    /// Delivery personnel.
    Delivery,
    /// Site administrator.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Seller => write!(f, "seller"),
            Self::Delivery => write!(f, "delivery"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "seller" => Ok(Self::Seller),
            "delivery" => Ok(Self::Delivery),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
