//! Newtype IDs for type-safe entity references.
//!
//! The hosted document store assigns opaque string identifiers to every
//! document. The `define_id!` macro wraps those strings in distinct types so
//! IDs from different collections cannot be mixed up.

/// Macro to define a type-safe ID wrapper around a store-assigned string.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use tamarind_core::define_id;
/// define_id!(ProductId);
/// define_id!(ShopId);
///
/// let product_id = ProductId::new("p-91kfa2");
/// let shop_id = ShopId::new("s-88abc1");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = shop_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a store-assigned string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(UserId);
define_id!(PostId);
define_id!(ShopId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_construction() {
        let id = ProductId::new("p1");
        assert_eq!(id.as_str(), "p1");
        assert_eq!(id.to_string(), "p1");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new("p1"), ProductId::from("p1"));
        assert_ne!(ProductId::new("p1"), ProductId::new("p2"));
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = UserId::new("u-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u-42\"");

        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_into_inner() {
        let id = ShopId::new("s-7");
        assert_eq!(id.into_inner(), "s-7");
    }
}
