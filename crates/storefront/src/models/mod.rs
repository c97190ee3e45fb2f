//! Domain records stored in the hosted document store.
//!
//! One module per collection. Records deliberately carry no `id` field: the
//! store assigns identifiers, and the data access layer attaches them via
//! [`crate::db::Document`].

pub mod post;
pub mod product;
pub mod shop;
pub mod user;

pub use post::Post;
pub use product::Product;
pub use shop::Shop;
pub use user::User;
