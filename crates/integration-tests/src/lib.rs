//! Integration tests for Tamarind.
//!
//! The cart store is the one stateful subsystem, so these tests exercise it
//! end to end: full shopping scenarios through the public API, and snapshot
//! persistence through the file-backed storage adapter.
//!
//! Run with: `cargo test -p tamarind-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use tamarind_core::{Price, ProductId};
use tamarind_storefront::cart::ProductSnapshot;

/// Initialize a tracing subscriber so cart warnings are visible under
/// `RUST_LOG`. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A unique scratch directory for one test's cart storage slot.
#[must_use]
pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("tamarind-it-{}", uuid::Uuid::new_v4()))
}

/// Build a product snapshot with the given id and whole-unit price.
#[must_use]
pub fn product(id: &str, price: i64) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Price::from_major(price),
        discount_price: None,
        category: "misc".to_owned(),
        images: vec![format!("https://img.example.com/{id}.jpg")],
    }
}

/// Build a discounted product snapshot.
#[must_use]
pub fn discounted_product(id: &str, price: i64, discount: i64) -> ProductSnapshot {
    let mut snapshot = product(id, price);
    snapshot.discount_price = Some(Price::from_major(discount));
    snapshot
}
