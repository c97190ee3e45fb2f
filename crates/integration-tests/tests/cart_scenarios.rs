//! Full shopping scenarios against the cart store's public API.

use tamarind_core::{Price, ProductId};
use tamarind_storefront::cart::{CartStore, MemoryStorage};

use tamarind_integration_tests::{discounted_product, init_tracing, product};

const SHIPPING_FEE: i64 = 5;

async fn ready_store() -> CartStore<MemoryStorage> {
    init_tracing();
    let mut store = CartStore::new(MemoryStorage::new(), Price::from_major(SHIPPING_FEE));
    store.rehydrate().await;
    store
}

#[tokio::test]
async fn single_product_lifecycle_totals() {
    let mut store = ready_store().await;

    // Start empty; add p1 at price 10.
    store.add_item(product("p1", 10)).await;
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 1);
    let totals = store.totals();
    assert_eq!(totals.subtotal, Price::from_major(10));
    assert_eq!(totals.shipping, Price::from_major(5));
    assert_eq!(totals.total, Price::from_major(15));

    // Adding the same product again increments the single line.
    store.add_item(product("p1", 10)).await;
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 2);
    let totals = store.totals();
    assert_eq!(totals.subtotal, Price::from_major(20));
    assert_eq!(totals.total, Price::from_major(25));

    // Absolute quantity set.
    store.update_quantity(&ProductId::new("p1"), 5).await;
    assert_eq!(store.items()[0].quantity, 5);
    let totals = store.totals();
    assert_eq!(totals.subtotal, Price::from_major(50));
    assert_eq!(totals.total, Price::from_major(55));

    // Removal empties the cart and drops shipping.
    store.remove_item(&ProductId::new("p1")).await;
    assert!(store.items().is_empty());
    let totals = store.totals();
    assert_eq!(totals.subtotal, Price::ZERO);
    assert_eq!(totals.shipping, Price::ZERO);
    assert_eq!(totals.total, Price::ZERO);
}

#[tokio::test]
async fn discount_price_overrides_regular_price() {
    let mut store = ready_store().await;

    store.add_item(product("p1", 10)).await;
    store.add_item(discounted_product("p2", 15, 12)).await;

    let totals = store.totals();
    assert_eq!(totals.subtotal, Price::from_major(22));
    assert_eq!(totals.shipping, Price::from_major(5));
    assert_eq!(totals.total, Price::from_major(27));
}

#[tokio::test]
async fn repeated_adds_accumulate_in_one_line() {
    let mut store = ready_store().await;

    for _ in 0..7 {
        store.add_item(product("p1", 10)).await;
    }

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 7);
    assert_eq!(store.item_count(), 7);
}

#[tokio::test]
async fn nonpositive_quantity_update_removes_item() {
    for quantity in [0_i64, -5] {
        let mut store = ready_store().await;
        store.add_item(product("p1", 10)).await;

        store.update_quantity(&ProductId::new("p1"), quantity).await;
        assert!(store.items().is_empty(), "quantity {quantity} should remove");

        // And is a no-op when the id is already gone.
        store.update_quantity(&ProductId::new("p1"), quantity).await;
        assert!(store.items().is_empty());
    }
}

#[tokio::test]
async fn remove_is_idempotent() {
    let mut store = ready_store().await;
    store.add_item(product("p1", 10)).await;
    store.add_item(product("p2", 20)).await;

    store.remove_item(&ProductId::new("p1")).await;
    let after_first = store.items().to_vec();

    store.remove_item(&ProductId::new("p1")).await;
    assert_eq!(store.items(), after_first.as_slice());
    assert_eq!(store.items().len(), 1);
}
