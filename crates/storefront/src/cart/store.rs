//! The cart store: in-memory authoritative state mirrored to durable storage.

use tracing::warn;

use tamarind_core::{Price, ProductId};

use super::state::{CartCommand, CartItem, CartState, CartTotals, ProductSnapshot, apply};
use super::storage::CartStorage;

/// Lifecycle phase of the store.
///
/// The only transition is `Uninitialized -> Ready`, performed exactly once by
/// [`CartStore::rehydrate`]. Readers before that point see the empty default
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPhase {
    /// Constructed but not yet rehydrated from storage.
    Uninitialized,
    /// Rehydration has completed (successfully or not).
    Ready,
}

/// The authoritative in-process cart state, mirrored to a storage slot.
///
/// Constructed explicitly by the host at startup and passed by reference to
/// consumers - there is no implicit global instance. The host is the single
/// owner responsible for calling [`rehydrate`](Self::rehydrate) once before
/// serving reads.
///
/// Mutations take effect on the in-memory state immediately; the follow-up
/// persistence write is best-effort and a failure never rolls the mutation
/// back.
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    storage: S,
    phase: CartPhase,
    shipping_fee: Price,
}

impl<S: CartStorage> CartStore<S> {
    /// Create an uninitialized store with an empty cart.
    #[must_use]
    pub const fn new(storage: S, shipping_fee: Price) -> Self {
        Self {
            state: CartState::new_empty(),
            storage,
            phase: CartPhase::Uninitialized,
            shipping_fee,
        }
    }

    /// Restore the persisted snapshot, transitioning to [`CartPhase::Ready`].
    ///
    /// Fails open: a missing slot yields the empty cart, and an unreadable or
    /// unparseable snapshot is logged and discarded. Calling this again after
    /// the store is ready is a no-op.
    pub async fn rehydrate(&mut self) {
        if self.phase == CartPhase::Ready {
            return;
        }

        match self.storage.load().await {
            Ok(Some(snapshot)) => match serde_json::from_str::<CartState>(&snapshot) {
                Ok(persisted) => {
                    self.state = apply(
                        std::mem::take(&mut self.state),
                        CartCommand::Replace(persisted),
                    );
                }
                Err(e) => {
                    warn!(error = %e, "persisted cart snapshot is unparseable, starting empty");
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to read persisted cart, starting empty");
            }
        }

        self.phase = CartPhase::Ready;
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity of an existing line with the same product id,
    /// or appends a new line with quantity 1. Invalid products are not
    /// validated at this layer.
    pub async fn add_item(&mut self, product: ProductSnapshot) {
        self.dispatch(CartCommand::Add(product)).await;
    }

    /// Delete the line for a product. No-op when the id is absent.
    pub async fn remove_item(&mut self, id: &ProductId) {
        self.dispatch(CartCommand::Remove(id.clone())).await;
    }

    /// Set a line's quantity absolutely.
    ///
    /// A quantity of zero or below removes the line (same effect as
    /// [`remove_item`](Self::remove_item)); an unknown id leaves the cart
    /// unchanged.
    pub async fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.dispatch(CartCommand::SetQuantity(id.clone(), quantity))
            .await;
    }

    /// The cart items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.state.item_count()
    }

    /// Derived totals for the configured shipping fee, recomputed per call.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.state.totals(self.shipping_fee)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> CartPhase {
        self.phase
    }

    /// Apply a command to the in-memory state, then mirror it to storage.
    async fn dispatch(&mut self, command: CartCommand) {
        self.state = apply(std::mem::take(&mut self.state), command);
        self.persist().await;
    }

    /// Best-effort write of the current state to the storage slot.
    ///
    /// A failure leaves the in-memory state authoritative for the rest of the
    /// session; the next successful write catches the slot up.
    async fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.state) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to serialize cart state, skipping persist");
                return;
            }
        };

        if let Err(e) = self.storage.save(&snapshot).await {
            warn!(error = %e, "failed to persist cart, in-memory state remains authoritative");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::storage::MemoryStorage;
    use super::*;

    fn snapshot(id: &str, price: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_major(price),
            discount_price: None,
            category: "misc".to_owned(),
            images: Vec::new(),
        }
    }

    fn store(storage: MemoryStorage) -> CartStore<MemoryStorage> {
        CartStore::new(storage, Price::from_major(5))
    }

    #[tokio::test]
    async fn test_starts_uninitialized_and_empty() {
        let store = store(MemoryStorage::new());
        assert_eq!(store.phase(), CartPhase::Uninitialized);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_rehydrate_missing_slot_yields_empty_ready_cart() {
        let mut store = store(MemoryStorage::new());
        store.rehydrate().await;
        assert_eq!(store.phase(), CartPhase::Ready);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_rehydrate_restores_persisted_snapshot() {
        let storage = MemoryStorage::new();
        let mut writer = store(storage.clone());
        writer.rehydrate().await;
        writer.add_item(snapshot("p1", 10)).await;
        writer.add_item(snapshot("p2", 20)).await;

        let mut reader = store(storage);
        reader.rehydrate().await;
        assert_eq!(reader.items().len(), 2);
        assert_eq!(reader.items()[0].product.id, ProductId::new("p1"));
    }

    #[tokio::test]
    async fn test_rehydrate_unparseable_snapshot_fails_open() {
        let storage = MemoryStorage::with_snapshot("not json at all");
        let mut store = store(storage);
        store.rehydrate().await;
        assert_eq!(store.phase(), CartPhase::Ready);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_rehydrate_read_failure_fails_open() {
        let storage = MemoryStorage::new();
        storage.set_fail_reads(true);
        let mut store = store(storage);
        store.rehydrate().await;
        assert_eq!(store.phase(), CartPhase::Ready);
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_rehydrate_is_not_reentrant() {
        let storage = MemoryStorage::new();
        let mut store = store(storage.clone());
        store.rehydrate().await;
        store.add_item(snapshot("p1", 10)).await;

        // Another store writes a different snapshot to the same slot; a
        // second rehydrate must not replace the live state.
        let mut other = CartStore::new(storage, Price::from_major(5));
        other.rehydrate().await;
        other.add_item(snapshot("p2", 20)).await;

        store.rehydrate().await;
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].product.id, ProductId::new("p1"));
    }

    #[tokio::test]
    async fn test_mutation_persists_snapshot() {
        let storage = MemoryStorage::new();
        let mut store = store(storage.clone());
        store.rehydrate().await;
        store.add_item(snapshot("p1", 10)).await;

        let written = storage.snapshot().unwrap();
        let persisted: CartState = serde_json::from_str(&written).unwrap();
        assert_eq!(persisted.items().len(), 1);
        assert_eq!(persisted.items()[0].product.id, ProductId::new("p1"));
    }

    #[tokio::test]
    async fn test_write_failure_keeps_in_memory_state() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store = store(storage.clone());
        store.rehydrate().await;
        store.add_item(snapshot("p1", 10)).await;

        // The mutation survives even though nothing reached storage.
        assert_eq!(store.items().len(), 1);
        assert!(storage.snapshot().is_none());

        // A later successful write catches the slot up.
        storage.set_fail_writes(false);
        store.add_item(snapshot("p2", 20)).await;
        let persisted: CartState =
            serde_json::from_str(&storage.snapshot().unwrap()).unwrap();
        assert_eq!(persisted.items().len(), 2);
    }

    #[tokio::test]
    async fn test_totals_recomputed_after_each_mutation() {
        let mut store = store(MemoryStorage::new());
        store.rehydrate().await;

        store.add_item(snapshot("p1", 10)).await;
        let totals = store.totals();
        assert_eq!(totals.subtotal, Price::from_major(10));
        assert_eq!(totals.total, Price::from_major(15));

        store.remove_item(&ProductId::new("p1")).await;
        let totals = store.totals();
        assert_eq!(totals.total, Price::ZERO);
    }
}
