//! Client-side cart store.
//!
//! The cart is entirely local to one client instance: the in-memory state is
//! authoritative for the session, and a serialized snapshot is mirrored to a
//! durable storage slot after every mutation. There is no server-side cart
//! and no cross-device reconciliation.
//!
//! # Persistence policy
//!
//! Writes are best-effort and happen after the in-memory mutation. A failed
//! write is logged and swallowed - the mutation is NOT rolled back. This is
//! an intentional at-most-once policy, not a missing transaction: losing a
//! snapshot costs at worst the cart contents of one session.
//!
//! # Module layout
//!
//! - [`state`]: data model plus the pure [`apply`] transition function
//! - [`storage`]: the [`CartStorage`] seam and its adapters
//! - [`store`]: the stateful [`CartStore`] container

mod state;
mod storage;
mod store;

pub use state::{CartCommand, CartItem, CartState, CartTotals, ProductSnapshot, apply};
pub use storage::{CART_STORAGE_KEY, CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{CartPhase, CartStore};
