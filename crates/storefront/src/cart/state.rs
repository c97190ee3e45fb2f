//! Cart data model and the pure transition function.
//!
//! All cart mutations are expressed as [`CartCommand`] values processed by
//! [`apply`], which is total and never fails. The store in
//! [`super::store`] owns sequencing and persistence; this module owns
//! semantics.

use serde::{Deserialize, Serialize};

use tamarind_core::{Price, ProductId};

/// Denormalized product data captured at the moment an item is added.
///
/// The cart keeps a snapshot rather than a live reference so it can render
/// (and survive a restart) without a round trip to the document store. A
/// later price change does not retroactively reprice items already in the
/// cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Store-assigned product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Regular price.
    pub price: Price,
    /// Discounted price, when a discount is active.
    pub discount_price: Option<Price>,
    /// Category label.
    pub category: String,
    /// Image URLs.
    pub images: Vec<String>,
}

impl ProductSnapshot {
    /// The price a buyer actually pays: the discount price when one is set.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.discount_price.unwrap_or(self.price)
    }
}

/// One line in the cart: a product snapshot paired with a purchase quantity.
///
/// Quantity is at least 1 by construction - a quantity update to zero or
/// below removes the line entirely rather than storing a zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line refers to.
    pub product: ProductSnapshot,
    /// Purchase quantity, always >= 1 while the item exists.
    pub quantity: u32,
}

impl CartItem {
    /// Line total: effective unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.quantity)
    }
}

/// The ordered collection of all cart items for one client.
///
/// Insertion order is preserved for display; it carries no other meaning.
/// At most one item exists per distinct product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    /// The empty cart every client starts from before rehydration.
    #[must_use]
    pub const fn new_empty() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Compute the derived totals for the given flat shipping fee.
    ///
    /// These are pure functions of the state, recomputed on every call and
    /// never cached: subtotal sums each line's effective price, shipping is
    /// the flat fee when the cart is non-empty, total is their sum.
    #[must_use]
    pub fn totals(&self, shipping_fee: Price) -> CartTotals {
        let subtotal = self
            .items
            .iter()
            .fold(Price::ZERO, |acc, item| acc + item.line_total());
        let shipping = if self.items.is_empty() {
            Price::ZERO
        } else {
            shipping_fee
        };

        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

/// Derived amounts consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Price,
    /// Flat fee, zero for an empty cart.
    pub shipping: Price,
    /// Subtotal plus shipping.
    pub total: Price,
}

/// A cart mutation, processed by [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of a product: increments the existing line or appends a
    /// new one with quantity 1.
    Add(ProductSnapshot),
    /// Delete the line for a product; no-op when absent.
    Remove(ProductId),
    /// Set a line's quantity absolutely. A value <= 0 deletes the line;
    /// an unknown id leaves the state unchanged.
    SetQuantity(ProductId, i64),
    /// Replace the whole state (used by rehydration).
    Replace(CartState),
}

/// Pure transition function: current state plus command yields the next state.
#[must_use]
pub fn apply(mut state: CartState, command: CartCommand) -> CartState {
    match command {
        CartCommand::Add(product) => {
            if let Some(item) = state
                .items
                .iter_mut()
                .find(|item| item.product.id == product.id)
            {
                item.quantity = item.quantity.saturating_add(1);
            } else {
                state.items.push(CartItem {
                    product,
                    quantity: 1,
                });
            }
            state
        }
        CartCommand::Remove(id) => {
            state.items.retain(|item| item.product.id != id);
            state
        }
        CartCommand::SetQuantity(id, quantity) => {
            if quantity <= 0 {
                state.items.retain(|item| item.product.id != id);
            } else if let Some(item) =
                state.items.iter_mut().find(|item| item.product.id == id)
            {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
            state
        }
        CartCommand::Replace(next) => next,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
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

    #[test]
    fn test_add_new_product_appends_with_quantity_one() {
        let state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].quantity, 1);
    }

    #[test]
    fn test_repeated_adds_increment_single_line() {
        let mut state = CartState::default();
        for _ in 0..4 {
            state = apply(state, CartCommand::Add(snapshot("p1", 10)));
        }
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].quantity, 4);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut state = CartState::default();
        state = apply(state, CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::Add(snapshot("p2", 20)));
        state = apply(state, CartCommand::Add(snapshot("p1", 10)));
        let ids: Vec<&str> = state
            .items()
            .iter()
            .map(|item| item.product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_remove_deletes_line_and_is_idempotent() {
        let mut state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::Remove(ProductId::new("p1")));
        assert!(state.is_empty());

        // Second remove of the same id is a no-op
        let again = apply(state.clone(), CartCommand::Remove(ProductId::new("p1")));
        assert_eq!(again, state);
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::SetQuantity(ProductId::new("p1"), 5));
        assert_eq!(state.items()[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        for quantity in [0, -5] {
            let state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
            let state = apply(
                state,
                CartCommand::SetQuantity(ProductId::new("p1"), quantity),
            );
            assert!(state.is_empty(), "quantity {quantity} should remove");
        }
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        let next = apply(
            state.clone(),
            CartCommand::SetQuantity(ProductId::new("missing"), 3),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_replace_swaps_state() {
        let full = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        let state = apply(CartState::default(), CartCommand::Replace(full.clone()));
        assert_eq!(state, full);
    }

    #[test]
    fn test_unit_price_prefers_discount() {
        let mut product = snapshot("p1", 15);
        product.discount_price = Some(Price::from_major(12));
        assert_eq!(product.unit_price(), Price::from_major(12));
    }

    #[test]
    fn test_totals_empty_cart_has_no_shipping() {
        let totals = CartState::default().totals(Price::from_major(5));
        assert_eq!(totals.subtotal, Price::ZERO);
        assert_eq!(totals.shipping, Price::ZERO);
        assert_eq!(totals.total, Price::ZERO);
    }

    #[test]
    fn test_totals_with_discount_override() {
        let mut discounted = snapshot("p2", 15);
        discounted.discount_price = Some(Price::from_major(12));

        let mut state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::Add(discounted));

        let totals = state.totals(Price::from_major(5));
        assert_eq!(totals.subtotal, Price::from_major(22));
        assert_eq!(totals.shipping, Price::from_major(5));
        assert_eq!(totals.total, Price::from_major(27));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut state = apply(CartState::default(), CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::Add(snapshot("p1", 10)));
        state = apply(state, CartCommand::Add(snapshot("p2", 20)));
        assert_eq!(state.item_count(), 3);
    }
}
