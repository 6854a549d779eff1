//! # Cart Store
//!
//! The ordered list of line items the user intends to buy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action                Operation                 Store Change        │
//! │  ─────────                ─────────                 ────────────        │
//! │                                                                         │
//! │  Tap "+" on product ─────► add_to_cart() ─────────► qty += 1 or push   │
//! │                                                                         │
//! │  Tap "+" / "-" in cart ──► update_quantity() ─────► qty += delta,       │
//! │                                                     drop if qty ≤ 0     │
//! │                                                                         │
//! │  Tap trash icon ─────────► remove_from_cart() ────► items.retain(..)   │
//! │                                                                         │
//! │  Render badge/bill ──────► total(), item_quantity() (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - No two items share an `id`
//! - Every item has `quantity >= 1`
//! - Insertion order is preserved (the cart list renders in that order)
//! - `total()` is always Σ unit_price × quantity; it is never cached
//!
//! None of the operations can fail: an unknown id is a no-op that reports
//! [`CartChange::Unchanged`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLineItem, ProductRef};

// =============================================================================
// Cart Change
// =============================================================================

/// What a cart mutation did.
///
/// The shell picks the toast from this ("Added to cart!", "Quantity
/// increased", "<name> removed from cart").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CartChange {
    /// A new line was appended with quantity 1.
    Added { id: u32 },

    /// An existing line's quantity went up.
    Increased { id: u32, quantity: u32 },

    /// An existing line's quantity went down but stayed at least 1.
    Decreased { id: u32, quantity: u32 },

    /// The line is gone.
    Removed { id: u32, name: String },

    /// Nothing matched, or the delta was zero.
    Unchanged,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Example
/// ```rust
/// use krave_core::cart::{Cart, CartChange};
/// use krave_core::money::Money;
///
/// let mut cart = Cart::with_sample_items();
/// cart.update_quantity(2, -1);
/// assert_eq!(cart.item_quantity(2), 1);
/// assert_eq!(cart.update_quantity(2, -1), CartChange::Removed { id: 2, name: "LU Prince Biscuit".into() });
/// assert_eq!(cart.total(), Money::from_rupees(510));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Creates the cart the app starts with: three snack items worth Rs. 670.
    ///
    /// ```text
    /// id  name                                                      price  qty
    /// 1   Innovative Digestive Original Biscuit( Family Pack)- 1 Piece  250    1
    /// 2   LU Prince Biscuit                                            80    2
    /// 3   Chocolicious                                                260    1
    /// ```
    pub fn with_sample_items() -> Self {
        let samples = [
            (
                ProductRef::new(
                    1,
                    "Innovative Digestive Original Biscuit( Family Pack)- 1 Piece",
                    Money::from_rupees(250),
                    "https://images.unsplash.com/photo-1722239310662-84a950cfa62d?w=400",
                ),
                1,
            ),
            (
                ProductRef::new(
                    2,
                    "LU Prince Biscuit",
                    Money::from_rupees(80),
                    "https://images.unsplash.com/photo-1621939514649-280e2ee25f60?w=400",
                ),
                2,
            ),
            (
                ProductRef::new(
                    3,
                    "Chocolicious",
                    Money::from_rupees(260),
                    "https://images.unsplash.com/photo-1511381939415-e44015466834?w=400",
                ),
                1,
            ),
        ];

        Cart {
            items: samples
                .into_iter()
                .map(|(product, qty)| CartLineItem::from_product(product, qty))
                .collect(),
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, other fields untouched
    /// - Product not in cart: appended at the end with quantity 1
    pub fn add_to_cart(&mut self, product: &ProductRef) -> CartChange {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id) {
            item.quantity += 1;
            return CartChange::Increased {
                id: item.id,
                quantity: item.quantity,
            };
        }

        self.items.push(CartLineItem::from_product(product.clone(), 1));
        CartChange::Added { id: product.id }
    }

    /// Applies a signed delta to an item's quantity.
    ///
    /// ## Behavior
    /// - Resulting quantity ≤ 0: the item is removed
    /// - Unknown id or zero delta: no-op
    pub fn update_quantity(&mut self, id: u32, delta: i32) -> CartChange {
        if delta == 0 {
            return CartChange::Unchanged;
        }

        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return CartChange::Unchanged;
        };

        let new_quantity = i64::from(self.items[index].quantity) + i64::from(delta);
        if new_quantity <= 0 {
            let removed = self.items.remove(index);
            return CartChange::Removed {
                id: removed.id,
                name: removed.name,
            };
        }

        let item = &mut self.items[index];
        item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if delta > 0 {
            CartChange::Increased {
                id,
                quantity: item.quantity,
            }
        } else {
            CartChange::Decreased {
                id,
                quantity: item.quantity,
            }
        }
    }

    /// Deletes the item with this id, if present.
    pub fn remove_from_cart(&mut self, id: u32) -> CartChange {
        match self.items.iter().position(|i| i.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                CartChange::Removed {
                    id: removed.id,
                    name: removed.name,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Σ unit_price × quantity over all items; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Quantity of the item with this id, or 0 if absent.
    pub fn item_quantity(&self, id: u32) -> u32 {
        self.items
            .iter()
            .find(|i| i.id == id)
            .map_or(0, |i| i.quantity)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities (the badge on the cart icon).
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
