//! # Cart State
//!
//! Owns the session's cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Tauri Command              Cart Change        │
//! │  ─────────                ─────────────              ───────────        │
//! │                                                                         │
//! │  "Add" on a card ────────► add_to_cart() ─────────► Added / Increased  │
//! │                                                                         │
//! │  + / − stepper ──────────► update_cart_quantity() ► Increased /        │
//! │                                                     Decreased / Removed │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ────► Removed            │
//! │                                                                         │
//! │  Open cart ──────────────► get_cart() ────────────► (read only)        │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! │        A poisoned lock is recovered: every cart operation leaves the    │
//! │        item list consistent.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use krave_core::Cart;

/// Tauri-managed cart state.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates the cart the app starts with (three sample items).
    pub fn new() -> Self {
        Self::with_cart_contents(Cart::with_sample_items())
    }

    pub fn with_cart_contents(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let change = cart_state.with_cart_mut(|cart| cart.update_quantity(2, -1));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::{CartChange, Money};

    #[test]
    fn test_starts_with_sample_items() {
        let state = CartState::new();
        assert_eq!(state.with_cart(|c| c.len()), 3);
        assert_eq!(state.with_cart(|c| c.total()), Money::from_rupees(670));
    }

    #[test]
    fn test_mutation_is_visible_to_readers() {
        let state = CartState::new();
        let change = state.with_cart_mut(|c| c.update_quantity(2, -2));
        assert!(matches!(change, CartChange::Removed { id: 2, .. }));
        assert_eq!(state.with_cart(|c| c.item_quantity(2)), 0);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let state = Arc::new(CartState::new());
        let clone = Arc::clone(&state);
        let _ = std::thread::spawn(move || {
            clone.with_cart_mut(|_| panic!("boom"));
        })
        .join();

        assert_eq!(state.with_cart(|c| c.len()), 3);
    }
}
