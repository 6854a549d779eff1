//! # Orders & Checkout State
//!
//! The order book (current/past orders) and the checkout form being filled in.
//!
//! The checkout form is rebuilt from the profile every time the checkout
//! screen is entered, so edits made on one visit do not leak into the next.

use std::sync::{Arc, Mutex, PoisonError};

use krave_core::checkout::CheckoutForm;
use krave_core::orders::OrderBook;
use krave_core::UserProfile;

#[derive(Debug, Default)]
pub struct OrdersState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrdersState {
    /// Starts with the two current and three past sample orders.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        let book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&book)
    }

    pub fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.book.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut book)
    }
}

#[derive(Debug)]
pub struct CheckoutState {
    form: Arc<Mutex<CheckoutForm>>,
}

impl CheckoutState {
    pub fn new() -> Self {
        CheckoutState {
            form: Arc::new(Mutex::new(CheckoutForm::prefilled(&UserProfile::default()))),
        }
    }

    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutForm) -> R,
    {
        let mut form = self.form.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut form)
    }

    /// Starts a fresh form prefilled from `profile`.
    pub fn reset(&self, profile: &UserProfile) -> CheckoutForm {
        self.with_form_mut(|form| {
            *form = CheckoutForm::prefilled(profile);
            form.clone()
        })
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::Money;

    #[test]
    fn test_place_order_is_shared() {
        let state = OrdersState::new();
        let order = state.with_orders_mut(|b| b.place_order(4, Money::from_rupees(799), "16 Oct, 2026"));
        assert_eq!(state.with_orders(|b| b.current()[0].id.clone()), order.id);
    }

    #[test]
    fn test_checkout_reset_discards_edits() {
        let state = CheckoutState::new();
        state.with_form_mut(|f| f.voucher_code = "WELCOME".into());

        let profile = UserProfile::new("Sara", "", "");
        let form = state.reset(&profile);
        assert_eq!(form.name, "Sara");
        assert_eq!(form.voucher_code, "");
    }
}
