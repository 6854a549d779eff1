//! # Checkout
//!
//! Bill breakdown for the cart and checkout screens, and the checkout form.
//!
//! ## Bill Breakdown
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart screen                         Checkout screen                    │
//! │  ───────────                         ───────────────                    │
//! │  Items total     Rs. 670             Items total     Rs. 670            │
//! │  Delivery fee    Rs. 120 (if > 0)    Delivery fee    Rs. 120 (always)   │
//! │  Platform        Rs.   9 (if > 0)    Platform        Rs.   9 (always)   │
//! │  ─────────────────────               ─────────────────────              │
//! │  Total           Rs. 799             Total           Rs. 799            │
//! │                                                                         │
//! │  "Rs 330 remaining to avail FREE DELIVERY !"                            │
//! │   = max(0, threshold − items total); the fee is still charged           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Screen, UserProfile};
use crate::validation::{digits_only, letters_and_spaces};
use crate::{DEFAULT_DELIVERY_FEE, DEFAULT_FREE_DELIVERY_THRESHOLD, DEFAULT_PLATFORM_CHARGES};

// =============================================================================
// Pricing
// =============================================================================

/// Fees added on top of the items total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PricingPolicy {
    pub delivery_fee: Money,
    pub platform_charges: Money,
    pub free_delivery_threshold: Money,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            delivery_fee: Money::from_rupees(DEFAULT_DELIVERY_FEE),
            platform_charges: Money::from_rupees(DEFAULT_PLATFORM_CHARGES),
            free_delivery_threshold: Money::from_rupees(DEFAULT_FREE_DELIVERY_THRESHOLD),
        }
    }
}

/// One computed bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bill {
    pub items_total: Money,
    pub delivery_fee: Money,
    pub platform_charges: Money,
    pub total: Money,
    pub remaining_for_free_delivery: Money,
}

impl PricingPolicy {
    /// The cart screen's bill: fees only apply to a non-empty cart.
    pub fn cart_bill(&self, items_total: Money) -> Bill {
        if items_total.is_positive() {
            self.bill(items_total, self.delivery_fee, self.platform_charges)
        } else {
            self.bill(items_total, Money::zero(), Money::zero())
        }
    }

    /// The checkout screen's bill: fees always apply.
    pub fn checkout_bill(&self, items_total: Money) -> Bill {
        self.bill(items_total, self.delivery_fee, self.platform_charges)
    }

    fn bill(&self, items_total: Money, delivery_fee: Money, platform_charges: Money) -> Bill {
        Bill {
            items_total,
            delivery_fee,
            platform_charges,
            total: items_total + delivery_fee + platform_charges,
            remaining_for_free_delivery: self.free_delivery_threshold.saturating_sub(items_total),
        }
    }
}

// =============================================================================
// Checkout Form
// =============================================================================

/// Delivery address the form starts with.
pub const DEFAULT_ADDRESS: &str = "H# 225- C, Gulzar 4 millenium mall, 22-B Street Phase 2";

/// Payment method the form starts with.
pub const DEFAULT_PAYMENT_METHOD: &str = "Cash on Delivery";

/// The checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    /// Free text; vouchers are never applied to the bill.
    pub voucher_code: String,
    pub autofill_from_last_order: bool,
}

impl CheckoutForm {
    /// A form prefilled from the non-empty profile fields.
    pub fn prefilled(profile: &UserProfile) -> Self {
        let mut form = CheckoutForm {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: DEFAULT_ADDRESS.to_string(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            voucher_code: String::new(),
            autofill_from_last_order: false,
        };
        form.fill_from_profile(profile);
        form
    }

    fn fill_from_profile(&mut self, profile: &UserProfile) {
        if !profile.name.is_empty() {
            self.name = profile.name.clone();
        }
        if !profile.email.is_empty() {
            self.email = profile.email.clone();
        }
        if !profile.phone.is_empty() {
            self.phone = profile.phone.clone();
        }
    }

    /// Toggles "Autofill from last order".
    ///
    /// Checking fills the last order's details. Unchecking restores the
    /// profile values (blank where the profile is blank). Either way the
    /// address and payment method go back to their defaults.
    pub fn set_autofill(&mut self, checked: bool, profile: &UserProfile) {
        self.autofill_from_last_order = checked;
        if checked {
            self.name = "Ahmed Khan".to_string();
            self.email = "ahmed.khan@example.com".to_string();
            self.phone = "03001234567".to_string();
        } else {
            self.name = profile.name.clone();
            self.email = profile.email.clone();
            self.phone = profile.phone.clone();
        }
        self.address = DEFAULT_ADDRESS.to_string();
        self.payment_method = DEFAULT_PAYMENT_METHOD.to_string();
    }

    /// Sets the name, keeping only letters and whitespace.
    pub fn set_name(&mut self, value: &str) {
        self.name = letters_and_spaces(value);
    }

    /// Sets the phone, keeping only digits.
    pub fn set_phone(&mut self, value: &str) {
        self.phone = digits_only(value);
    }
}

// =============================================================================
// Order Success Dialog
// =============================================================================

/// Buttons on the "order placed" dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum PlacedOrderChoice {
    GoHome,
    TrackDelivery,
}

impl PlacedOrderChoice {
    pub fn target(self) -> Screen {
        match self {
            PlacedOrderChoice::GoHome => Screen::Home,
            PlacedOrderChoice::TrackDelivery => Screen::TrackOrder,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_bill_for_sample_cart() {
        let bill = PricingPolicy::default().cart_bill(Money::from_rupees(670));
        assert_eq!(bill.total, Money::from_rupees(799));
        assert_eq!(bill.remaining_for_free_delivery, Money::from_rupees(330));
    }

    #[test]
    fn test_cart_bill_for_empty_cart_has_no_fees() {
        let bill = PricingPolicy::default().cart_bill(Money::zero());
        assert!(bill.delivery_fee.is_zero());
        assert!(bill.platform_charges.is_zero());
        assert!(bill.total.is_zero());
        assert_eq!(bill.remaining_for_free_delivery, Money::from_rupees(1000));
    }

    #[test]
    fn test_checkout_bill_always_charges_fees() {
        let bill = PricingPolicy::default().checkout_bill(Money::zero());
        assert_eq!(bill.total, Money::from_rupees(129));
    }

    #[test]
    fn test_threshold_passed_still_charges_fee() {
        let bill = PricingPolicy::default().cart_bill(Money::from_rupees(1200));
        assert!(bill.remaining_for_free_delivery.is_zero());
        assert_eq!(bill.delivery_fee, Money::from_rupees(120));
    }

    #[test]
    fn test_prefill_skips_blank_profile_fields() {
        let profile = UserProfile::new("Sara", "", "03111111111");
        let form = CheckoutForm::prefilled(&profile);
        assert_eq!(form.name, "Sara");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, "03111111111");
        assert_eq!(form.address, DEFAULT_ADDRESS);
        assert_eq!(form.payment_method, "Cash on Delivery");
    }

    #[test]
    fn test_autofill_toggle() {
        let profile = UserProfile::new("Sara", "sara@example.com", "");
        let mut form = CheckoutForm::prefilled(&profile);
        form.address = "Somewhere else".into();

        form.set_autofill(true, &profile);
        assert_eq!(form.name, "Ahmed Khan");
        assert_eq!(form.phone, "03001234567");
        assert_eq!(form.address, DEFAULT_ADDRESS);

        form.set_autofill(false, &profile);
        assert_eq!(form.name, "Sara");
        assert_eq!(form.email, "sara@example.com");
        assert_eq!(form.phone, "");
        assert!(!form.autofill_from_last_order);
    }

    #[test]
    fn test_form_filters() {
        let mut form = CheckoutForm::prefilled(&UserProfile::default());
        form.set_name("R2D2 Unit");
        form.set_phone("0300 123");
        assert_eq!(form.name, "RD Unit");
        assert_eq!(form.phone, "0300123");
    }

    #[test]
    fn test_success_dialog_targets() {
        assert_eq!(PlacedOrderChoice::GoHome.target(), Screen::Home);
        assert_eq!(PlacedOrderChoice::TrackDelivery.target(), Screen::TrackOrder);
    }
}
