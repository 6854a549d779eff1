//! # Money Module
//!
//! Provides the `Money` type for rupee amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Every price in the store is a whole number of rupees:                  │
//! │    LU Prince Biscuit  Rs. 80                                            │
//! │    Delivery fee       Rs. 120                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    80 × 2 + 120 + 9 = 289, exactly, every time                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use krave_core::money::Money;
//!
//! let price = Money::from_rupees(80);
//! let line_total = price * 2;                     // Rs. 160
//! let bill = line_total + Money::from_rupees(129); // Rs. 289
//! assert_eq!(bill.rupees(), 289);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Pakistani rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (e.g. remaining-to-threshold math)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serde**: Serializes as a plain JSON number for the WebView
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  ProductRef.unit_price ──► CartLineItem.unit_price ──► line total       │
/// │                                                                         │
/// │  Cart.total ──► + delivery fee + platform charges ──► Checkout total    │
/// │                                                                         │
/// │  Displayed as "Rs. 250" in the UI                                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use krave_core::money::Money;
    ///
    /// let price = Money::from_rupees(250);
    /// assert_eq!(price.rupees(), 250);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use krave_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(80);
    /// assert_eq!(unit_price.multiply_quantity(2).rupees(), 160);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Subtracts `other`, clamping at zero.
    ///
    /// Used for "Rs. X remaining to avail free delivery", which never goes
    /// negative once the threshold is passed.
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Applies a whole-percent discount and returns the discounted amount.
    ///
    /// Rounds half up on the discount amount.
    ///
    /// ## Example
    /// ```rust
    /// use krave_core::money::Money;
    ///
    /// // Onion: Rs. 155 at 40% off
    /// let discounted = Money::from_rupees(155).apply_percentage_discount(40);
    /// assert_eq!(discounted.rupees(), 93);
    /// ```
    pub fn apply_percentage_discount(&self, percent: u8) -> Money {
        let discount = self.0.saturating_mul(i64::from(percent)).saturating_add(50) / 100;
        Money(self.0 - discount)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the storefront format: `Rs. 250`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-Rs. {}", self.0.abs())
        } else {
            write!(f, "Rs. {}", self.0)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a line-item quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let money = Money::from_rupees(250);
        assert_eq!(money.rupees(), 250);
        assert!(money.is_positive());
        assert!(!money.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(250).to_string(), "Rs. 250");
        assert_eq!(Money::zero().to_string(), "Rs. 0");
        assert_eq!(Money::from_rupees(-9).to_string(), "-Rs. 9");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(250);
        let b = Money::from_rupees(80);

        assert_eq!((a + b).rupees(), 330);
        assert_eq!((a - b).rupees(), 170);
        assert_eq!((b * 2).rupees(), 160);

        let mut c = a;
        c += b;
        c -= Money::from_rupees(30);
        assert_eq!(c.rupees(), 300);
    }

    #[test]
    fn test_sum() {
        let total: Money = [250, 160, 260].into_iter().map(Money::from_rupees).sum();
        assert_eq!(total.rupees(), 670);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_rupees(i64::MAX);
        assert_eq!(huge.multiply_quantity(2).rupees(), i64::MAX);
        assert_eq!((huge + Money::from_rupees(9)).rupees(), i64::MAX);
        assert_eq!((Money::from_rupees(i64::MIN) - Money::from_rupees(1)).rupees(), i64::MIN);

        let total: Money = [huge, huge, Money::from_rupees(120)].into_iter().sum();
        assert_eq!(total.rupees(), i64::MAX);
    }

    #[test]
    fn test_saturating_sub() {
        let threshold = Money::from_rupees(1000);
        assert_eq!(threshold.saturating_sub(Money::from_rupees(670)).rupees(), 330);
        assert_eq!(threshold.saturating_sub(Money::from_rupees(1200)).rupees(), 0);
    }

    #[test]
    fn test_percentage_discount() {
        assert_eq!(Money::from_rupees(155).apply_percentage_discount(40).rupees(), 93);
        assert_eq!(Money::from_rupees(1000).apply_percentage_discount(50).rupees(), 500);
        assert_eq!(Money::from_rupees(99).apply_percentage_discount(0).rupees(), 99);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_rupees(80)).unwrap();
        assert_eq!(json, "80");
        let back: Money = serde_json::from_str("410").unwrap();
        assert_eq!(back, Money::from_rupees(410));
    }
}
