//! # Orders
//!
//! Current orders (cancellable), past orders (reorderable) and delivery
//! tracking.
//!
//! ## Order Lifecycle
//! ```text
//!   place_order() ──► current ──(cancel with reason)──► removed
//!                        │
//!                        ▼
//!   Order Placed ─► Processing ─► Out for Delivery ─► Delivered
//!      (tracking steps; the current step and everything before it are "reached")
//! ```
//!
//! Past orders are a fixed history. Reorder just sends the user home.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Language;
use crate::validation::validate_cancel_reason;

/// Order tracked when no id is given.
pub const DEFAULT_TRACKED_ORDER: &str = "#ORD-12345";

/// Number used for the first order placed in this session.
pub const FIRST_NEW_ORDER_NUMBER: u32 = 12346;

/// Estimated delivery time for a freshly placed order, in minutes.
pub const NEW_ORDER_ETA_MINUTES: u32 = 25;

/// Reasons offered in the cancel dialog. Free text is also accepted.
pub const CANCEL_REASONS: [&str; 5] = [
    "Changed my mind",
    "Found a better price elsewhere",
    "Ordered by mistake",
    "Delivery time too long",
    "Want to modify the order",
];

// =============================================================================
// Order Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum OrderStatus {
    Ordered,
    Processing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Tracking steps, in order.
    pub const STEPS: [OrderStatus; 4] = [
        OrderStatus::Ordered,
        OrderStatus::Processing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (OrderStatus::Ordered, Language::English) => "Order Placed",
            (OrderStatus::Processing, Language::English) => "Processing",
            (OrderStatus::OutForDelivery, Language::English) => "Out for Delivery",
            (OrderStatus::Delivered, Language::English) => "Delivered",
            (OrderStatus::Ordered, Language::Urdu) => "آرڈر دیا گیا",
            (OrderStatus::Processing, Language::Urdu) => "تیاری جاری",
            (OrderStatus::OutForDelivery, Language::Urdu) => "ڈیلیوری کے لیے روانہ",
            (OrderStatus::Delivered, Language::Urdu) => "ڈیلیور ہو گیا",
        }
    }

    fn step_index(self) -> usize {
        Self::STEPS.iter().position(|s| *s == self).unwrap_or(0)
    }
}

// =============================================================================
// Order
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    /// Display id, e.g. `#ORD-12345`.
    pub id: String,
    pub item_count: u32,
    pub total: Money,
    /// Only set while the order is in progress.
    pub estimated_minutes: Option<u32>,
    pub status: OrderStatus,
    /// Date as shown on the card, e.g. "23 Nov, 2025".
    pub date_label: String,
}

impl Order {
    fn new(
        number: u32,
        item_count: u32,
        total: i64,
        estimated_minutes: Option<u32>,
        status: OrderStatus,
        date_label: &str,
    ) -> Self {
        Order {
            id: format!("#ORD-{number}"),
            item_count,
            total: Money::from_rupees(total),
            estimated_minutes,
            status,
            date_label: date_label.to_string(),
        }
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// Current and past orders for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    current: Vec<Order>,
    past: Vec<Order>,
    next_number: u32,
}

impl Default for OrderBook {
    fn default() -> Self {
        OrderBook {
            current: vec![
                Order::new(12345, 5, 1250, Some(15), OrderStatus::OutForDelivery, "23 Nov, 2025"),
                Order::new(12344, 3, 680, Some(25), OrderStatus::Processing, "23 Nov, 2025"),
            ],
            past: vec![
                Order::new(12343, 8, 2450, None, OrderStatus::Delivered, "22 Nov, 2025"),
                Order::new(12342, 4, 890, None, OrderStatus::Delivered, "20 Nov, 2025"),
                Order::new(12341, 6, 1560, None, OrderStatus::Delivered, "18 Nov, 2025"),
            ],
            next_number: FIRST_NEW_ORDER_NUMBER,
        }
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &[Order] {
        &self.current
    }

    pub fn past(&self) -> &[Order] {
        &self.past
    }

    /// Records a newly placed order at the top of the current list.
    pub fn place_order(&mut self, item_count: u32, total: Money, date_label: &str) -> Order {
        let order = Order {
            id: format!("#ORD-{}", self.next_number),
            item_count,
            total,
            estimated_minutes: Some(NEW_ORDER_ETA_MINUTES),
            status: OrderStatus::Ordered,
            date_label: date_label.to_string(),
        };
        self.next_number += 1;
        self.current.insert(0, order.clone());
        order
    }

    /// Cancels a current order.
    ///
    /// ## Errors
    /// - `Validation(CancellationReasonRequired)` for a blank reason (checked first)
    /// - `OrderNotFound` if no current order has this id
    pub fn cancel(&mut self, order_id: &str, reason: &str) -> CoreResult<Order> {
        validate_cancel_reason(reason)?;
        let index = self
            .current
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()))?;
        Ok(self.current.remove(index))
    }

    /// Tracking view for a current order.
    ///
    /// With no id, tracks [`DEFAULT_TRACKED_ORDER`], falling back to the
    /// first current order once that one is gone.
    pub fn track(&self, order_id: Option<&str>, language: Language) -> CoreResult<Tracking> {
        let order = match order_id {
            Some(id) => self.current.iter().find(|o| o.id == id),
            None => self
                .current
                .iter()
                .find(|o| o.id == DEFAULT_TRACKED_ORDER)
                .or_else(|| self.current.first()),
        }
        .ok_or_else(|| {
            CoreError::OrderNotFound(order_id.unwrap_or(DEFAULT_TRACKED_ORDER).to_string())
        })?;

        Ok(Tracking::for_order(order, language))
    }
}

// =============================================================================
// Tracking
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrackingStep {
    pub status: OrderStatus,
    pub label: String,
    /// This step or a later one has happened.
    pub reached: bool,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Tracking {
    pub order_id: String,
    pub item_count: u32,
    pub status: OrderStatus,
    /// Hidden once delivered.
    pub estimated_minutes: Option<u32>,
    pub steps: Vec<TrackingStep>,
}

impl Tracking {
    pub fn for_order(order: &Order, language: Language) -> Self {
        let current_index = order.status.step_index();
        let steps = OrderStatus::STEPS
            .iter()
            .enumerate()
            .map(|(i, status)| TrackingStep {
                status: *status,
                label: status.label(language).to_string(),
                reached: i <= current_index,
                current: i == current_index,
            })
            .collect();

        Tracking {
            order_id: order.id.clone(),
            item_count: order.item_count,
            status: order.status,
            estimated_minutes: match order.status {
                OrderStatus::Delivered => None,
                _ => order.estimated_minutes,
            },
            steps,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_initial_orders() {
        let book = OrderBook::new();
        assert_eq!(book.current().len(), 2);
        assert_eq!(book.current()[0].id, "#ORD-12345");
        assert_eq!(book.current()[0].total, Money::from_rupees(1250));
        assert_eq!(book.past().len(), 3);
        assert!(book.past().iter().all(|o| o.status == OrderStatus::Delivered));
    }

    #[test]
    fn test_cancel_requires_reason() {
        let mut book = OrderBook::new();
        let err = book.cancel("#ORD-12345", "  ").unwrap_err();
        assert_eq!(err, CoreError::Validation(ValidationError::CancellationReasonRequired));
        assert_eq!(book.current().len(), 2);
    }

    #[test]
    fn test_cancel_removes_order() {
        let mut book = OrderBook::new();
        let cancelled = book.cancel("#ORD-12344", CANCEL_REASONS[2]).unwrap();
        assert_eq!(cancelled.item_count, 3);
        assert_eq!(book.current().len(), 1);

        assert_eq!(
            book.cancel("#ORD-12344", "again"),
            Err(CoreError::OrderNotFound("#ORD-12344".into()))
        );
    }

    #[test]
    fn test_place_order_numbers_increment() {
        let mut book = OrderBook::new();
        let first = book.place_order(4, Money::from_rupees(799), "16 Oct, 2026");
        let second = book.place_order(1, Money::from_rupees(209), "16 Oct, 2026");
        assert_eq!(first.id, "#ORD-12346");
        assert_eq!(second.id, "#ORD-12347");
        assert_eq!(book.current()[0], second);
        assert_eq!(first.status, OrderStatus::Ordered);
    }

    #[test]
    fn test_default_tracking() {
        let book = OrderBook::new();
        let tracking = book.track(None, Language::English).unwrap();
        assert_eq!(tracking.order_id, "#ORD-12345");
        assert_eq!(tracking.estimated_minutes, Some(15));

        let reached: Vec<bool> = tracking.steps.iter().map(|s| s.reached).collect();
        assert_eq!(reached, vec![true, true, true, false]);
        assert!(tracking.steps[2].current);
        assert_eq!(tracking.steps[2].label, "Out for Delivery");
    }

    #[test]
    fn test_tracking_falls_back_after_cancel() {
        let mut book = OrderBook::new();
        book.cancel("#ORD-12345", "Ordered by mistake").unwrap();
        let tracking = book.track(None, Language::Urdu).unwrap();
        assert_eq!(tracking.order_id, "#ORD-12344");
        assert_eq!(tracking.steps[1].label, "تیاری جاری");

        book.cancel("#ORD-12344", "Ordered by mistake").unwrap();
        assert!(book.track(None, Language::English).is_err());
    }

    #[test]
    fn test_delivered_hides_eta() {
        let order = OrderBook::new().past()[0].clone();
        let tracking = Tracking::for_order(&order, Language::English);
        assert_eq!(tracking.estimated_minutes, None);
        assert!(tracking.steps.iter().all(|s| s.reached));
    }
}
