//! # Order Commands
//!
//! Current orders (cancel, track), past orders (reorder) and the tracking view.

use krave_core::i18n::{text, TextKey, Toast};
use krave_core::orders::{Order, Tracking, CANCEL_REASONS};
use krave_core::{Navigator, Screen};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::{debug, info};

use super::navigation::go_to;
use crate::error::ApiError;
use crate::state::{NavState, OrdersState, SettingsState};

#[tauri::command]
pub fn get_current_orders(orders: State<'_, OrdersState>) -> Vec<Order> {
    debug!("get_current_orders command");
    orders.with_orders(|book| book.current().to_vec())
}

#[tauri::command]
pub fn get_past_orders(orders: State<'_, OrdersState>) -> Vec<Order> {
    debug!("get_past_orders command");
    orders.with_orders(|book| book.past().to_vec())
}

/// Preset reasons for the cancel dialog.
#[tauri::command]
pub fn get_cancel_reasons() -> Vec<String> {
    CANCEL_REASONS.iter().map(|r| r.to_string()).collect()
}

/// Remaining current orders plus the confirmation toast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub cancelled: Order,
    pub current: Vec<Order>,
    pub toast: Toast,
}

/// Cancels a current order.
///
/// ## Errors
/// - `VALIDATION_ERROR` "Please provide a reason for cancellation"
/// - `NOT_FOUND` for an id that is not a current order
#[tauri::command]
pub fn cancel_order(
    orders: State<'_, OrdersState>,
    settings: State<'_, SettingsState>,
    order_id: String,
    reason: String,
) -> Result<CancelResponse, ApiError> {
    debug!(order_id = %order_id, "cancel_order command");
    let (cancelled, current) = orders.with_orders_mut(|book| {
        book.cancel(&order_id, &reason)
            .map(|cancelled| (cancelled, book.current().to_vec()))
    })?;
    info!(order_id = %cancelled.id, reason = %reason.trim(), "Order cancelled");

    Ok(CancelResponse {
        cancelled,
        current,
        toast: Toast::success(text(TextKey::OrderCancelled, settings.language())),
    })
}

/// Tracking steps for `order_id`, or for the default tracked order.
#[tauri::command]
pub fn track_order(
    orders: State<'_, OrdersState>,
    settings: State<'_, SettingsState>,
    order_id: Option<String>,
) -> Result<Tracking, ApiError> {
    debug!(order_id = ?order_id, "track_order command");
    let language = settings.language();
    Ok(orders.with_orders(|book| book.track(order_id.as_deref(), language))?)
}

/// "Reorder" on a past order: back to home to shop again.
#[tauri::command]
pub async fn reorder(
    app: AppHandle,
    nav: State<'_, NavState>,
    order_id: String,
) -> Result<Navigator, ApiError> {
    debug!(order_id = %order_id, "reorder command");
    Ok(go_to(&app, &nav, Screen::Home, None))
}
