//! # Checkout Commands
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  navigate(checkout) ──► form rebuilt from profile                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  get_checkout ──► form + items + bill (fees always charged)             │
//! │  update_checkout_form / set_checkout_autofill                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  place_order ──► #ORD-12346 recorded as a current order                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  finish_order(goHome | trackDelivery) ──► home | trackOrder             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Placing an order does not empty the cart, and the voucher code is never
//! applied to the bill.

use chrono::{Local, NaiveDate};
use krave_core::checkout::{Bill, CheckoutForm, PlacedOrderChoice};
use krave_core::orders::Order;
use krave_core::{CartLineItem, Navigator};
use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::{debug, info};

use super::navigation::go_to;
use crate::error::ApiError;
use crate::state::{CartState, CheckoutState, ConfigState, NavState, OrdersState, SettingsState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub form: CheckoutForm,
    pub items: Vec<CartLineItem>,
    pub bill: Bill,
}

#[tauri::command]
pub fn get_checkout(
    cart: State<'_, CartState>,
    checkout: State<'_, CheckoutState>,
    config: State<'_, ConfigState>,
) -> CheckoutView {
    debug!("get_checkout command");
    let (items, items_total) = cart.with_cart(|c| (c.items().to_vec(), c.total()));
    CheckoutView {
        form: checkout.with_form_mut(|f| f.clone()),
        items,
        bill: config.pricing.checkout_bill(items_total),
    }
}

/// Fields edited on the checkout form. `None` leaves a field alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutFormUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub payment_method: Option<String>,
    pub voucher_code: Option<String>,
}

impl CheckoutFormUpdate {
    fn apply(self, form: &mut CheckoutForm) {
        if let Some(name) = self.name {
            form.set_name(&name);
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(phone) = self.phone {
            form.set_phone(&phone);
        }
        if let Some(address) = self.address {
            form.address = address;
        }
        if let Some(method) = self.payment_method {
            form.payment_method = method;
        }
        if let Some(code) = self.voucher_code {
            form.voucher_code = code;
        }
    }
}

/// Edits the form. Name keeps letters and spaces, phone keeps digits.
#[tauri::command]
pub fn update_checkout_form(
    checkout: State<'_, CheckoutState>,
    update: CheckoutFormUpdate,
) -> CheckoutForm {
    debug!("update_checkout_form command");
    checkout.with_form_mut(|form| {
        update.apply(form);
        form.clone()
    })
}

/// Toggles "Autofill from last order".
#[tauri::command]
pub fn set_checkout_autofill(
    checkout: State<'_, CheckoutState>,
    settings: State<'_, SettingsState>,
    checked: bool,
) -> CheckoutForm {
    debug!(checked, "set_checkout_autofill command");
    let profile = settings.with_settings(|s| s.user_profile().clone());
    checkout.with_form_mut(|form| {
        form.set_autofill(checked, &profile);
        form.clone()
    })
}

/// The recorded order and the success dialog's buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub order: Order,
    pub choices: Vec<PlacedOrderChoice>,
}

/// Date as shown on order cards, e.g. "16 Oct, 2026".
fn date_label(date: NaiveDate) -> String {
    date.format("%-d %b, %Y").to_string()
}

/// Places the order for the current cart.
#[tauri::command]
pub fn place_order(
    cart: State<'_, CartState>,
    orders: State<'_, OrdersState>,
    config: State<'_, ConfigState>,
) -> PlacedOrder {
    let (item_count, items_total) = cart.with_cart(|c| (c.total_quantity(), c.total()));
    let total = config.pricing.checkout_bill(items_total).total;
    let label = date_label(Local::now().date_naive());

    let order = orders.with_orders_mut(|book| book.place_order(item_count, total, &label));
    info!(order_id = %order.id, item_count, total = %total, "Order placed");

    PlacedOrder {
        order,
        choices: vec![PlacedOrderChoice::GoHome, PlacedOrderChoice::TrackDelivery],
    }
}

/// Closes the success dialog and goes where the user chose.
#[tauri::command]
pub async fn finish_order(
    app: AppHandle,
    nav: State<'_, NavState>,
    choice: PlacedOrderChoice,
) -> Result<Navigator, ApiError> {
    debug!(?choice, "finish_order command");
    Ok(go_to(&app, &nav, choice.target(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::UserProfile;

    #[test]
    fn test_date_label_format() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 6).unwrap();
        assert_eq!(date_label(date), "6 Oct, 2026");
    }

    #[test]
    fn test_form_update_filters_name_and_phone() {
        let mut form = CheckoutForm::prefilled(&UserProfile::default());
        CheckoutFormUpdate {
            name: Some("Ayesha 99".into()),
            phone: Some("+92 300".into()),
            voucher_code: Some("WELCOME".into()),
            ..Default::default()
        }
        .apply(&mut form);

        assert_eq!(form.name, "Ayesha ");
        assert_eq!(form.phone, "92300");
        assert_eq!(form.voucher_code, "WELCOME");
        assert_eq!(form.payment_method, "Cash on Delivery");
    }
}
