//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Sample  │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Items   │     │          │     │  Screen  │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_quantity                                  │
//! │                   remove_from_cart                                      │
//! │                                                                         │
//! │  Every mutation answers with the new cart, what changed, and the       │
//! │  toast to show (in the current language).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use krave_core::catalog::find_product;
use krave_core::checkout::{Bill, PricingPolicy};
use krave_core::i18n::{cart_toast, Toast};
use krave_core::{Cart, CartChange, CartLineItem, ProductRef};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, ConfigState, SettingsState};

/// Cart response including items and the bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub bill: Bill,
    pub total_quantity: u32,
}

impl CartResponse {
    pub fn new(cart: &Cart, pricing: &PricingPolicy) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            bill: pricing.cart_bill(cart.total()),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Result of a cart mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub cart: CartResponse,
    pub change: CartChange,
    pub toast: Option<Toast>,
}

fn mutate_cart(
    cart: &CartState,
    settings: &SettingsState,
    config: &ConfigState,
    op: impl FnOnce(&mut Cart) -> CartChange,
) -> CartUpdate {
    let (change, response) = cart.with_cart_mut(|c| {
        let change = op(c);
        (change, CartResponse::new(c, &config.pricing))
    });
    let toast = cart_toast(&change, settings.language());
    debug!(?change, total = %response.bill.items_total, "Cart updated");

    CartUpdate {
        cart: response,
        change,
        toast,
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Items in insertion order plus the cart-screen bill
/// (`Rs. 670 + 120 + 9 = Rs. 799` for the sample cart).
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>, config: State<'_, ConfigState>) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::new(c, &config.pricing))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity + 1, "Quantity increased"
/// - Not in cart: appended with quantity 1, "Added to cart!"
#[tauri::command]
pub fn add_to_cart(
    cart: State<'_, CartState>,
    settings: State<'_, SettingsState>,
    config: State<'_, ConfigState>,
    product: ProductRef,
) -> CartUpdate {
    debug!(product_id = product.id, name = %product.name, "add_to_cart command");
    mutate_cart(&cart, &settings, &config, |c| c.add_to_cart(&product))
}

/// Adds a catalog product (search results, category view) by id.
#[tauri::command]
pub fn add_catalog_product(
    cart: State<'_, CartState>,
    settings: State<'_, SettingsState>,
    config: State<'_, ConfigState>,
    product_id: u32,
) -> Result<CartUpdate, ApiError> {
    debug!(product_id, "add_catalog_product command");
    let product = find_product(product_id)?;
    Ok(mutate_cart(&cart, &settings, &config, |c| c.add_to_cart(&product)))
}

/// Changes an item's quantity by `delta`.
///
/// Quantity reaching 0 removes the item. Unknown ids change nothing.
#[tauri::command]
pub fn update_cart_quantity(
    cart: State<'_, CartState>,
    settings: State<'_, SettingsState>,
    config: State<'_, ConfigState>,
    product_id: u32,
    delta: i32,
) -> CartUpdate {
    debug!(product_id, delta, "update_cart_quantity command");
    mutate_cart(&cart, &settings, &config, |c| c.update_quantity(product_id, delta))
}

/// Removes an item from the cart.
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    settings: State<'_, SettingsState>,
    config: State<'_, ConfigState>,
    product_id: u32,
) -> CartUpdate {
    debug!(product_id, "remove_from_cart command");
    mutate_cart(&cart, &settings, &config, |c| c.remove_from_cart(product_id))
}

/// Quantity of `product_id` in the cart, 0 if absent.
#[tauri::command]
pub fn get_item_quantity(cart: State<'_, CartState>, product_id: u32) -> u32 {
    cart.with_cart(|c| c.item_quantity(product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use krave_core::i18n::ToastKind;
    use krave_core::{Language, Money};

    #[test]
    fn test_sample_cart_scenario() {
        let cart = CartState::new();
        let settings = SettingsState::default();
        let config = ConfigState::default();

        let update = mutate_cart(&cart, &settings, &config, |c| c.update_quantity(2, -1));
        assert_eq!(update.cart.bill.items_total, Money::from_rupees(590));

        let update = mutate_cart(&cart, &settings, &config, |c| c.update_quantity(2, -1));
        assert_eq!(update.cart.bill.items_total, Money::from_rupees(510));
        assert_eq!(update.toast.map(|t| t.message), Some("LU Prince Biscuit removed from cart".to_string()));

        let biscuit = find_product_in_sample(2);
        let update = mutate_cart(&cart, &settings, &config, |c| c.add_to_cart(&biscuit));
        assert_eq!(update.cart.bill.items_total, Money::from_rupees(590));
        assert_eq!(update.toast.map(|t| t.kind), Some(ToastKind::ViewCart));
    }

    #[test]
    fn test_unknown_id_has_no_toast() {
        let cart = CartState::new();
        let settings = SettingsState::new(Language::Urdu);
        let update = mutate_cart(&cart, &settings, &ConfigState::default(), |c| c.remove_from_cart(99));
        assert_eq!(update.change, CartChange::Unchanged);
        assert!(update.toast.is_none());
        assert_eq!(update.cart.items.len(), 3);
    }

    #[test]
    fn test_response_wire_shape() {
        let cart = Cart::with_sample_items();
        let json = serde_json::to_value(CartResponse::new(&cart, &PricingPolicy::default())).unwrap();
        assert_eq!(json["totalQuantity"], 4);
        assert_eq!(json["bill"]["total"], 799);
        assert_eq!(json["items"][0]["unitPrice"], 250);
    }

    fn find_product_in_sample(id: u32) -> ProductRef {
        let item = Cart::with_sample_items()
            .items()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .unwrap();
        ProductRef::new(item.id, item.name, item.unit_price, item.image_ref)
    }
}
