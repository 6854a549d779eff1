//! # Localization
//!
//! English/Urdu text for everything the shell produces itself (toasts and the
//! labels it sends alongside data). Screen chrome lives in the WebView.
//!
//! ```text
//!   TextKey::QuantityIncreased ──text(key, English)──► "Quantity increased"
//!                              ──text(key, Urdu)─────► "مقدار بڑھائی گئی"
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartChange;
use crate::types::Language;

/// Every translatable string the shell emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum TextKey {
    Cart,
    EmptyCart,
    QuantityIncreased,
    QuantityDecreased,
    RemovedFromCart,
    AddedToCart,
    RemainingToAvail,
    FreeDelivery,
    ProceedToCheckout,
    AccountCreated,
    ProfileUpdated,
    OrderCancelled,
    RequestSubmitted,
    VoiceTitle,
    Personalization,
    FontSize,
    Language,
    Themes,
    IconSize,
    Light,
    Dark,
    Colorblind,
    English,
    Urdu,
    Meat,
    Fruits,
    Vegetables,
}

/// Looks up `key` in `language`.
pub fn text(key: TextKey, language: Language) -> &'static str {
    let (english, urdu) = match key {
        TextKey::Cart => ("Cart", "کارٹ"),
        TextKey::EmptyCart => ("Your cart is empty", "آپ کی کارٹ خالی ہے"),
        TextKey::QuantityIncreased => ("Quantity increased", "مقدار بڑھائی گئی"),
        TextKey::QuantityDecreased => ("Quantity decreased", "مقدار کم کی گئی"),
        TextKey::RemovedFromCart => ("removed from cart", "کارٹ سے ہٹایا گیا"),
        TextKey::AddedToCart => ("Added to cart!", "کارٹ میں شامل کر دیا گیا!"),
        TextKey::RemainingToAvail => ("remaining to avail", "مفت ڈیلیوری کے لیے باقی"),
        TextKey::FreeDelivery => ("FREE DELIVERY !", "مفت ڈیلیوری!"),
        TextKey::ProceedToCheckout => ("Proceed to Checkout", "چیک آؤٹ پر جائیں"),
        TextKey::AccountCreated => ("Account created successfully!", "اکاؤنٹ کامیابی سے بن گیا!"),
        TextKey::ProfileUpdated => ("Profile updated successfully", "پروفائل کامیابی سے اپ ڈیٹ ہو گیا"),
        TextKey::OrderCancelled => ("Order cancelled successfully", "آرڈر کامیابی سے منسوخ ہو گیا"),
        TextKey::RequestSubmitted => (
            "Request submitted successfully! We'll notify you when it's available.",
            "درخواست کامیابی سے بھیج دی گئی! جب دستیاب ہو گی تو آپ کو مطلع کریں گے۔",
        ),
        TextKey::VoiceTitle => ("Voice Control", "آواز کنٹرول"),
        TextKey::Personalization => ("Personalization", "ذاتی ترتیبات"),
        TextKey::FontSize => ("Font Size", "فونٹ سائز"),
        TextKey::Language => ("Language", "زبان"),
        TextKey::Themes => ("Themes", "تھیمز"),
        TextKey::IconSize => ("Icon Size", "آئیکن سائز"),
        TextKey::Light => ("Light", "روشن"),
        TextKey::Dark => ("Dark", "تاریک"),
        TextKey::Colorblind => ("Colorblind", "رنگ اندھا پن"),
        TextKey::English => ("English", "انگریزی"),
        TextKey::Urdu => ("Urdu", "اردو"),
        TextKey::Meat => ("Meat", "گوشت"),
        TextKey::Fruits => ("Fruits", "پھل"),
        TextKey::Vegetables => ("Vegetables", "سبزیاں"),
    };

    match language {
        Language::English => english,
        Language::Urdu => urdu,
    }
}

// =============================================================================
// Toasts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ToastKind {
    Success,
    Error,
    /// Neutral toast with a "View Cart" action.
    ViewCart,
}

/// A transient message shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// The toast for a cart mutation, or `None` when nothing changed.
pub fn cart_toast(change: &CartChange, language: Language) -> Option<Toast> {
    let toast = match change {
        CartChange::Added { .. } => Toast {
            kind: ToastKind::ViewCart,
            message: text(TextKey::AddedToCart, language).to_string(),
        },
        CartChange::Increased { .. } => {
            Toast::success(text(TextKey::QuantityIncreased, language))
        }
        CartChange::Decreased { .. } => {
            Toast::success(text(TextKey::QuantityDecreased, language))
        }
        CartChange::Removed { name, .. } => Toast::error(format!(
            "{} {}",
            name,
            text(TextKey::RemovedFromCart, language)
        )),
        CartChange::Unchanged => return None,
    };
    Some(toast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lookup() {
        assert_eq!(text(TextKey::FreeDelivery, Language::English), "FREE DELIVERY !");
        assert_eq!(text(TextKey::FreeDelivery, Language::Urdu), "مفت ڈیلیوری!");
        assert_eq!(text(TextKey::VoiceTitle, Language::Urdu), "آواز کنٹرول");
    }

    #[test]
    fn test_cart_toasts() {
        let removed = CartChange::Removed {
            id: 2,
            name: "LU Prince Biscuit".into(),
        };
        assert_eq!(
            cart_toast(&removed, Language::English),
            Some(Toast::error("LU Prince Biscuit removed from cart"))
        );
        assert_eq!(
            cart_toast(&CartChange::Increased { id: 2, quantity: 3 }, Language::Urdu),
            Some(Toast::success("مقدار بڑھائی گئی"))
        );
        assert_eq!(
            cart_toast(&CartChange::Added { id: 7 }, Language::English).map(|t| t.kind),
            Some(ToastKind::ViewCart)
        );
        assert_eq!(cart_toast(&CartChange::Unchanged, Language::English), None);
    }
}
