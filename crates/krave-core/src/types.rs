//! # Domain Types
//!
//! Core domain types shared by the stores and the Tauri shell.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   ProductRef    │   │  CartLineItem   │   │  UserProfile    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │──►│  product        │   │  name           │       │
//! │  │  name           │   │  quantity ≥ 1   │   │  email          │       │
//! │  │  unit_price     │   └─────────────────┘   │  phone          │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  FontSize       │   │     Theme       │   │    Language     │       │
//! │  │  IconSize       │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Small/Medium/  │   │  Light / Dark / │   │  English / Urdu │       │
//! │  │  Large          │   │  Colorblind     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Screen: the closed set of 16 full-page views                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Reference
// =============================================================================

/// What a screen hands to the cart when the user taps "add".
///
/// It is a cart line item without the quantity. Search results only carry
/// id/name/price/image; category products also carry their discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductRef {
    /// Product identity, unique within the cart.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,

    /// Opaque image URL. The WebView falls back to a placeholder on load failure.
    pub image_ref: String,

    /// Price before discount, if the product is on sale.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// Discount in whole percent, if the product is on sale.
    #[serde(default)]
    pub discount_percent: Option<u8>,
}

impl ProductRef {
    /// Creates a product reference without a discount.
    pub fn new(id: u32, name: impl Into<String>, unit_price: Money, image_ref: impl Into<String>) -> Self {
        ProductRef {
            id,
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
            original_price: None,
            discount_percent: None,
        }
    }

    /// Attaches the pre-discount price and the discount percentage.
    pub fn with_discount(mut self, original_price: Money, discount_percent: u8) -> Self {
        self.original_price = Some(original_price);
        self.discount_percent = Some(discount_percent);
        self
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product entry in the cart.
///
/// ## Invariants
/// - `quantity >= 1` while the item is in the cart
/// - `id` is unique within the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    pub id: u32,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub image_ref: String,
    pub original_price: Option<Money>,
    pub discount_percent: Option<u8>,
}

impl CartLineItem {
    /// Creates a line item from a product reference and quantity.
    pub fn from_product(product: ProductRef, quantity: u32) -> Self {
        CartLineItem {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            quantity,
            image_ref: product.image_ref,
            original_price: product.original_price,
            discount_percent: product.discount_percent,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// User Profile
// =============================================================================

/// The editable user profile.
///
/// Free-form: the only checks are the character filters the screens apply
/// while typing (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    /// Creates a profile from its three fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        UserProfile {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// True if no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

// =============================================================================
// Display Preferences
// =============================================================================

/// Font size preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Icon size preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Colorblind,
}

/// UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    English,
    Urdu,
}

impl Language {
    /// BCP 47 tag handed to the speech synthesizer.
    pub const fn speech_tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Urdu => "ur-PK",
        }
    }

    /// True for right-to-left scripts.
    pub const fn is_rtl(&self) -> bool {
        matches!(self, Language::Urdu)
    }
}

impl FontSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }
}

impl IconSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            IconSize::Small => "small",
            IconSize::Medium => "medium",
            IconSize::Large => "large",
        }
    }
}

impl Theme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Colorblind => "colorblind",
        }
    }
}

// =============================================================================
// Screen
// =============================================================================

/// One full-page view.
///
/// The wire names match the literals the WebView router switches on, so an
/// unknown screen name is rejected when the command arguments are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Screen {
    #[default]
    Signup,
    Login,
    Otp,
    Onboarding,
    Home,
    Voice,
    Personalization,
    Cart,
    Checkout,
    Category,
    Search,
    Account,
    Voucher,
    TrackOrder,
    CurrentOrders,
    PastOrders,
}

impl Screen {
    /// Every screen, in declaration order.
    pub const ALL: [Screen; 16] = [
        Screen::Signup,
        Screen::Login,
        Screen::Otp,
        Screen::Onboarding,
        Screen::Home,
        Screen::Voice,
        Screen::Personalization,
        Screen::Cart,
        Screen::Checkout,
        Screen::Category,
        Screen::Search,
        Screen::Account,
        Screen::Voucher,
        Screen::TrackOrder,
        Screen::CurrentOrders,
        Screen::PastOrders,
    ];

    /// The wire name of the screen.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Screen::Signup => "signup",
            Screen::Login => "login",
            Screen::Otp => "otp",
            Screen::Onboarding => "onboarding",
            Screen::Home => "home",
            Screen::Voice => "voice",
            Screen::Personalization => "personalization",
            Screen::Cart => "cart",
            Screen::Checkout => "checkout",
            Screen::Category => "category",
            Screen::Search => "search",
            Screen::Account => "account",
            Screen::Voucher => "voucher",
            Screen::TrackOrder => "trackOrder",
            Screen::CurrentOrders => "currentOrders",
            Screen::PastOrders => "pastOrders",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a screen name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen: '{0}'")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartLineItem::from_product(
            ProductRef::new(2, "LU Prince Biscuit", Money::from_rupees(80), "prince.jpg"),
            2,
        );
        assert_eq!(item.line_total(), Money::from_rupees(160));
    }

    #[test]
    fn test_preference_defaults() {
        assert_eq!(FontSize::default(), FontSize::Medium);
        assert_eq!(IconSize::default(), IconSize::Medium);
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_speech_tags() {
        assert_eq!(Language::English.speech_tag(), "en-US");
        assert_eq!(Language::Urdu.speech_tag(), "ur-PK");
        assert!(Language::Urdu.is_rtl());
    }

    #[test]
    fn test_screen_wire_names_round_trip() {
        for screen in Screen::ALL {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen.as_str()));
            assert_eq!(screen.as_str().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn test_unknown_screen_is_rejected() {
        assert_eq!(
            "settings".parse::<Screen>(),
            Err(UnknownScreen("settings".to_string()))
        );
        assert!(serde_json::from_str::<Screen>("\"track_order\"").is_err());
    }

    #[test]
    fn test_product_ref_wire_shape() {
        let product = ProductRef::new(103, "Onion (Piyaz)", Money::from_rupees(93), "onion.jpg")
            .with_discount(Money::from_rupees(155), 40);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["unitPrice"], 93);
        assert_eq!(json["originalPrice"], 155);
        assert_eq!(json["discountPercent"], 40);

        // Search results omit the discount fields entirely.
        let plain: ProductRef = serde_json::from_str(
            r#"{"id":7,"name":"Red Apple","unitPrice":199,"imageRef":"apple.jpg"}"#,
        )
        .unwrap();
        assert_eq!(plain.original_price, None);
    }
}
