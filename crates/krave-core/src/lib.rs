//! # krave-core: Pure App Logic for Krave Mart
//!
//! This crate is the **heart** of Krave Mart. It contains every piece of
//! state-transition logic as plain structs and pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Krave Mart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │   Home ──► Category ──► Cart ──► Checkout ──► Track Order       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    navigate, add_to_cart, update_quantity, signup, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ krave-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │ navigation │  │ settings  │  │validation │  │   │
//! │  │   │   Cart    │  │ Navigator  │  │ Settings  │  │  toasts   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  checkout  │  │  orders   │  │   voice   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductRef, CartLineItem, Screen, preferences)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types (their `Display` is the toast text)
//! - [`cart`] - The cart store
//! - [`navigation`] - The screen state machine
//! - [`settings`] - Display preferences and the user profile
//! - [`validation`] - Form guard clauses and input filters
//! - [`catalog`] - Static product, voucher and account data; search filters
//! - [`checkout`] - Bill breakdown and the checkout form
//! - [`orders`] - Current/past orders and delivery tracking
//! - [`onboarding`] - Onboarding and tooltip tutorial steppers
//! - [`i18n`] - English/Urdu translation tables
//! - [`voice`] - The scripted voice assistant conversation
//!
//! ## Example Usage
//!
//! ```rust
//! use krave_core::cart::Cart;
//! use krave_core::money::Money;
//!
//! let cart = Cart::with_sample_items();
//! assert_eq!(cart.total(), Money::from_rupees(670));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod i18n;
pub mod money;
pub mod navigation;
pub mod onboarding;
pub mod orders;
pub mod settings;
pub mod types;
pub mod validation;
pub mod voice;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use krave_core::Money` instead of
// `use krave_core::money::Money`

pub use cart::{Cart, CartChange};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use navigation::{NavEvent, Navigator};
pub use settings::Settings;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of digit boxes on the OTP screen.
pub const OTP_LENGTH: usize = 4;

/// Maximum number of entries kept in the recent-search list.
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Delivery fee charged on a non-empty order, in rupees.
pub const DEFAULT_DELIVERY_FEE: i64 = 120;

/// Flat platform charge on a non-empty order, in rupees.
pub const DEFAULT_PLATFORM_CHARGES: i64 = 9;

/// Items total at which the cart advertises free delivery, in rupees.
pub const DEFAULT_FREE_DELIVERY_THRESHOLD: i64 = 1000;
