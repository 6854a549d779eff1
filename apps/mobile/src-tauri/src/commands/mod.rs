//! # Tauri Commands Module
//!
//! All commands exposed to the Krave Mart WebView.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── navigation.rs  ◄─── Screen changes + transition side effects
//! ├── auth.rs        ◄─── Signup, login, OTP, profile
//! ├── onboarding.rs  ◄─── Onboarding carousel, tooltip tutorial
//! ├── catalog.rs     ◄─── Home, search, category, vouchers, account data
//! ├── cart.rs        ◄─── Cart manipulation
//! ├── checkout.rs    ◄─── Checkout form, placing orders
//! ├── orders.rs      ◄─── Current/past orders, cancel, tracking
//! ├── settings.rs    ◄─── Language, theme, font and icon size
//! ├── voice.rs       ◄─── Voice demo inputs
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  WebView                                                                │
//! │  ───────                                                                │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const update = await invoke('update_cart_quantity', {                  │
//! │    productId: 2,                                                        │
//! │    delta: -1                                                            │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn update_cart_quantity(                                               │
//! │      cart: State<'_, CartState>,   ◄── Injected by Tauri               │
//! │      product_id: u32,              ◄── From invoke params              │
//! │      delta: i32,                                                        │
//! │  ) -> CartUpdate                                                        │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  WebView receives: { cart, change, toast }                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection (Option B)
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_item_quantity(cart: State<'_, CartState>, product_id: u32)
//!
//! // Cart plus toast language plus pricing
//! fn add_to_cart(cart: State<'_, CartState>, settings: State<'_, SettingsState>,
//!                config: State<'_, ConfigState>, product: ProductRef)
//!
//! // Moves screens: async, takes the AppHandle for side effects
//! async fn navigate(app: AppHandle, nav: State<'_, NavState>, screen: Screen, ...)
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod navigation;
pub mod onboarding;
pub mod orders;
pub mod settings;
pub mod voice;
