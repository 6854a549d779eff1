//! # Krave Mart Mobile Entry Point
//!
//! Desktop builds start here; Android and iOS enter through
//! `krave_mobile_lib::run` via `mobile_entry_point`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Krave Mart                                       │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  • Signup / Login / OTP     • Home, Search, Category             │  │
//! │  │  • Cart, Checkout, Orders   • Settings, Voice demo               │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')  ◄── listen('voice://*')   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  commands/ ──► navigate, add_to_cart, place_order, ...           │  │
//! │  │  state/ ─────► CartState, NavState, OrdersState, VoiceState, ... │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 krave-core (pure business rules)                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    krave_mobile_lib::run();
}
