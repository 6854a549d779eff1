//! # Krave Mart Mobile Library
//!
//! Core library for the Krave Mart mobile application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! krave_mobile_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── catalog.rs  ◄─── Recent searches
//! │   ├── config.rs   ◄─── Configuration state (file + env)
//! │   ├── orders.rs   ◄─── Order book, checkout form
//! │   ├── session.rs  ◄─── Navigator, OTP boxes, walkthroughs
//! │   ├── settings.rs ◄─── Language, theme, profile
//! │   └── voice.rs    ◄─── Voice demo runner
//! ├── commands/       ◄─── One module per screen group
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! All business rules live in `krave-core`; this crate owns the locks, the
//! clock and the WebView events.

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use state::{
    AuthState, CartState, CheckoutState, ConfigState, NavState, OrdersState, SearchState,
    SettingsState, VoiceState, WalkthroughState,
};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • krave.toml (platform config dir or KRAVE_CONFIG)                  │
/// │     • KRAVE_* environment overrides                                     │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartState: three sample items                                     │
/// │     • NavState: signup screen                                           │
/// │     • SettingsState: configured default language                        │
/// │     • OrdersState: seeded current and past orders                       │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    info!("Starting Krave Mart");

    let config = ConfigState::load_or_default(None);
    info!(
        store = %config.store_name,
        language = ?config.default_language,
        "Configuration loaded"
    );

    tauri::Builder::default()
        .setup(move |app| {
            app.manage(CartState::new());
            app.manage(SettingsState::new(config.default_language));
            app.manage(NavState::new());
            app.manage(AuthState::new());
            app.manage(WalkthroughState::new());
            app.manage(OrdersState::new());
            app.manage(CheckoutState::new());
            app.manage(SearchState::new());
            app.manage(VoiceState::new());
            app.manage(config);

            info!("State initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Navigation
            commands::navigation::get_navigation,
            commands::navigation::navigate,
            commands::navigation::get_screen_links,
            // Auth
            commands::auth::signup,
            commands::auth::login,
            commands::auth::set_otp_digit,
            commands::auth::otp_backspace,
            commands::auth::verify_otp,
            commands::auth::logout,
            commands::auth::get_profile,
            commands::auth::update_profile,
            // Walkthroughs
            commands::onboarding::get_onboarding,
            commands::onboarding::onboarding_step,
            commands::onboarding::get_tutorial,
            commands::onboarding::tutorial_step,
            // Catalog
            commands::catalog::get_home_catalog,
            commands::catalog::request_product,
            commands::catalog::get_search_options,
            commands::catalog::search_products,
            commands::catalog::submit_search,
            commands::catalog::get_recent_searches,
            commands::catalog::get_category_view,
            commands::catalog::get_vouchers,
            commands::catalog::get_account_data,
            // Cart
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::add_catalog_product,
            commands::cart::update_cart_quantity,
            commands::cart::remove_from_cart,
            commands::cart::get_item_quantity,
            // Checkout
            commands::checkout::get_checkout,
            commands::checkout::update_checkout_form,
            commands::checkout::set_checkout_autofill,
            commands::checkout::place_order,
            commands::checkout::finish_order,
            // Orders
            commands::orders::get_current_orders,
            commands::orders::get_past_orders,
            commands::orders::get_cancel_reasons,
            commands::orders::cancel_order,
            commands::orders::track_order,
            commands::orders::reorder,
            // Settings
            commands::settings::get_settings,
            commands::settings::update_settings,
            commands::settings::get_text,
            // Voice
            commands::voice::get_voice_script,
            commands::voice::voice_mic_pressed,
            commands::voice::voice_utterance_finished,
            // Config
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=krave=trace` - Show trace for krave crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,krave=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
