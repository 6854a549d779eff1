//! # State Module
//!
//! Manages application state for the Tauri app.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. Commands declare exactly the stores they
//! touch, and independent stores don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(CartState::new());                                  │   │
//! │  │  app.manage(SettingsState::new(config.default_language));       │   │
//! │  │  app.manage(NavState::new());  ... app.manage(config);          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴────┬──────────────┬──────────────┐      │
//! │     ▼              ▼              ▼              ▼              ▼       │
//! │  ┌────────┐  ┌──────────┐  ┌───────────┐  ┌───────────┐  ┌─────────┐  │
//! │  │ Cart   │  │ Settings │  │ Nav/Auth/ │  │ Orders/   │  │ Voice   │  │
//! │  │ State  │  │ State    │  │ Walkthru  │  │ Checkout/ │  │ State   │  │
//! │  │        │  │          │  │           │  │ Search    │  │ (task)  │  │
//! │  └────────┘  └──────────┘  └───────────┘  └───────────┘  └─────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Every store: Arc<Mutex<T>>, one lock per store                      │
//! │  • Only the navigator lock is held while others are taken (transitions) │
//! │  • VoiceState: handle to one background runner (at most one alive)    │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod orders;
mod session;
mod settings;
mod voice;

pub use cart::CartState;
pub use catalog::SearchState;
pub use config::{ConfigError, ConfigState};
pub use orders::{CheckoutState, OrdersState};
pub use session::{AuthState, NavState, WalkthroughState, Walkthroughs};
pub use settings::SettingsState;
pub use voice::{
    SpeakRequest, TauriVoiceEvents, VoiceControl, VoiceEvents, VoiceRunnerHandle, VoiceState,
    PROGRESS_EVENT, SPEAK_EVENT,
};
