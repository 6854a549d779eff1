//! # Config Commands

use tauri::State;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the loaded configuration (store name, pricing, analytics id).
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    debug!("get_config command");
    config.inner().clone()
}
