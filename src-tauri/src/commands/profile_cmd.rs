//! Tauri Commands for the Current User

use line_item_board_core::ProfileRecord;
use tauri::State;

use crate::AppState;

/// Profile of the configured user
#[tauri::command]
pub async fn get_current_user_profile(state: State<'_, AppState>) -> Result<ProfileRecord, String> {
    state.org.current_profile().await.map_err(|e| {
        log::warn!("get_current_user_profile failed: {}", e);
        e.to_string()
    })
}
