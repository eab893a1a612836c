//! Tauri Commands for Configuration

use line_item_board_core::BoardConfig;
use tauri::State;

use crate::AppState;

/// Labels, messages and styles for the board
#[tauri::command]
pub fn get_board_config(state: State<'_, AppState>) -> BoardConfig {
    state.config.board.clone()
}
