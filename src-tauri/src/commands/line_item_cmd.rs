//! Tauri Commands for Opportunity Line Items
//!
//! Exposes the fetch and delete endpoints to the frontend via Tauri IPC.

use line_item_board_core::LineItemRecord;
use tauri::State;

use crate::AppState;

/// List the line items of an opportunity
#[tauri::command]
pub async fn get_opportunity_line_items(
    state: State<'_, AppState>,
    opportunity_id: String,
) -> Result<Vec<LineItemRecord>, String> {
    state.org.line_items(&opportunity_id).await.map_err(|e| {
        log::error!("get_opportunity_line_items({}) failed: {}", opportunity_id, e);
        e.to_string()
    })
}

/// Delete one line item
#[tauri::command]
pub async fn delete_opportunity_line_item(
    state: State<'_, AppState>,
    line_item_id: String,
) -> Result<(), String> {
    state.org.delete_line_item(&line_item_id).await.map_err(|e| {
        log::error!("delete_opportunity_line_item({}) failed: {}", line_item_id, e);
        e.to_string()
    })
}
