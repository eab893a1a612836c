//! Tauri Commands for Navigation

use tauri::State;

use crate::org::validate_record_id;
use crate::AppState;

/// Open a record detail page in the system browser
#[tauri::command]
pub fn open_record(state: State<'_, AppState>, record_id: String) -> Result<(), String> {
    let id = validate_record_id(&record_id).map_err(|e| e.to_string())?;
    if state.config.instance_root().is_empty() {
        return Err("Connexion non configurée : instanceUrl".to_string());
    }
    let url = state.config.record_url(id);
    log::info!("open_record: {}", url);
    open::that(&url).map_err(|e| e.to_string())
}
