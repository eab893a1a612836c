//! Line Item Board Backend
//!
//! Layered architecture:
//! - config: org connection and board presentation settings
//! - org: REST access to line items and the current user's profile
//! - commands: Tauri command handlers
//! - profile_watcher: pushes profile changes to the frontend

use std::sync::Arc;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

mod commands;
mod config;
mod org;
mod profile_watcher;

use config::{OrgConfig, CONFIG_FILE_NAME, ENV_RECORD_ID};
use org::{OrgApi, RestClient};

/// Application state shared across commands
pub struct AppState {
    pub org: Arc<dyn OrgApi>,
    pub config: OrgConfig,
}

/// Record id passed on the command line (first argument) or through the
/// environment
fn requested_record_id(args: &[String]) -> Option<String> {
    args.iter()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .cloned()
        .or_else(|| std::env::var(ENV_RECORD_ID).ok())
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

/// Open a board window for `record_id`, or focus the one already showing it
fn open_board_window(app: &AppHandle, record_id: Option<&str>) -> tauri::Result<()> {
    let record_id = record_id.and_then(|id| org::validate_record_id(id).ok());
    let label = match record_id {
        Some(id) => format!("board-{}", id),
        None => "board".to_string(),
    };

    if let Some(window) = app.get_webview_window(&label) {
        return window.set_focus();
    }

    let url = match record_id {
        Some(id) => format!("index.html?recordId={}", id),
        None => "index.html".to_string(),
    };
    log::info!("opening board window {} ({})", label, url);
    WebviewWindowBuilder::new(app, label, WebviewUrl::App(url.into()))
        .title("Line Item Board")
        .inner_size(1100.0, 640.0)
        .build()?;
    Ok(())
}

fn load_config(app: &AppHandle) -> OrgConfig {
    let path = match app.path().app_config_dir() {
        Ok(dir) => dir.join(CONFIG_FILE_NAME),
        Err(e) => {
            log::error!("no app config dir: {}", e);
            return OrgConfig::default().with_overrides(|key| std::env::var(key).ok());
        }
    };
    match OrgConfig::load_with_env(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            OrgConfig::default().with_overrides(|key| std::env::var(key).ok())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, args, _cwd| {
                let record_id = requested_record_id(&args);
                if let Err(e) = open_board_window(app, record_id.as_deref()) {
                    log::error!("failed to open board window: {}", e);
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            if let Err(e) = rolling_logger::init_logger(app_handle.path().app_log_dir()?, "LineItemBoard") {
                eprintln!("failed to init rolling logger: {:?}", e);
            }

            let config = load_config(&app_handle);
            if !config.is_connected() {
                log::warn!("org connection not configured; remote commands will fail");
            }

            let org: Arc<dyn OrgApi> = Arc::new(RestClient::new(config.clone())?);
            let poll_every = config.profile_poll_interval();
            app.manage(AppState {
                org: org.clone(),
                config,
            });

            profile_watcher::spawn(app_handle.clone(), org, poll_every);

            let args: Vec<String> = std::env::args().collect();
            open_board_window(&app_handle, requested_record_id(&args).as_deref())?;

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_opportunity_line_items,
            commands::delete_opportunity_line_item,
            commands::get_current_user_profile,
            commands::open_record,
            commands::get_board_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requested_record_id_from_args() {
        assert_eq!(
            requested_record_id(&args(&["line-item-board", "--verbose", "006000000000001AAA"])),
            Some("006000000000001AAA".to_string())
        );
    }
}
