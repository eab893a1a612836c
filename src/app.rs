//! Line Item Board App
//!
//! Reads the host record id, loads the board configuration and mounts the
//! board next to the toast stack.

use leptos::prelude::*;
use leptos::task::spawn_local;
use line_item_board_core::BoardConfig;

use crate::commands;
use crate::components::{LineItemBoard, ToastStack};
use crate::context::ToastContext;

/// `recordId` from the window's query string
fn current_record_id() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params
        .get("recordId")
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(ToastContext::new());

    let record_id = current_record_id();
    let (config, set_config) = signal::<Option<BoardConfig>>(None);

    spawn_local(async move {
        let loaded = match commands::get_board_config().await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[App] using default board config: {}", e);
                BoardConfig::default()
            }
        };
        set_config.set(Some(loaded));
    });

    let board = move || match (record_id.clone(), config.get()) {
        (None, _) => view! {
            <div class="board-banner board-banner-error" role="alert">
                "Aucune opportunité indiquée (paramètre recordId manquant)."
            </div>
        }
        .into_any(),
        (Some(_), None) => view! { <div class="loading">"Chargement..."</div> }.into_any(),
        (Some(id), Some(config)) => view! { <LineItemBoard record_id=id config=config /> }.into_any(),
    };

    view! {
        <main class="board-app">
            {board}
            <ToastStack />
        </main>
    }
}
