//! Line Item Board Component
//!
//! Mounts a `BoardController` for one opportunity and renders its state:
//! overstock banner, line item table and the delete confirmation modal.

use std::rc::{Rc, Weak};

use leptos::prelude::*;
use leptos::task::spawn_local;
use line_item_board_core::{BoardConfig, BoardController, BoardServices, RowAction};
use reactive_stores::Store;

use crate::commands::{self, TauriLineItems, TauriNavigator, TauriProfiles};
use crate::components::{DeleteConfirmModal, LineItemTable};
use crate::context::use_toasts;
use crate::store::{apply_state, BoardView, BoardViewStoreFields};

/// Line items of one opportunity
#[component]
pub fn LineItemBoard(
    #[prop(into)] record_id: String,
    config: BoardConfig,
) -> impl IntoView {
    let toasts = use_toasts();
    let store = Store::new(BoardView::default());

    let services = BoardServices {
        line_items: Rc::new(TauriLineItems),
        profiles: Rc::new(TauriProfiles),
        notifier: Rc::new(toasts),
        navigator: Rc::new(TauriNavigator),
    };
    let controller = Rc::new(BoardController::new(record_id, services, config.clone()));
    let render_config = config.clone();
    controller.on_change(move |state| apply_state(&store, state, &render_config));

    // Subscribe to profile changes, then resolve the profile and load lines
    let mounting = controller.clone();
    spawn_local(async move {
        let weak: Weak<BoardController> = Rc::downgrade(&mounting);
        match commands::listen_profile_changes(move |update| {
            if let Some(board) = weak.upgrade() {
                board.apply_profile(update);
            }
        })
        .await
        {
            Ok(listener) => mounting.attach_subscription(Box::new(listener)),
            Err(e) => log::warn!("[Board] profile subscription unavailable: {}", e),
        }
        mounting.mount().await;
    });

    let board = StoredValue::new_local(controller);
    on_cleanup(move || {
        board.try_with_value(|b| b.teardown());
    });

    let on_action = Callback::new(move |(action, row_id): (RowAction, String)| {
        board.with_value(|b| {
            if let Err(e) = b.handle_row_action(action, &row_id) {
                log::warn!("[Board] {} on {} rejected: {}", action, row_id, e);
            }
        });
    });
    let on_confirm = Callback::new(move |_: ()| {
        if let Some(b) = board.try_with_value(Rc::clone) {
            spawn_local(async move {
                // Failures are notified by the controller
                let _ = b.confirm_delete().await;
            });
        }
    });
    let on_cancel = Callback::new(move |_: ()| {
        board.with_value(|b| {
            if let Err(e) = b.cancel_delete() {
                log::warn!("[Board] cancel rejected: {}", e);
            }
        });
    });

    let empty_message = config.messages.empty.clone();

    view! {
        <article class="line-item-board">
            <Show when=move || store.banner().get().has_error>
                <div class="board-banner board-banner-warning" role="alert">
                    {move || store.banner().get().message}
                </div>
            </Show>

            <Show when=move || store.loading().get() && store.rows().get().is_empty()>
                <div class="loading">"Chargement..."</div>
            </Show>

            <Show
                when=move || !store.rows().get().is_empty()
                fallback=move || {
                    let empty = empty_message.clone();
                    view! {
                        <Show when=move || !store.loading().get()>
                            <p class="board-empty">{empty.clone()}</p>
                        </Show>
                    }
                }
            >
                <LineItemTable
                    columns=Signal::derive(move || store.columns().get())
                    rows=Signal::derive(move || store.rows().get())
                    on_action=on_action
                />
            </Show>

            <DeleteConfirmModal
                open=Signal::derive(move || store.modal_open().get())
                busy=Signal::derive(move || store.deleting().get())
                messages=config.messages.clone()
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </article>
    }
}
