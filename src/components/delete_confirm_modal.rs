//! Delete Confirm Modal Component
//!
//! Confirmation dialog guarding line item deletion.

use leptos::prelude::*;
use line_item_board_core::Messages;

/// Modal delete confirmation
///
/// # Arguments
/// * `open` - Whether the modal is shown
/// * `busy` - Confirmed delete in flight; both buttons are disabled
/// * `on_confirm` / `on_cancel` - Button callbacks
#[component]
pub fn DeleteConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    messages: Messages,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let Messages {
        confirm_title,
        confirm_body,
        confirm,
        cancel,
        ..
    } = messages;

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop"></div>
            <section class="modal" role="dialog" aria-modal="true">
                <header class="modal-header">
                    <h2>{confirm_title.clone()}</h2>
                </header>
                <div class="modal-content">
                    <p>{confirm_body.clone()}</p>
                </div>
                <footer class="modal-footer">
                    <button
                        class="btn btn-neutral"
                        disabled=move || busy.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_cancel.run(());
                        }
                    >
                        {cancel.clone()}
                    </button>
                    <button
                        class="btn btn-destructive"
                        disabled=move || busy.get()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_confirm.run(());
                        }
                    >
                        {confirm.clone()}
                    </button>
                </footer>
            </section>
        </Show>
    }
}
