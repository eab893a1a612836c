//! Toast Stack Component
//!
//! Renders notifications pushed through `ToastContext`.

use leptos::prelude::*;

use crate::context::use_toasts;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() role="status">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title.clone()}</strong>
                                <span class="toast-message">{toast.message.clone()}</span>
                            </div>
                            <button class="toast-close" title="Fermer" on:click=move |_| ctx.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
