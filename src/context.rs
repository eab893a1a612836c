//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use line_item_board_core::{Notifier, Severity};

use crate::models::Toast;

const TOAST_TTL: Duration = Duration::from_secs(5);

/// Toast stack provided to the whole app; doubles as the board's notifier
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Visible toasts, oldest first
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, title: &str, message: &str, severity: Severity) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                severity,
            })
        });

        let ctx = *self;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_TTL).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.push(title, message, severity);
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
