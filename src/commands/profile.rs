//! Profile Commands
//!
//! Current-user profile lookup and the live profile subscription.

use js_sys::Function;
use line_item_board_core::{GatewayError, ProfileRecord, ProfileSubscription};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{call_no_args, listen};

/// Event emitted by the host when the signed-in user's profile changes
pub const PROFILE_CHANGED_EVENT: &str = "current-user-profile-changed";

#[derive(Deserialize)]
struct EventEnvelope<T> {
    payload: T,
}

/// Profile carried by a `current-user-profile-changed` event
fn decode_profile_event(event: serde_json::Value) -> Result<ProfileRecord, GatewayError> {
    serde_json::from_value::<EventEnvelope<ProfileRecord>>(event)
        .map(|envelope| envelope.payload)
        .map_err(|e| GatewayError::new(format!("malformed profile event: {}", e)))
}

pub async fn get_current_user_profile() -> Result<ProfileRecord, GatewayError> {
    call_no_args("get_current_user_profile").await
}

/// Registered listener for profile changes
pub struct ProfileListener {
    unlisten: Function,
    // Must outlive the registration
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl ProfileSubscription for ProfileListener {
    fn unsubscribe(self: Box<Self>) {
        if let Err(e) = self.unlisten.call0(&JsValue::NULL) {
            log::warn!("[Profile] unlisten failed: {:?}", e);
        }
    }
}

/// Call `on_change` with every profile pushed by the host
pub async fn listen_profile_changes(
    mut on_change: impl FnMut(Result<ProfileRecord, GatewayError>) + 'static,
) -> Result<ProfileListener, GatewayError> {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let update = serde_wasm_bindgen::from_value::<serde_json::Value>(event)
            .map_err(|e| GatewayError::new(e.to_string()))
            .and_then(decode_profile_event);
        on_change(update);
    });

    let unlisten = listen(PROFILE_CHANGED_EVENT, &handler)
        .await
        .map_err(super::rejection)?
        .dyn_into::<Function>()
        .map_err(|_| GatewayError::new("listen did not return an unlisten function"))?;

    Ok(ProfileListener {
        unlisten,
        _handler: handler,
    })
}
