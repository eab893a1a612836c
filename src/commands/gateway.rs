//! Board Collaborators
//!
//! Tauri-backed implementations of the board's gateway traits.

use async_trait::async_trait;
use leptos::task::spawn_local;
use line_item_board_core::{
    GatewayError, LineItemGateway, LineItemRecord, Navigator, ProfileRecord, ProfileSource,
};

/// Line item endpoints reached over Tauri IPC
pub struct TauriLineItems;

#[async_trait(?Send)]
impl LineItemGateway for TauriLineItems {
    async fn fetch_line_items(&self, opportunity_id: &str) -> Result<Vec<LineItemRecord>, GatewayError> {
        super::get_opportunity_line_items(opportunity_id).await
    }

    async fn delete_line_item(&self, line_item_id: &str) -> Result<(), GatewayError> {
        super::delete_opportunity_line_item(line_item_id).await
    }
}

pub struct TauriProfiles;

#[async_trait(?Send)]
impl ProfileSource for TauriProfiles {
    async fn current_profile(&self) -> Result<ProfileRecord, GatewayError> {
        super::get_current_user_profile().await
    }
}

/// Opens records in the system browser; failures are only logged
pub struct TauriNavigator;

impl Navigator for TauriNavigator {
    fn open_record(&self, record_id: &str) {
        let record_id = record_id.to_string();
        spawn_local(async move {
            if let Err(e) = super::open_record(&record_id).await {
                log::error!("[Navigation] opening {} failed: {}", record_id, e);
            }
        });
    }
}
