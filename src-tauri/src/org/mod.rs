//! Org Layer
//!
//! Access to the org's REST API: the line item endpoints and the current
//! user's profile.

mod client;
mod error;
mod query;

pub use client::RestClient;
pub use error::{RemoteError, RemoteResult};
pub use query::validate_record_id;

use async_trait::async_trait;
use line_item_board_core::{LineItemRecord, ProfileRecord};

/// Remote operations behind the board's Tauri commands
#[async_trait]
pub trait OrgApi: Send + Sync {
    /// Line items of one opportunity, in query order
    async fn line_items(&self, opportunity_id: &str) -> RemoteResult<Vec<LineItemRecord>>;

    async fn delete_line_item(&self, line_item_id: &str) -> RemoteResult<()>;

    /// Profile of the configured user
    async fn current_profile(&self) -> RemoteResult<ProfileRecord>;
}
