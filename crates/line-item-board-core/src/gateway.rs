//! Collaborator Traits
//!
//! The board never talks to the org, the toast host or the browser directly.
//! Futures are `?Send`: the controller lives on the single UI thread.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::model::LineItemRecord;
use crate::profile::ProfileRecord;

/// Fetch and delete endpoints for opportunity line items
#[async_trait(?Send)]
pub trait LineItemGateway {
    /// Line items of one opportunity, in display order
    async fn fetch_line_items(&self, opportunity_id: &str) -> Result<Vec<LineItemRecord>, GatewayError>;

    async fn delete_line_item(&self, line_item_id: &str) -> Result<(), GatewayError>;
}

/// Current-user profile lookup
#[async_trait(?Send)]
pub trait ProfileSource {
    async fn current_profile(&self) -> Result<ProfileRecord, GatewayError>;
}

/// Live profile updates. Dropping the box without calling `unsubscribe`
/// leaves the listener registered.
pub trait ProfileSubscription {
    fn unsubscribe(self: Box<Self>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Fire-and-forget user notification
pub trait Notifier {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Opens a record in a new browsing context
pub trait Navigator {
    fn open_record(&self, record_id: &str);
}
