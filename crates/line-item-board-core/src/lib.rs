//! Line Item Board Core
//!
//! Platform-free view-model behind the opportunity line item board:
//! - model: source records, view rows and the overstock banner
//! - profile: current-user profile resolution and privilege checks
//! - columns: declarative column/action descriptors
//! - board: the controller owning board state and the delete confirmation flow
//!
//! Remote calls, notifications and navigation are reached through the traits in
//! `gateway`, so the same controller runs in the WASM frontend and in native tests.

mod board;
mod columns;
mod config;
mod error;
mod gateway;
mod lifetime;
mod model;
mod profile;

#[cfg(test)]
mod tests;

pub use board::{BoardController, BoardServices, BoardState, DeletionIntent};
pub use columns::{columns_for, CellKind, ColumnDescriptor, RowAction, RowField};
pub use config::{BoardConfig, ColumnLabels, Messages, ProfileRules, RowStyles};
pub use error::{BoardError, GatewayError};
pub use gateway::{LineItemGateway, Navigator, Notifier, ProfileSource, ProfileSubscription, Severity};
pub use lifetime::Lifetime;
pub use model::{build_rows, CellValue, ErrorBanner, LineItemRecord, ProductSummary, ViewRow};
pub use profile::{FieldValue, ProfileRecord, UserProfile, SALES_PROFILE, SYSTEM_ADMINISTRATOR};
