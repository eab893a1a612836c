//! Board View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! pushes every state change through `apply_state`.

use leptos::prelude::*;
use line_item_board_core::{BoardConfig, BoardState, ColumnDescriptor, ErrorBanner, ViewRow};
use reactive_stores::Store;

/// Render-ready copy of the board state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardView {
    /// Rows of the last successful load
    pub rows: Vec<ViewRow>,
    /// Columns visible to the current profile
    pub columns: Vec<ColumnDescriptor>,
    pub banner: ErrorBanner,
    /// Delete confirmation modal
    pub modal_open: bool,
    /// Confirmed delete still awaiting the endpoint
    pub deleting: bool,
    pub loading: bool,
}

pub type BoardStore = Store<BoardView>;

/// Copy a controller snapshot into the store
pub fn apply_state(store: &BoardStore, state: &BoardState, config: &BoardConfig) {
    *store.rows().write() = state.rows.clone();
    *store.columns().write() = state.columns(config);
    *store.banner().write() = state.banner.clone();
    *store.modal_open().write() = state.deletion.is_modal_open();
    *store.deleting().write() = state.deletion.is_in_flight();
    *store.loading().write() = state.loading;
}
