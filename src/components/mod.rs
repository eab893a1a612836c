//! UI Components
//!
//! Leptos components of the line item board.

mod delete_confirm_modal;
mod line_item_board;
mod line_item_table;
mod toast_stack;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use line_item_board::LineItemBoard;
pub use line_item_table::LineItemTable;
pub use toast_stack::ToastStack;
