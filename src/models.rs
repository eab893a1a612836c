//! Frontend Models
//!
//! Wire types come from `line_item_board_core`; this module holds the
//! frontend-only structures.

use line_item_board_core::Severity;

/// One notification shown in the toast stack
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.severity {
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
        }
    }
}
