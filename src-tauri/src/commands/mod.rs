//! Commands Layer
//!
//! Tauri command handlers that bridge the board frontend to the org.

mod config_cmd;
mod line_item_cmd;
mod navigation_cmd;
mod profile_cmd;

pub use config_cmd::*;
pub use line_item_cmd::*;
pub use navigation_cmd::*;
pub use profile_cmd::*;
