//! Config Commands

use line_item_board_core::{BoardConfig, GatewayError};

use super::call_no_args;

/// Labels, messages and styles configured on the host
pub async fn get_board_config() -> Result<BoardConfig, GatewayError> {
    call_no_args("get_board_config").await
}
