//! Navigation Commands

use line_item_board_core::GatewayError;
use serde::Serialize;

use super::call;

#[derive(Serialize)]
struct RecordIdArgs<'a> {
    #[serde(rename = "recordId")]
    record_id: &'a str,
}

/// Open an org record in the system browser
pub async fn open_record(record_id: &str) -> Result<(), GatewayError> {
    call("open_record", &RecordIdArgs { record_id }).await
}
