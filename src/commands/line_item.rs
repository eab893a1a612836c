//! Line Item Commands
//!
//! Frontend bindings for the opportunity line item endpoints.

use line_item_board_core::{GatewayError, LineItemRecord};
use serde::Serialize;

use super::call;

#[derive(Serialize)]
struct OpportunityIdArgs<'a> {
    #[serde(rename = "opportunityId")]
    opportunity_id: &'a str,
}

#[derive(Serialize)]
struct LineItemIdArgs<'a> {
    #[serde(rename = "lineItemId")]
    line_item_id: &'a str,
}

pub async fn get_opportunity_line_items(opportunity_id: &str) -> Result<Vec<LineItemRecord>, GatewayError> {
    call("get_opportunity_line_items", &OpportunityIdArgs { opportunity_id }).await
}

pub async fn delete_opportunity_line_item(line_item_id: &str) -> Result<(), GatewayError> {
    call("delete_opportunity_line_item", &LineItemIdArgs { line_item_id }).await
}
