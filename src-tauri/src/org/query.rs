//! Org Layer - Query Building
//!
//! Record id validation, SOQL text and error body mapping.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::error::{RemoteError, RemoteResult};

static RECORD_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{15}(?:[a-zA-Z0-9]{3})?$").expect("valid record id pattern"));

/// Accept 15 or 18 character record ids only; they are spliced into SOQL
/// and URL paths.
pub fn validate_record_id(id: &str) -> RemoteResult<&str> {
    if RECORD_ID.is_match(id) {
        Ok(id)
    } else {
        Err(RemoteError::InvalidId(id.to_string()))
    }
}

pub fn line_items_query(opportunity_id: &str) -> RemoteResult<String> {
    let id = validate_record_id(opportunity_id)?;
    Ok(format!(
        "SELECT Id, OpportunityId, Product2Id, Product2.Name, Product2.QuantityInStock__c, \
         UnitPrice, TotalPrice, Quantity \
         FROM OpportunityLineItem WHERE OpportunityId = '{}'",
        id
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    error_code: Option<String>,
}

/// First message of an org error body (`[{"message", "errorCode"}]`), or the
/// HTTP status when the body carries none
pub fn api_error_message(status: u16, body: &str) -> String {
    if let Ok(errors) = serde_json::from_str::<Vec<ApiErrorBody>>(body) {
        if let Some(first) = errors.into_iter().next() {
            if let Some(code) = &first.error_code {
                log::debug!("[Org] error code {}", code);
            }
            return first.message;
        }
    }
    if let Ok(single) = serde_json::from_str::<ApiErrorBody>(body) {
        return single.message;
    }
    format!("HTTP {}", status)
}
