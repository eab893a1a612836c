//! Org Layer - REST Client
//!
//! `OrgApi` over the org's REST API with bearer-token auth. Every request
//! carries the configured timeout.

use async_trait::async_trait;
use line_item_board_core::{LineItemRecord, ProfileRecord};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{RemoteError, RemoteResult};
use super::query::{api_error_message, line_items_query, validate_record_id};
use super::OrgApi;
use crate::config::OrgConfig;

/// One page of a SOQL query result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryPage<T> {
    records: Vec<T>,
    #[serde(default = "default_done")]
    done: bool,
    #[serde(default)]
    next_records_url: Option<String>,
}

fn default_done() -> bool {
    true
}

/// `GET sobjects/User/{id}?fields=Profile.Name`
#[derive(Debug, Deserialize)]
struct UserProfileFields {
    #[serde(rename = "Profile", default)]
    profile: Option<ProfileName>,
}

#[derive(Debug, Deserialize)]
struct ProfileName {
    #[serde(rename = "Name", default)]
    name: Option<String>,
}

impl From<UserProfileFields> for ProfileRecord {
    fn from(fields: UserProfileFields) -> Self {
        match fields.profile.and_then(|p| p.name) {
            Some(name) => ProfileRecord::from_display_name(name),
            None => ProfileRecord::default(),
        }
    }
}

pub struct RestClient {
    http: reqwest::Client,
    config: OrgConfig,
}

impl RestClient {
    pub fn new(config: OrgConfig) -> RemoteResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { http, config })
    }

    fn ensure_connected(&self) -> RemoteResult<()> {
        if self.config.is_connected() {
            Ok(())
        } else {
            Err(RemoteError::NotConfigured("instanceUrl / accessToken"))
        }
    }

    /// Send with auth; non-2xx responses become `RemoteError::Api`
    async fn send(&self, request: RequestBuilder) -> RemoteResult<Response> {
        self.ensure_connected()?;
        let response = request
            .bearer_auth(self.config.access_token.trim())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(status.as_u16(), &body);
        log::error!("[Org] {} -> {}", status, message);
        Err(RemoteError::Api(message))
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> RemoteResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl OrgApi for RestClient {
    async fn line_items(&self, opportunity_id: &str) -> RemoteResult<Vec<LineItemRecord>> {
        let soql = line_items_query(opportunity_id)?;
        let url = format!("{}/query", self.config.api_base());
        let mut page: QueryPage<LineItemRecord> =
            self.get_json(self.http.get(&url).query(&[("q", soql.as_str())])).await?;

        let mut records = std::mem::take(&mut page.records);
        while !page.done {
            let Some(next) = page.next_records_url.take() else {
                break;
            };
            let next_url = format!("{}{}", self.config.instance_root(), next);
            page = self.get_json(self.http.get(&next_url)).await?;
            records.append(&mut page.records);
        }

        log::info!("[Org] {} line items for {}", records.len(), opportunity_id);
        Ok(records)
    }

    async fn delete_line_item(&self, line_item_id: &str) -> RemoteResult<()> {
        let id = validate_record_id(line_item_id)?;
        let url = format!("{}/sobjects/OpportunityLineItem/{}", self.config.api_base(), id);
        self.send(self.http.delete(&url)).await?;
        log::info!("[Org] deleted line item {}", id);
        Ok(())
    }

    async fn current_profile(&self) -> RemoteResult<ProfileRecord> {
        if self.config.user_id.trim().is_empty() {
            return Err(RemoteError::NotConfigured("userId"));
        }
        let id = validate_record_id(self.config.user_id.trim())?;
        let url = format!("{}/sobjects/User/{}", self.config.api_base(), id);
        let fields: UserProfileFields = self
            .get_json(self.http.get(&url).query(&[("fields", "Profile.Name")]))
            .await?;
        Ok(fields.into())
    }
}
