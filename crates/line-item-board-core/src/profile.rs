//! Current-User Profile
//!
//! Resolves the profile display name and answers the two privilege questions
//! the board asks of it.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::ProfileRules;
use crate::error::GatewayError;

pub const SYSTEM_ADMINISTRATOR: &str = "System Administrator";
pub const SALES_PROFILE: &str = "Custom: Sales Profile";

/// Profile lookup payload: `{ "profile": { "displayValue": "..." } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub profile: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[serde(default)]
    pub display_value: Option<String>,
}

impl ProfileRecord {
    pub fn from_display_name(name: impl Into<String>) -> Self {
        Self {
            profile: Some(FieldValue {
                display_value: Some(name.into()),
            }),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref()?.display_value.as_deref()
    }
}

/// Resolved profile of the signed-in user, with its privileges decided
/// against the configured `ProfileRules`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    display_name: Option<String>,
    admin_or_commercial: bool,
    view_product: bool,
}

impl UserProfile {
    /// Build from a lookup result. Failures and missing fields degrade to an
    /// unprivileged profile and are only logged.
    pub fn resolve(result: Result<ProfileRecord, GatewayError>, rules: &ProfileRules) -> Self {
        match result {
            Ok(record) => match record.display_name() {
                Some(name) => Self::named(name, rules),
                None => {
                    warn!("[Profile] lookup returned no profile name");
                    Self::default()
                }
            },
            Err(e) => {
                warn!("[Profile] lookup failed: {}", e);
                Self::default()
            }
        }
    }

    pub fn named(name: impl Into<String>, rules: &ProfileRules) -> Self {
        let name = name.into();
        Self {
            admin_or_commercial: rules.is_admin_or_commercial(&name),
            view_product: rules.is_administrator(&name),
            display_name: Some(name),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn is_admin_or_commercial(&self) -> bool {
        self.admin_or_commercial
    }

    /// Gate for the product navigation column and action.
    ///
    /// Narrower than `is_admin_or_commercial`: only the administrator profile
    /// qualifies.
    pub fn can_view_product(&self) -> bool {
        self.view_product
    }
}
