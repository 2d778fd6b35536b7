use super::common::{CreatedAtFilter, InFilter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountNumberStatus {
    Active,
    Disabled,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumber {
    pub id: String,
    pub account_id: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub name: Option<String>,
    pub status: Option<AccountNumberStatus>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccountNumberParams {
    pub account_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAccountNumberParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountNumberStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAccountNumbersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub status: Option<InFilter<AccountNumberStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListAccountNumbersParams);
