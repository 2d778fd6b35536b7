use super::common::{Approval, Cancellation, CreatedAtFilter, Currency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireTransferStatus {
    PendingApproval,
    PendingReviewing,
    PendingCreating,
    Submitted,
    Complete,
    Canceled,
    Rejected,
    Reversed,
    RequiresAttention,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSubmission {
    pub input_message_accountability_data: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTransfer {
    pub id: String,
    pub account_id: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub external_account_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub message_to_recipient: Option<String>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_address_line1: Option<String>,
    pub beneficiary_address_line2: Option<String>,
    pub beneficiary_address_line3: Option<String>,
    pub status: Option<WireTransferStatus>,
    pub approval: Option<Approval>,
    pub cancellation: Option<Cancellation>,
    pub submission: Option<WireSubmission>,
    pub transaction_id: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWireTransferParams {
    pub account_id: String,
    pub amount: i64,
    pub beneficiary_name: String,
    pub message_to_recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListWireTransfersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub external_account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListWireTransfersParams);
