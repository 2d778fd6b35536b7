use super::common::{Approval, Cancellation, CreatedAtFilter, Currency, InFilter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckTransferStatus {
    PendingApproval,
    PendingSubmission,
    PendingMailing,
    Mailed,
    Deposited,
    Stopped,
    Rejected,
    Canceled,
    RequiresAttention,
    Returned,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMethod {
    PhysicalCheck,
    ThirdParty,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<MailingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_address: Option<MailingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckMailing {
    pub mailed_at: Option<DateTime<Utc>>,
    pub image_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopPaymentReason {
    MailDeliveryFailed,
    RejectedByIncrease,
    NotAuthorized,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPaymentRequest {
    pub reason: Option<StopPaymentReason>,
    pub requested_at: Option<DateTime<Utc>>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTransfer {
    pub id: String,
    pub account_id: Option<String>,
    pub source_account_number_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub check_number: Option<String>,
    pub fulfillment_method: Option<FulfillmentMethod>,
    pub physical_check: Option<PhysicalCheck>,
    pub status: Option<CheckTransferStatus>,
    pub approval: Option<Approval>,
    pub cancellation: Option<Cancellation>,
    pub mailing: Option<CheckMailing>,
    pub stop_payment_request: Option<StopPaymentRequest>,
    pub pending_transaction_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCheckTransferParams {
    pub account_id: String,
    pub source_account_number_id: String,
    pub amount: i64,
    pub fulfillment_method: FulfillmentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_check: Option<PhysicalCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopPaymentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<StopPaymentReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListCheckTransfersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub status: Option<InFilter<CheckTransferStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListCheckTransfersParams);
