use super::common::{Approval, Cancellation, CreatedAtFilter, Currency, InFilter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchTransferStatus {
    PendingApproval,
    PendingReviewing,
    PendingSubmission,
    Submitted,
    Canceled,
    Rejected,
    Returned,
    RequiresAttention,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardEntryClassCode {
    CorporateCreditOrDebit,
    CorporateTradeExchange,
    PrearrangedPaymentsAndDeposit,
    InternetInitiated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchSubmission {
    pub trace_number: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub expected_funds_settlement_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchAcknowledgement {
    pub acknowledged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchReturn {
    pub created_at: Option<DateTime<Utc>>,
    pub raw_return_reason_code: Option<String>,
    pub return_reason_code: Option<AchReturnReason>,
    pub transaction_id: Option<String>,
    pub transfer_id: Option<String>,
}

/// NACHA return reasons accepted by the return simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchReturnReason {
    InsufficientFund,
    NoAccount,
    AccountClosed,
    InvalidAccountNumberStructure,
    AccountFrozenEntryReturnedPerOfacInstruction,
    CreditEntryRefusedByReceiver,
    UnauthorizedDebitToConsumerAccountUsingCorporateSecCode,
    CorporateCustomerAdvisedNotAuthorized,
    PaymentStopped,
    NonTransactionAccount,
    UncollectedFunds,
    RoutingNumberCheckDigitError,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransfer {
    pub id: String,
    pub account_id: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub external_account_id: Option<String>,
    /// Positive to credit the counterparty, negative to debit them.
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub statement_descriptor: Option<String>,
    pub company_name: Option<String>,
    pub individual_name: Option<String>,
    pub standard_entry_class_code: Option<StandardEntryClassCode>,
    pub status: Option<AchTransferStatus>,
    pub approval: Option<Approval>,
    pub cancellation: Option<Cancellation>,
    pub acknowledgement: Option<AchAcknowledgement>,
    pub submission: Option<AchSubmission>,
    #[serde(rename = "return")]
    pub return_details: Option<AchReturn>,
    pub transaction_id: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAchTransferParams {
    pub account_id: String,
    pub amount: i64,
    pub statement_descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Alternative to `account_number` and `routing_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_entry_class_code: Option<StandardEntryClassCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAchTransfersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub external_account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub status: Option<InFilter<AchTransferStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnAchTransferParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AchReturnReason>,
}

crate::pagination::paginated!(ListAchTransfersParams);
