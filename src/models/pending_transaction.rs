use super::common::{CreatedAtFilter, Currency, InFilter, RouteType, category_union};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingTransactionStatus {
    Pending,
    Complete,
    #[serde(other)]
    Unknown,
}

/// Funds that are held but not yet moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub id: String,
    pub account_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub status: Option<PendingTransactionStatus>,
    pub route_id: Option<String>,
    pub route_type: Option<RouteType>,
    pub source: Option<PendingTransactionSource>,
    pub created_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

category_union! {
    pub enum PendingTransactionSource {
        AccountTransferInstruction(AccountTransferInstruction) = "account_transfer_instruction",
        AchTransferInstruction(AchTransferInstruction) = "ach_transfer_instruction",
        CardAuthorization(CardAuthorization) = "card_authorization",
        CheckTransferInstruction(CheckTransferInstruction) = "check_transfer_instruction",
        InboundFundsHold(InboundFundsHold) = "inbound_funds_hold",
        WireTransferInstruction(WireTransferInstruction) = "wire_transfer_instruction",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransferInstruction {
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferInstruction {
    pub amount: Option<i64>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardNetwork {
    Visa,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardDirection {
    Settlement,
    Refund,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAuthorization {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub card_payment_id: Option<String>,
    pub direction: Option<CardDirection>,
    pub digital_wallet_token_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: Option<String>,
    pub merchant_descriptor: Option<String>,
    pub network: Option<CardNetwork>,
    pub pending_transaction_id: Option<String>,
    pub physical_card_id: Option<String>,
    pub presentment_amount: Option<i64>,
    pub presentment_currency: Option<String>,
    pub real_time_decision_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTransferInstruction {
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldStatus {
    Held,
    Complete,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundFundsHold {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub automatically_releases_at: Option<DateTime<Utc>>,
    pub held_transaction_id: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub released_at: Option<DateTime<Utc>>,
    pub status: Option<HoldStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTransferInstruction {
    pub account_number: Option<String>,
    pub amount: Option<i64>,
    pub message_to_recipient: Option<String>,
    pub routing_number: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPendingTransactionsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub route_id: Option<String>,
    pub category: Option<InFilter<String>>,
    pub status: Option<InFilter<PendingTransactionStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListPendingTransactionsParams);
