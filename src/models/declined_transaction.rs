use super::common::{CreatedAtFilter, Currency, InFilter, RouteType, category_union};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An attempted movement of funds that Increase rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclinedTransaction {
    pub id: String,
    pub account_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub route_id: Option<String>,
    pub route_type: Option<RouteType>,
    pub source: Option<DeclinedTransactionSource>,
    pub created_at: Option<DateTime<Utc>>,
}

category_union! {
    pub enum DeclinedTransactionSource {
        AchDecline(AchDecline) = "ach_decline",
        CardDecline(CardDecline) = "card_decline",
        CheckDecline(CheckDecline) = "check_decline",
        WireDecline(WireDecline) = "wire_decline",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchDecline {
    pub id: String,
    pub amount: Option<i64>,
    pub inbound_ach_transfer_id: Option<String>,
    pub originator_company_name: Option<String>,
    pub originator_company_id: Option<String>,
    /// e.g. `insufficient_funds`, `ach_route_disabled`.
    pub reason: Option<String>,
    pub receiver_name: Option<String>,
    pub trace_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDecline {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub card_payment_id: Option<String>,
    pub declined_transaction_id: Option<String>,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: Option<String>,
    pub merchant_descriptor: Option<String>,
    pub physical_card_id: Option<String>,
    pub presentment_amount: Option<i64>,
    pub presentment_currency: Option<String>,
    /// e.g. `insufficient_funds`, `card_not_active`.
    pub reason: Option<String>,
    pub real_time_decision_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDecline {
    pub amount: Option<i64>,
    pub auxiliary_on_us: Option<String>,
    pub check_transfer_id: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDecline {
    pub inbound_wire_transfer_id: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListDeclinedTransactionsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub route_id: Option<String>,
    pub category: Option<InFilter<String>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListDeclinedTransactionsParams);
