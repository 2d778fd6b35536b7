//! Settled transactions and their `source` union.

use super::common::{CreatedAtFilter, Currency, InFilter, RouteType, category_union};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: Option<String>,
    /// Positive for credits, negative for debits, in the minor unit.
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub route_id: Option<String>,
    pub route_type: Option<RouteType>,
    pub source: Option<TransactionSource>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount.is_some_and(|amount| amount > 0)
    }
}

category_union! {
    /// What caused a [`Transaction`].
    pub enum TransactionSource {
        AccountTransferIntention(AccountTransferIntention) = "account_transfer_intention",
        AchTransferIntention(AchTransferIntention) = "ach_transfer_intention",
        AchTransferRejection(AchTransferRejection) = "ach_transfer_rejection",
        AchTransferReturn(AchTransferReturn) = "ach_transfer_return",
        CardRefund(CardRefund) = "card_refund",
        CardSettlement(CardSettlement) = "card_settlement",
        CheckDepositAcceptance(CheckDepositAcceptance) = "check_deposit_acceptance",
        FeePayment(FeePayment) = "fee_payment",
        InboundAchTransfer(InboundAchTransfer) = "inbound_ach_transfer",
        InboundWireTransfer(InboundWireTransfer) = "inbound_wire_transfer",
        InterestPayment(InterestPayment) = "interest_payment",
        WireTransferIntention(WireTransferIntention) = "wire_transfer_intention",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransferIntention {
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub destination_account_id: Option<String>,
    pub source_account_id: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferIntention {
    pub account_number: Option<String>,
    pub amount: Option<i64>,
    pub routing_number: Option<String>,
    pub statement_descriptor: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferRejection {
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchTransferReturn {
    pub created_at: Option<DateTime<Utc>>,
    pub raw_return_reason_code: Option<String>,
    /// NACHA return reason, e.g. `insufficient_fund`.
    pub return_reason_code: Option<String>,
    pub trace_number: Option<String>,
    pub transaction_id: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRefund {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub card_payment_id: Option<String>,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: Option<String>,
    pub merchant_name: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSettlement {
    pub id: String,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub card_authorization: Option<String>,
    pub card_payment_id: Option<String>,
    pub merchant_acceptor_id: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_country: Option<String>,
    pub merchant_name: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub presentment_amount: Option<i64>,
    pub presentment_currency: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDepositAcceptance {
    pub account_number: Option<String>,
    pub amount: Option<i64>,
    pub auxiliary_on_us: Option<String>,
    pub check_deposit_id: Option<String>,
    pub currency: Option<Currency>,
    pub routing_number: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePayment {
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub fee_period_start: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundAchTransfer {
    pub amount: Option<i64>,
    pub originator_company_descriptive_date: Option<String>,
    pub originator_company_discretionary_data: Option<String>,
    pub originator_company_entry_description: Option<String>,
    pub originator_company_id: Option<String>,
    pub originator_company_name: Option<String>,
    pub receiver_id_number: Option<String>,
    pub receiver_name: Option<String>,
    pub trace_number: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundWireTransfer {
    pub amount: Option<i64>,
    pub beneficiary_name: Option<String>,
    pub description: Option<String>,
    pub input_message_accountability_data: Option<String>,
    pub originator_name: Option<String>,
    pub originator_routing_number: Option<String>,
    pub originator_to_beneficiary_information: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestPayment {
    pub accrued_on_account_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTransferIntention {
    pub account_number: Option<String>,
    pub amount: Option<i64>,
    pub message_to_recipient: Option<String>,
    pub routing_number: Option<String>,
    pub transfer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTransactionsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub route_id: Option<String>,
    /// Source categories to include, e.g. `card_settlement`.
    pub category: Option<InFilter<String>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListTransactionsParams);
