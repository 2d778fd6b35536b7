//! Request and result types for the sandbox simulation endpoints.

use super::declined_transaction::DeclinedTransaction;
use super::pending_transaction::PendingTransaction;
use serde::{Deserialize, Serialize};

/// Result of a simulated card authorization. At most one of the two
/// transactions is present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawAuthorizationResult")]
pub enum CardAuthorizationSimulation {
    Approved(PendingTransaction),
    Declined(DeclinedTransaction),
    /// The simulation produced neither a pending nor a declined transaction.
    NoTransaction,
}

impl CardAuthorizationSimulation {
    pub fn pending_transaction(&self) -> Option<&PendingTransaction> {
        match self {
            CardAuthorizationSimulation::Approved(pending) => Some(pending),
            _ => None,
        }
    }

    pub fn declined_transaction(&self) -> Option<&DeclinedTransaction> {
        match self {
            CardAuthorizationSimulation::Declined(declined) => Some(declined),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawAuthorizationResult {
    pending_transaction: Option<PendingTransaction>,
    declined_transaction: Option<DeclinedTransaction>,
}

impl TryFrom<RawAuthorizationResult> for CardAuthorizationSimulation {
    type Error = String;

    fn try_from(raw: RawAuthorizationResult) -> Result<Self, Self::Error> {
        match (raw.pending_transaction, raw.declined_transaction) {
            (Some(pending), None) => Ok(CardAuthorizationSimulation::Approved(pending)),
            (None, Some(declined)) => Ok(CardAuthorizationSimulation::Declined(declined)),
            (None, None) => Ok(CardAuthorizationSimulation::NoTransaction),
            (Some(_), Some(_)) => {
                Err("authorization result has both a pending and a declined transaction".into())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulateCardAuthorizationParams {
    /// Positive amount in the minor unit.
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_wallet_token_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_acceptor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_category_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_card_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulateCardSettlementParams {
    pub card_id: String,
    pub pending_transaction_id: String,
    /// Defaults to the authorized amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulateCardRefundParams {
    /// The settled card transaction to refund.
    pub transaction_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulateInterestPaymentParams {
    pub account_id: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<chrono::DateTime<chrono::Utc>>,
}
