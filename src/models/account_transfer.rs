use super::common::{Approval, Cancellation, CreatedAtFilter, Currency};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountTransferStatus {
    PendingApproval,
    Canceled,
    Complete,
    #[serde(other)]
    Unknown,
}

/// A book transfer between two Increase accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransfer {
    pub id: String,
    pub account_id: Option<String>,
    pub destination_account_id: Option<String>,
    pub destination_transaction_id: Option<String>,
    pub transaction_id: Option<String>,
    pub pending_transaction_id: Option<String>,
    pub amount: Option<i64>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
    pub status: Option<AccountTransferStatus>,
    pub approval: Option<Approval>,
    pub cancellation: Option<Cancellation>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccountTransferParams {
    pub account_id: String,
    pub destination_account_id: String,
    pub amount: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAccountTransfersParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListAccountTransfersParams);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_pending_approval_transfer() {
        let transfer: AccountTransfer = serde_json::from_value(json!({
            "account_id": "account_in71c4amph0vgo2qllky",
            "amount": 100,
            "approval": null,
            "cancellation": null,
            "created_at": "2020-01-31T23:59:59Z",
            "currency": "USD",
            "description": "Move money into savings",
            "destination_account_id": "account_uf16sut2ct5bevmq3eh",
            "destination_transaction_id": null,
            "id": "account_transfer_7k9qe1ysdgqztnt63l7n",
            "idempotency_key": null,
            "network": "account",
            "pending_transaction_id": null,
            "status": "pending_approval",
            "transaction_id": null,
            "type": "account_transfer"
        }))
        .expect("transfer should parse");
        assert_eq!(transfer.status, Some(AccountTransferStatus::PendingApproval));
        assert!(transfer.approval.is_none());
    }

    #[test]
    fn parses_approval() {
        let approval: Approval = serde_json::from_value(json!({
            "approved_at": "2020-01-31T23:59:59Z",
            "approved_by": null
        }))
        .expect("approval should parse");
        assert!(approval.approved_by.is_none());
    }

    #[test]
    fn sparse_transfer_decodes() {
        let transfer: AccountTransfer = serde_json::from_value(json!({
            "id": "account_transfer_7k9qe1ysdgqztnt63l7n",
            "status": "reversed",
            "description": null
        }))
        .expect("transfer should parse");
        assert_eq!(transfer.status, Some(AccountTransferStatus::Unknown));
        assert!(transfer.description.is_none());
        assert!(transfer.destination_account_id.is_none());
        assert!(transfer.amount.is_none());
    }
}
