use super::common::{CreatedAtFilter, Currency, InFilter};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

/// The bank the account is held at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bank {
    BlueRidgeBank,
    CoreBank,
    FirstInternetBank,
    GrasshopperBank,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: Option<String>,
    pub status: Option<AccountStatus>,
    pub currency: Option<Currency>,
    pub bank: Option<Bank>,
    pub entity_id: Option<String>,
    pub informational_entity_id: Option<String>,
    pub program_id: Option<String>,
    /// Annual interest rate, e.g. `"0.055"`.
    pub interest_rate: Option<Decimal>,
    /// Interest accrued but not yet paid, in the account currency.
    pub interest_accrued: Option<Decimal>,
    pub interest_accrued_at: Option<chrono::NaiveDate>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn is_open(&self) -> bool {
        self.status == Some(AccountStatus::Open)
    }
}

/// Balances are in the minor unit of the account currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLookup {
    pub account_id: Option<String>,
    pub current_balance: Option<i64>,
    pub available_balance: Option<i64>,
}

impl BalanceLookup {
    /// Funds held by pending transactions. Missing balances count as zero.
    pub fn held_amount(&self) -> i64 {
        self.current_balance.unwrap_or_default() - self.available_balance.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAccountParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub informational_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
}

impl CreateAccountParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAccountsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub entity_id: Option<String>,
    pub informational_entity_id: Option<String>,
    pub program_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub status: Option<InFilter<AccountStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

/// Balance as of a point in time; the current balance when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceParams {
    pub at_time: Option<DateTime<Utc>>,
}

crate::pagination::paginated!(ListAccountsParams);
