//! One service per API resource. Services borrow the [`Client`](crate::Client)
//! and are created through its accessors.

mod account_numbers;
mod account_transfers;
mod accounts;
mod ach_transfers;
mod cards;
mod check_transfers;
mod simulations;
mod transactions;
mod wire_transfers;

pub use account_numbers::AccountNumbers;
pub use account_transfers::AccountTransfers;
pub use accounts::Accounts;
pub use ach_transfers::AchTransfers;
pub use cards::Cards;
pub use check_transfers::CheckTransfers;
pub use simulations::{
    AccountTransferSimulations, AchTransferSimulations, CardAuthorizationSimulations,
    CardRefundSimulations, CardSettlementSimulations, CheckTransferSimulations,
    InterestPaymentSimulations, Simulations, WireTransferSimulations,
};
pub use transactions::{DeclinedTransactions, PendingTransactions, Transactions};
pub use wire_transfers::WireTransfers;
