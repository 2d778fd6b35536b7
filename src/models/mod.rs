//! Typed request and response bodies for the Increase API.

mod account;
mod account_number;
mod account_transfer;
mod ach_transfer;
mod card;
mod check_transfer;
mod common;
mod declined_transaction;
mod pending_transaction;
mod simulation;
mod transaction;
mod wire_transfer;

pub use account::*;
pub use account_number::*;
pub use account_transfer::*;
pub use ach_transfer::*;
pub use card::*;
pub use check_transfer::*;
pub use common::{Approval, Cancellation, CreatedAtFilter, Currency, InFilter, RouteType};
pub use declined_transaction::*;
pub use pending_transaction::*;
pub use simulation::*;
pub use transaction::*;
pub use wire_transfer::*;
