//! Sandbox-only endpoints that drive objects through states which would
//! otherwise need a counterparty or the passage of time.

use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{
    AccountTransfer, AchTransfer, CardAuthorizationSimulation, CheckTransfer,
    ReturnAchTransferParams, SimulateCardAuthorizationParams, SimulateCardRefundParams,
    SimulateCardSettlementParams, SimulateInterestPaymentParams, Transaction, WireTransfer,
};
use crate::requester::Requester;
use log::info;

const ACCOUNT_TRANSFERS: &str = "/simulations/account_transfers";
const ACH_TRANSFERS: &str = "/simulations/ach_transfers";
const WIRE_TRANSFERS: &str = "/simulations/wire_transfers";
const CHECK_TRANSFERS: &str = "/simulations/check_transfers";
const CARD_AUTHORIZATIONS: &str = "/simulations/card_authorizations";
const CARD_SETTLEMENTS: &str = "/simulations/card_settlements";
const CARD_REFUNDS: &str = "/simulations/card_refunds";
const INTEREST_PAYMENTS: &str = "/simulations/interest_payments";

/// Groups the simulation services.
#[derive(Debug)]
pub struct Simulations<'a, R> {
    pub account_transfers: AccountTransferSimulations<'a, R>,
    pub ach_transfers: AchTransferSimulations<'a, R>,
    pub wire_transfers: WireTransferSimulations<'a, R>,
    pub check_transfers: CheckTransferSimulations<'a, R>,
    pub card_authorizations: CardAuthorizationSimulations<'a, R>,
    pub card_settlements: CardSettlementSimulations<'a, R>,
    pub card_refunds: CardRefundSimulations<'a, R>,
    pub interest_payments: InterestPaymentSimulations<'a, R>,
}

impl<'a, R: Requester> Simulations<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self {
            account_transfers: AccountTransferSimulations { client },
            ach_transfers: AchTransferSimulations { client },
            wire_transfers: WireTransferSimulations { client },
            check_transfers: CheckTransferSimulations { client },
            card_authorizations: CardAuthorizationSimulations { client },
            card_settlements: CardSettlementSimulations { client },
            card_refunds: CardRefundSimulations { client },
            interest_payments: InterestPaymentSimulations { client },
        }
    }
}

#[derive(Debug)]
pub struct AccountTransferSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> AccountTransferSimulations<'_, R> {
    /// Complete a transfer that is pending approval, as if approved in the
    /// dashboard.
    pub async fn complete(&self, transfer_id: &str) -> Result<AccountTransfer, IncreaseError> {
        let path = format!("{}/complete", resource_path(ACCOUNT_TRANSFERS, transfer_id)?);
        info!("Simulating completion of account transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}

#[derive(Debug)]
pub struct AchTransferSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> AchTransferSimulations<'_, R> {
    /// Simulate the Federal Reserve acknowledging a submitted transfer.
    pub async fn acknowledge(&self, transfer_id: &str) -> Result<AchTransfer, IncreaseError> {
        let path = format!("{}/acknowledge", resource_path(ACH_TRANSFERS, transfer_id)?);
        info!("Simulating acknowledgement of ACH transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    /// Submit a pending transfer to the network immediately.
    pub async fn submit(&self, transfer_id: &str) -> Result<AchTransfer, IncreaseError> {
        let path = format!("{}/submit", resource_path(ACH_TRANSFERS, transfer_id)?);
        info!("Simulating submission of ACH transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    /// Simulate the receiving bank returning a submitted transfer.
    pub async fn return_transfer(
        &self,
        transfer_id: &str,
        params: &ReturnAchTransferParams,
    ) -> Result<AchTransfer, IncreaseError> {
        let path = format!("{}/return", resource_path(ACH_TRANSFERS, transfer_id)?);
        info!("Simulating return of ACH transfer {}", transfer_id);
        self.client.post(path, params).await
    }
}

#[derive(Debug)]
pub struct WireTransferSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> WireTransferSimulations<'_, R> {
    pub async fn submit(&self, transfer_id: &str) -> Result<WireTransfer, IncreaseError> {
        let path = format!("{}/submit", resource_path(WIRE_TRANSFERS, transfer_id)?);
        info!("Simulating submission of wire transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}

#[derive(Debug)]
pub struct CheckTransferSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> CheckTransferSimulations<'_, R> {
    /// Simulate the check being printed and mailed.
    pub async fn mail(&self, transfer_id: &str) -> Result<CheckTransfer, IncreaseError> {
        let path = format!("{}/mail", resource_path(CHECK_TRANSFERS, transfer_id)?);
        info!("Simulating mailing of check transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}

#[derive(Debug)]
pub struct CardAuthorizationSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> CardAuthorizationSimulations<'_, R> {
    /// Simulate a merchant authorizing a card. The result holds a pending
    /// transaction when approved, a declined transaction when declined, or
    /// neither.
    pub async fn create(
        &self,
        params: &SimulateCardAuthorizationParams,
    ) -> Result<CardAuthorizationSimulation, IncreaseError> {
        if params.amount <= 0 {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        if params.card_id.is_none() && params.digital_wallet_token_id.is_none() {
            return Err(IncreaseError::InvalidParameter(
                "card_id or digital_wallet_token_id is required",
            ));
        }
        info!("Simulating card authorization of {}", params.amount);
        self.client
            .post(CARD_AUTHORIZATIONS.to_string(), params)
            .await
    }
}

#[derive(Debug)]
pub struct CardSettlementSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> CardSettlementSimulations<'_, R> {
    /// Settle a pending card authorization.
    pub async fn create(
        &self,
        params: &SimulateCardSettlementParams,
    ) -> Result<Transaction, IncreaseError> {
        if params.amount.is_some_and(|amount| amount <= 0) {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        info!(
            "Simulating settlement of pending transaction {}",
            params.pending_transaction_id
        );
        self.client.post(CARD_SETTLEMENTS.to_string(), params).await
    }
}

#[derive(Debug)]
pub struct CardRefundSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> CardRefundSimulations<'_, R> {
    pub async fn create(
        &self,
        params: &SimulateCardRefundParams,
    ) -> Result<Transaction, IncreaseError> {
        if params.transaction_id.trim().is_empty() {
            return Err(IncreaseError::InvalidParameter("transaction_id must not be empty"));
        }
        info!("Simulating refund of transaction {}", params.transaction_id);
        self.client.post(CARD_REFUNDS.to_string(), params).await
    }
}

#[derive(Debug)]
pub struct InterestPaymentSimulations<'a, R> {
    client: &'a Client<R>,
}

impl<R: Requester> InterestPaymentSimulations<'_, R> {
    pub async fn create(
        &self,
        params: &SimulateInterestPaymentParams,
    ) -> Result<Transaction, IncreaseError> {
        if params.amount <= 0 {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        info!(
            "Simulating interest payment of {} to account {}",
            params.amount, params.account_id
        );
        self.client
            .post(INTEREST_PAYMENTS.to_string(), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchReturnReason, TransactionSource};
    use crate::requester::Method;
    use crate::testing::MockRequester;
    use serde_json::{Value, json};

    fn pending_authorization() -> Value {
        json!({
            "account_id": "account_in71c4amph0vgo2qllky",
            "amount": -1000,
            "completed_at": null,
            "created_at": "2020-01-31T23:59:59Z",
            "currency": "USD",
            "description": "COFFEE SHOP",
            "id": "pending_transaction_k1sfetcau2qbvjbzgju4",
            "route_id": "card_oubs0hwk5rn6knuecxg2",
            "route_type": "card",
            "status": "pending",
            "source": {
                "category": "card_authorization",
                "card_authorization": {
                    "id": "card_authorization_6iqxap6ivd0fo5eu3i8x",
                    "amount": 1000,
                    "currency": "USD",
                    "card_payment_id": null,
                    "direction": "settlement",
                    "digital_wallet_token_id": null,
                    "expires_at": "2020-02-07T23:59:59Z",
                    "merchant_acceptor_id": null,
                    "merchant_category_code": null,
                    "merchant_city": null,
                    "merchant_country": null,
                    "merchant_descriptor": "COFFEE SHOP",
                    "network": "visa",
                    "pending_transaction_id": "pending_transaction_k1sfetcau2qbvjbzgju4",
                    "physical_card_id": null,
                    "presentment_amount": 1000,
                    "presentment_currency": "USD",
                    "real_time_decision_id": null
                }
            },
            "type": "pending_transaction"
        })
    }

    fn interest_transaction() -> Value {
        json!({
            "account_id": "account_in71c4amph0vgo2qllky",
            "amount": 1000,
            "created_at": "2020-01-31T23:59:59Z",
            "currency": "USD",
            "description": "Interest",
            "id": "transaction_uyrp7fld2ium70oa7oi",
            "route_id": null,
            "route_type": null,
            "source": {
                "category": "interest_payment",
                "interest_payment": {
                    "accrued_on_account_id": "account_in71c4amph0vgo2qllky",
                    "amount": 1000,
                    "currency": "USD",
                    "period_end": "2020-01-31T23:59:59Z",
                    "period_start": "2020-01-01T00:00:00Z"
                }
            },
            "type": "transaction"
        })
    }

    fn ach_transfer(status: &str) -> Value {
        json!({
            "account_id": "account_in71c4amph0vgo2qllky",
            "account_number": "987654321",
            "amount": 100,
            "created_at": "2020-01-31T23:59:59Z",
            "currency": "USD",
            "id": "ach_transfer_uoxatyh3lt5evrsdvo7q",
            "routing_number": "101050001",
            "statement_descriptor": "Payroll",
            "status": status,
            "type": "ach_transfer"
        })
    }

    #[tokio::test]
    async fn card_authorization_returns_pending_transaction() {
        let client = Client::with_requester(MockRequester::new().respond(json!({
            "declined_transaction": null,
            "pending_transaction": pending_authorization(),
            "type": "inbound_card_authorization_simulation_result"
        })));
        let params = SimulateCardAuthorizationParams {
            amount: 1000,
            card_id: Some("card_oubs0hwk5rn6knuecxg2".into()),
            merchant_descriptor: Some("COFFEE SHOP".into()),
            ..Default::default()
        };
        let result = client
            .simulations()
            .card_authorizations
            .create(&params)
            .await
            .expect("simulates");
        let pending = result.pending_transaction().expect("approved");
        assert_eq!(pending.amount, Some(-1000));
        assert!(result.declined_transaction().is_none());

        let call = client.requester().last_call();
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.path, "/simulations/card_authorizations");
        assert_eq!(
            call.body,
            Some(json!({
                "amount": 1000,
                "card_id": "card_oubs0hwk5rn6knuecxg2",
                "merchant_descriptor": "COFFEE SHOP"
            }))
        );
    }

    #[tokio::test]
    async fn card_authorization_without_transactions() {
        let client = Client::with_requester(MockRequester::new().respond(json!({
            "declined_transaction": null,
            "pending_transaction": null,
            "type": "inbound_card_authorization_simulation_result"
        })));
        let params = SimulateCardAuthorizationParams {
            amount: 1000,
            card_id: Some("card_oubs0hwk5rn6knuecxg2".into()),
            ..Default::default()
        };
        let result = client
            .simulations()
            .card_authorizations
            .create(&params)
            .await
            .expect("simulates");
        assert_eq!(result, CardAuthorizationSimulation::NoTransaction);
    }

    #[tokio::test]
    async fn card_authorization_needs_a_card() {
        let client = Client::with_requester(MockRequester::new());
        let params = SimulateCardAuthorizationParams {
            amount: 1000,
            ..Default::default()
        };
        let err = client
            .simulations()
            .card_authorizations
            .create(&params)
            .await
            .unwrap_err();
        assert!(matches!(err, IncreaseError::InvalidParameter(_)));
        assert!(client.requester().calls().is_empty());
    }

    #[tokio::test]
    async fn ach_lifecycle_paths() {
        let client = Client::with_requester(
            MockRequester::new()
                .respond(ach_transfer("submitted"))
                .respond(ach_transfer("submitted"))
                .respond(ach_transfer("returned")),
        );
        let ach = client.simulations().ach_transfers;
        ach.submit("ach_transfer_uoxatyh3lt5evrsdvo7q")
            .await
            .expect("submits");
        ach.acknowledge("ach_transfer_uoxatyh3lt5evrsdvo7q")
            .await
            .expect("acknowledges");
        let returned = ach
            .return_transfer(
                "ach_transfer_uoxatyh3lt5evrsdvo7q",
                &ReturnAchTransferParams {
                    reason: Some(AchReturnReason::NoAccount),
                },
            )
            .await
            .expect("returns");
        assert_eq!(returned.status, Some(crate::models::AchTransferStatus::Returned));

        let calls = client.requester().calls();
        let paths: Vec<&str> = calls.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "/simulations/ach_transfers/ach_transfer_uoxatyh3lt5evrsdvo7q/submit",
                "/simulations/ach_transfers/ach_transfer_uoxatyh3lt5evrsdvo7q/acknowledge",
                "/simulations/ach_transfers/ach_transfer_uoxatyh3lt5evrsdvo7q/return",
            ]
        );
        assert_eq!(calls[2].body, Some(json!({ "reason": "no_account" })));
    }

    #[tokio::test]
    async fn interest_payment_returns_transaction() {
        let client = Client::with_requester(MockRequester::new().respond(interest_transaction()));
        let params = SimulateInterestPaymentParams {
            account_id: "account_in71c4amph0vgo2qllky".into(),
            amount: 1000,
            ..Default::default()
        };
        let txn = client
            .simulations()
            .interest_payments
            .create(&params)
            .await
            .expect("pays");
        assert!(matches!(txn.source, Some(TransactionSource::InterestPayment(_))));
        assert_eq!(client.requester().last_call().path, "/simulations/interest_payments");
    }

    #[tokio::test]
    async fn card_settlement_and_refund_paths() {
        let client = Client::with_requester(
            MockRequester::new()
                .respond(interest_transaction())
                .respond(interest_transaction()),
        );
        let simulations = client.simulations();
        simulations
            .card_settlements
            .create(&SimulateCardSettlementParams {
                card_id: "card_oubs0hwk5rn6knuecxg2".into(),
                pending_transaction_id: "pending_transaction_k1sfetcau2qbvjbzgju4".into(),
                amount: None,
            })
            .await
            .expect("settles");
        simulations
            .card_refunds
            .create(&SimulateCardRefundParams {
                transaction_id: "transaction_uyrp7fld2ium70oa7oi".into(),
            })
            .await
            .expect("refunds");

        let calls = client.requester().calls();
        assert_eq!(calls[0].path, "/simulations/card_settlements");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "card_id": "card_oubs0hwk5rn6knuecxg2",
                "pending_transaction_id": "pending_transaction_k1sfetcau2qbvjbzgju4"
            }))
        );
        assert_eq!(calls[1].path, "/simulations/card_refunds");
    }

    #[tokio::test]
    async fn transfer_state_simulations() {
        let client = Client::with_requester(
            MockRequester::new()
                .respond(json!({
                    "account_id": "account_in71c4amph0vgo2qllky",
                    "amount": 100,
                    "created_at": "2020-01-31T23:59:59Z",
                    "currency": "USD",
                    "description": "Savings",
                    "destination_account_id": "account_uf16sut2ct5bevmq3eh",
                    "id": "account_transfer_7k9qe1ysdgqztnt63l7n",
                    "status": "complete"
                }))
                .respond(json!({
                    "account_id": "account_in71c4amph0vgo2qllky",
                    "account_number": "987654321",
                    "amount": 100,
                    "created_at": "2020-01-31T23:59:59Z",
                    "currency": "USD",
                    "id": "wire_transfer_5akynk7dqsq25qwk9q2u",
                    "routing_number": "101050001",
                    "status": "submitted"
                }))
                .respond(json!({
                    "account_id": "account_in71c4amph0vgo2qllky",
                    "amount": 1000,
                    "created_at": "2020-01-31T23:59:59Z",
                    "currency": "USD",
                    "fulfillment_method": "physical_check",
                    "id": "check_transfer_30b43acfu9vw8fyc4f5",
                    "status": "mailed"
                })),
        );
        let simulations = client.simulations();
        simulations
            .account_transfers
            .complete("account_transfer_7k9qe1ysdgqztnt63l7n")
            .await
            .expect("completes");
        simulations
            .wire_transfers
            .submit("wire_transfer_5akynk7dqsq25qwk9q2u")
            .await
            .expect("submits");
        let check = simulations
            .check_transfers
            .mail("check_transfer_30b43acfu9vw8fyc4f5")
            .await
            .expect("mails");
        assert_eq!(check.status, Some(crate::models::CheckTransferStatus::Mailed));

        let paths: Vec<String> = client

            .requester()

            .calls()

            .into_iter()

            .map(|c| c.path)

            .collect();
        assert_eq!(
            paths,
            [
                "/simulations/account_transfers/account_transfer_7k9qe1ysdgqztnt63l7n/complete",
                "/simulations/wire_transfers/wire_transfer_5akynk7dqsq25qwk9q2u/submit",
                "/simulations/check_transfers/check_transfer_30b43acfu9vw8fyc4f5/mail",
            ]
        );
    }
}
