use increase::models::{
    CardAuthorizationSimulation, CreateAccountParams, CreateCardParams,
    SimulateCardAuthorizationParams, SimulateCardSettlementParams, SimulateInterestPaymentParams,
};
use increase::{Client, Environment};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let api_key = env::var("INCREASE_API_KEY")
        .map_err(|_| "Set INCREASE_API_KEY in your environment or .env file")?;

    // Simulations only exist in the sandbox.
    let client = Client::new(api_key)?.with_environment(Environment::Sandbox);

    let account = client
        .accounts()
        .create(&CreateAccountParams::new("Walkthrough"))
        .await?;
    println!("Opened account {}", account.id);

    client
        .simulations()
        .interest_payments
        .create(&SimulateInterestPaymentParams {
            account_id: account.id.clone(),
            amount: 10_000,
            ..Default::default()
        })
        .await?;

    let card = client
        .cards()
        .create(&CreateCardParams {
            account_id: account.id.clone(),
            description: Some("Walkthrough card".into()),
            ..Default::default()
        })
        .await?;

    let authorization = client
        .simulations()
        .card_authorizations
        .create(&SimulateCardAuthorizationParams {
            amount: 1_250,
            card_id: Some(card.id.clone()),
            merchant_descriptor: Some("COFFEE SHOP".into()),
            ..Default::default()
        })
        .await?;

    match &authorization {
        CardAuthorizationSimulation::Approved(pending) => {
            println!(
                "Authorized {} as {}",
                pending.amount.unwrap_or_default(),
                pending.id
            );
            let settled = client
                .simulations()
                .card_settlements
                .create(&SimulateCardSettlementParams {
                    card_id: card.id.clone(),
                    pending_transaction_id: pending.id.clone(),
                    amount: None,
                })
                .await?;
            println!("Settled as transaction {}", settled.id);
        }
        CardAuthorizationSimulation::Declined(declined) => {
            let reason = declined.source.as_ref().map(|source| source.category());
            println!("Declined: {}", reason.unwrap_or("unknown"));
        }
        CardAuthorizationSimulation::NoTransaction => {
            println!("Authorization produced no transaction");
        }
    }

    let balance = client
        .accounts()
        .balance(&account.id, &Default::default())
        .await?;
    println!(
        "Balance: current={} available={}",
        balance.current_balance.unwrap_or_default(),
        balance.available_balance.unwrap_or_default()
    );

    Ok(())
}
