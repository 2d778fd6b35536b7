use clap::{Parser, Subcommand, ValueEnum};
use increase::models::{
    CreateAccountParams, ListAccountsParams, ListTransactionsParams, TransactionSource,
};
use increase::{Client, Environment};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "increase-cli", about = "CLI wrapper for the Increase API")]
struct Cli {
    /// API key; falls back to INCREASE_API_KEY env var
    #[arg(long, env = "INCREASE_API_KEY")]
    api_key: String,

    #[arg(long, value_enum, env = "INCREASE_ENVIRONMENT", default_value = "sandbox")]
    environment: Env,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List accounts
    Accounts {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Open a new account
    OpenAccount {
        #[arg(long)]
        name: String,
        #[arg(long)]
        entity_id: Option<String>,
    },
    /// Show current and available balance
    Balance {
        #[arg(long)]
        account_id: String,
    },
    /// List every transaction of an account
    Transactions {
        #[arg(long)]
        account_id: String,
    },
    /// Close an account
    CloseAccount {
        #[arg(long)]
        account_id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Env {
    Production,
    Sandbox,
}

impl From<Env> for Environment {
    fn from(value: Env) -> Self {
        match value {
            Env::Production => Environment::Production,
            Env::Sandbox => Environment::Sandbox,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = Client::new(cli.api_key)?.with_environment(cli.environment.into());

    match cli.command {
        Commands::Accounts { limit } => {
            let params = ListAccountsParams {
                limit,
                ..Default::default()
            };
            let page = client.accounts().list(&params).await?;
            for account in &page.data {
                println!(
                    "{} | {} | {:?} | {:?}",
                    account.id,
                    account.name.as_deref().unwrap_or_default(),
                    account.currency,
                    account.status
                );
            }
            if let Some(cursor) = page.next_cursor {
                println!("more results after cursor {cursor}");
            }
        }
        Commands::OpenAccount { name, entity_id } => {
            let params = CreateAccountParams {
                entity_id,
                ..CreateAccountParams::new(name)
            };
            let account = client.accounts().create(&params).await?;
            println!(
                "Opened account {} ({})",
                account.id,
                account.name.as_deref().unwrap_or_default()
            );
        }
        Commands::Balance { account_id } => {
            let balance = client
                .accounts()
                .balance(&account_id, &Default::default())
                .await?;
            println!(
                "current={} available={}",
                balance.current_balance.unwrap_or_default(),
                balance.available_balance.unwrap_or_default()
            );
        }
        Commands::Transactions { account_id } => {
            let params = ListTransactionsParams {
                account_id: Some(account_id),
                ..Default::default()
            };
            let transactions = client.transactions().list_all(params).await?;
            for txn in &transactions {
                let date = txn
                    .created_at
                    .map(|at| at.date_naive().to_string())
                    .unwrap_or_default();
                println!(
                    "{} | {} | {} {:?} | {}",
                    txn.id,
                    date,
                    txn.amount.unwrap_or_default(),
                    txn.currency,
                    txn.source.as_ref().map(describe).unwrap_or_default()
                );
            }
        }
        Commands::CloseAccount { account_id } => {
            let account = client.accounts().close(&account_id).await?;
            println!("Closed account {}", account.id);
        }
    }

    Ok(())
}

fn describe(source: &TransactionSource) -> String {
    match source {
        TransactionSource::InboundAchTransfer(ach) => format!(
            "ACH from {}",
            ach.originator_company_name
                .as_deref()
                .unwrap_or("unknown originator")
        ),
        TransactionSource::CardSettlement(card) => format!(
            "card at {}",
            card.merchant_name.as_deref().unwrap_or("unknown merchant")
        ),
        TransactionSource::InterestPayment(_) => "interest".to_string(),
        other => other.category().replace('_', " "),
    }
}
