use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{
    DeclinedTransaction, ListDeclinedTransactionsParams, ListPendingTransactionsParams,
    ListTransactionsParams, PendingTransaction, Transaction,
};
use crate::pagination::Page;
use crate::requester::Requester;
use log::debug;

const TRANSACTIONS: &str = "/transactions";
const PENDING_TRANSACTIONS: &str = "/pending_transactions";
const DECLINED_TRANSACTIONS: &str = "/declined_transactions";

#[derive(Debug)]
pub struct Transactions<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> Transactions<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, transaction_id: &str) -> Result<Transaction, IncreaseError> {
        let path = resource_path(TRANSACTIONS, transaction_id)?;
        debug!("Retrieving transaction {}", transaction_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListTransactionsParams,
    ) -> Result<Page<Transaction>, IncreaseError> {
        debug!("Listing transactions");
        self.client.list(TRANSACTIONS, params).await
    }

    pub async fn list_all(
        &self,
        params: ListTransactionsParams,
    ) -> Result<Vec<Transaction>, IncreaseError> {
        self.client.list_all(TRANSACTIONS, params).await
    }
}

#[derive(Debug)]
pub struct PendingTransactions<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> PendingTransactions<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    pub async fn retrieve(
        &self,
        pending_transaction_id: &str,
    ) -> Result<PendingTransaction, IncreaseError> {
        let path = resource_path(PENDING_TRANSACTIONS, pending_transaction_id)?;
        debug!("Retrieving pending transaction {}", pending_transaction_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListPendingTransactionsParams,
    ) -> Result<Page<PendingTransaction>, IncreaseError> {
        debug!("Listing pending transactions");
        self.client.list(PENDING_TRANSACTIONS, params).await
    }

    pub async fn list_all(
        &self,
        params: ListPendingTransactionsParams,
    ) -> Result<Vec<PendingTransaction>, IncreaseError> {
        self.client.list_all(PENDING_TRANSACTIONS, params).await
    }
}

#[derive(Debug)]
pub struct DeclinedTransactions<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> DeclinedTransactions<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    pub async fn retrieve(
        &self,
        declined_transaction_id: &str,
    ) -> Result<DeclinedTransaction, IncreaseError> {
        let path = resource_path(DECLINED_TRANSACTIONS, declined_transaction_id)?;
        debug!("Retrieving declined transaction {}", declined_transaction_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListDeclinedTransactionsParams,
    ) -> Result<Page<DeclinedTransaction>, IncreaseError> {
        debug!("Listing declined transactions");
        self.client.list(DECLINED_TRANSACTIONS, params).await
    }

    pub async fn list_all(
        &self,
        params: ListDeclinedTransactionsParams,
    ) -> Result<Vec<DeclinedTransaction>, IncreaseError> {
        self.client.list_all(DECLINED_TRANSACTIONS, params).await
    }
}
