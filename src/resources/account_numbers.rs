use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{
    AccountNumber, CreateAccountNumberParams, ListAccountNumbersParams, UpdateAccountNumberParams,
};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/account_numbers";

#[derive(Debug)]
pub struct AccountNumbers<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> AccountNumbers<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    /// Issue a new routable account number for an account.
    pub async fn create(
        &self,
        params: &CreateAccountNumberParams,
    ) -> Result<AccountNumber, IncreaseError> {
        if params.account_id.trim().is_empty() {
            return Err(IncreaseError::InvalidParameter("account_id must not be empty"));
        }
        info!("Creating account number for account {}", params.account_id);
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, account_number_id: &str) -> Result<AccountNumber, IncreaseError> {
        let path = resource_path(PATH, account_number_id)?;
        debug!("Retrieving account number {}", account_number_id);
        self.client.get(path).await
    }

    pub async fn update(
        &self,
        account_number_id: &str,
        params: &UpdateAccountNumberParams,
    ) -> Result<AccountNumber, IncreaseError> {
        let path = resource_path(PATH, account_number_id)?;
        info!("Updating account number {}", account_number_id);
        self.client.patch(path, params).await
    }

    pub async fn list(
        &self,
        params: &ListAccountNumbersParams,
    ) -> Result<Page<AccountNumber>, IncreaseError> {
        debug!("Listing account numbers");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(
        &self,
        params: ListAccountNumbersParams,
    ) -> Result<Vec<AccountNumber>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }
}
