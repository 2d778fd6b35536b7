use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{
    Account, BalanceLookup, BalanceParams, CreateAccountParams, ListAccountsParams,
    UpdateAccountParams,
};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/accounts";

#[derive(Debug)]
pub struct Accounts<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> Accounts<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    /// Open a new account.
    pub async fn create(&self, params: &CreateAccountParams) -> Result<Account, IncreaseError> {
        if params.name.trim().is_empty() {
            return Err(IncreaseError::InvalidParameter("account name must not be empty"));
        }
        info!("Creating account {}", params.name);
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, account_id: &str) -> Result<Account, IncreaseError> {
        let path = resource_path(PATH, account_id)?;
        debug!("Retrieving account {}", account_id);
        self.client.get(path).await
    }

    pub async fn update(
        &self,
        account_id: &str,
        params: &UpdateAccountParams,
    ) -> Result<Account, IncreaseError> {
        let path = resource_path(PATH, account_id)?;
        info!("Updating account {}", account_id);
        self.client.patch(path, params).await
    }

    pub async fn list(&self, params: &ListAccountsParams) -> Result<Page<Account>, IncreaseError> {
        debug!("Listing accounts");
        self.client.list(PATH, params).await
    }

    /// Fetch every account matching `params`, following cursors.
    pub async fn list_all(
        &self,
        params: ListAccountsParams,
    ) -> Result<Vec<Account>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    /// Current and available balance, optionally as of `params.at_time`.
    pub async fn balance(
        &self,
        account_id: &str,
        params: &BalanceParams,
    ) -> Result<BalanceLookup, IncreaseError> {
        let path = format!("{}/balance", resource_path(PATH, account_id)?);
        debug!("Retrieving balance for account {}", account_id);
        self.client.get_with_query(path, params).await
    }

    /// Close an account. The balance must be zero.
    pub async fn close(&self, account_id: &str) -> Result<Account, IncreaseError> {
        let path = format!("{}/close", resource_path(PATH, account_id)?);
        info!("Closing account {}", account_id);
        self.client.post_empty(path).await
    }
}
