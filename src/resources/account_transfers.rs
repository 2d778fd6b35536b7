use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{AccountTransfer, CreateAccountTransferParams, ListAccountTransfersParams};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/account_transfers";

#[derive(Debug)]
pub struct AccountTransfers<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> AccountTransfers<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    /// Move funds between two accounts in the same program.
    pub async fn create(
        &self,
        params: &CreateAccountTransferParams,
    ) -> Result<AccountTransfer, IncreaseError> {
        if params.amount <= 0 {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        if params.account_id == params.destination_account_id {
            return Err(IncreaseError::InvalidParameter(
                "source and destination accounts must differ",
            ));
        }
        info!(
            "Creating account transfer of {} from {} to {}",
            params.amount, params.account_id, params.destination_account_id
        );
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, transfer_id: &str) -> Result<AccountTransfer, IncreaseError> {
        let path = resource_path(PATH, transfer_id)?;
        debug!("Retrieving account transfer {}", transfer_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListAccountTransfersParams,
    ) -> Result<Page<AccountTransfer>, IncreaseError> {
        debug!("Listing account transfers");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(
        &self,
        params: ListAccountTransfersParams,
    ) -> Result<Vec<AccountTransfer>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    /// Approve a transfer created with `require_approval`.
    pub async fn approve(&self, transfer_id: &str) -> Result<AccountTransfer, IncreaseError> {
        let path = format!("{}/approve", resource_path(PATH, transfer_id)?);
        info!("Approving account transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    /// Cancel a transfer that is still pending approval.
    pub async fn cancel(&self, transfer_id: &str) -> Result<AccountTransfer, IncreaseError> {
        let path = format!("{}/cancel", resource_path(PATH, transfer_id)?);
        info!("Canceling account transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}
