use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{CreateWireTransferParams, ListWireTransfersParams, WireTransfer};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/wire_transfers";

#[derive(Debug)]
pub struct WireTransfers<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> WireTransfers<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        params: &CreateWireTransferParams,
    ) -> Result<WireTransfer, IncreaseError> {
        if params.amount <= 0 {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        if params.beneficiary_name.trim().is_empty() {
            return Err(IncreaseError::InvalidParameter("beneficiary_name must not be empty"));
        }
        info!(
            "Creating wire transfer of {} from account {}",
            params.amount, params.account_id
        );
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, transfer_id: &str) -> Result<WireTransfer, IncreaseError> {
        let path = resource_path(PATH, transfer_id)?;
        debug!("Retrieving wire transfer {}", transfer_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListWireTransfersParams,
    ) -> Result<Page<WireTransfer>, IncreaseError> {
        debug!("Listing wire transfers");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(
        &self,
        params: ListWireTransfersParams,
    ) -> Result<Vec<WireTransfer>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    pub async fn approve(&self, transfer_id: &str) -> Result<WireTransfer, IncreaseError> {
        let path = format!("{}/approve", resource_path(PATH, transfer_id)?);
        info!("Approving wire transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    pub async fn cancel(&self, transfer_id: &str) -> Result<WireTransfer, IncreaseError> {
        let path = format!("{}/cancel", resource_path(PATH, transfer_id)?);
        info!("Canceling wire transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}
