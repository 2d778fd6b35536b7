use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{
    CheckTransfer, CreateCheckTransferParams, FulfillmentMethod, ListCheckTransfersParams,
    StopPaymentParams,
};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/check_transfers";

#[derive(Debug)]
pub struct CheckTransfers<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> CheckTransfers<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    /// Issue a check. Physical checks need a recipient and a mailing address.
    pub async fn create(
        &self,
        params: &CreateCheckTransferParams,
    ) -> Result<CheckTransfer, IncreaseError> {
        if params.amount <= 0 {
            return Err(IncreaseError::InvalidParameter("amount must be positive"));
        }
        if params.fulfillment_method == FulfillmentMethod::PhysicalCheck {
            let Some(physical) = &params.physical_check else {
                return Err(IncreaseError::InvalidParameter(
                    "physical_check is required for physical_check fulfillment",
                ));
            };
            if physical.recipient_name.is_none() || physical.mailing_address.is_none() {
                return Err(IncreaseError::InvalidParameter(
                    "physical_check needs recipient_name and mailing_address",
                ));
            }
        }
        info!(
            "Creating check transfer of {} from account {}",
            params.amount, params.account_id
        );
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, transfer_id: &str) -> Result<CheckTransfer, IncreaseError> {
        let path = resource_path(PATH, transfer_id)?;
        debug!("Retrieving check transfer {}", transfer_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListCheckTransfersParams,
    ) -> Result<Page<CheckTransfer>, IncreaseError> {
        debug!("Listing check transfers");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(
        &self,
        params: ListCheckTransfersParams,
    ) -> Result<Vec<CheckTransfer>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    pub async fn approve(&self, transfer_id: &str) -> Result<CheckTransfer, IncreaseError> {
        let path = format!("{}/approve", resource_path(PATH, transfer_id)?);
        info!("Approving check transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    pub async fn cancel(&self, transfer_id: &str) -> Result<CheckTransfer, IncreaseError> {
        let path = format!("{}/cancel", resource_path(PATH, transfer_id)?);
        info!("Canceling check transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    /// Stop payment on a check that has been mailed but not deposited.
    pub async fn stop_payment(
        &self,
        transfer_id: &str,
        params: &StopPaymentParams,
    ) -> Result<CheckTransfer, IncreaseError> {
        let path = format!("{}/stop_payment", resource_path(PATH, transfer_id)?);
        info!("Stopping payment on check transfer {}", transfer_id);
        self.client.post(path, params).await
    }
}
