use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{AchTransfer, CreateAchTransferParams, ListAchTransfersParams};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/ach_transfers";
/// NACHA limit for the statement descriptor.
const MAX_STATEMENT_DESCRIPTOR: usize = 10;

#[derive(Debug)]
pub struct AchTransfers<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> AchTransfers<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    /// Originate an ACH credit (positive amount) or debit (negative amount).
    pub async fn create(
        &self,
        params: &CreateAchTransferParams,
    ) -> Result<AchTransfer, IncreaseError> {
        if params.amount == 0 {
            return Err(IncreaseError::InvalidParameter("amount must not be zero"));
        }
        let has_routing = params.account_number.is_some() && params.routing_number.is_some();
        if !has_routing && params.external_account_id.is_none() {
            return Err(IncreaseError::InvalidParameter(
                "either account_number and routing_number or external_account_id is required",
            ));
        }
        if params.statement_descriptor.chars().count() > MAX_STATEMENT_DESCRIPTOR {
            return Err(IncreaseError::InvalidParameter(
                "statement_descriptor must be at most 10 characters",
            ));
        }
        info!(
            "Creating ACH transfer of {} from account {}",
            params.amount, params.account_id
        );
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, transfer_id: &str) -> Result<AchTransfer, IncreaseError> {
        let path = resource_path(PATH, transfer_id)?;
        debug!("Retrieving ACH transfer {}", transfer_id);
        self.client.get(path).await
    }

    pub async fn list(
        &self,
        params: &ListAchTransfersParams,
    ) -> Result<Page<AchTransfer>, IncreaseError> {
        debug!("Listing ACH transfers");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(
        &self,
        params: ListAchTransfersParams,
    ) -> Result<Vec<AchTransfer>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    pub async fn approve(&self, transfer_id: &str) -> Result<AchTransfer, IncreaseError> {
        let path = format!("{}/approve", resource_path(PATH, transfer_id)?);
        info!("Approving ACH transfer {}", transfer_id);
        self.client.post_empty(path).await
    }

    pub async fn cancel(&self, transfer_id: &str) -> Result<AchTransfer, IncreaseError> {
        let path = format!("{}/cancel", resource_path(PATH, transfer_id)?);
        info!("Canceling ACH transfer {}", transfer_id);
        self.client.post_empty(path).await
    }
}
