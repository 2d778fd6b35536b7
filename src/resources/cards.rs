use crate::client::{Client, resource_path};
use crate::error::IncreaseError;
use crate::models::{Card, CardDetails, CreateCardParams, ListCardsParams, UpdateCardParams};
use crate::pagination::Page;
use crate::requester::Requester;
use log::{debug, info};

const PATH: &str = "/cards";

#[derive(Debug)]
pub struct Cards<'a, R> {
    client: &'a Client<R>,
}

impl<'a, R: Requester> Cards<'a, R> {
    pub(crate) fn new(client: &'a Client<R>) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &CreateCardParams) -> Result<Card, IncreaseError> {
        if params.account_id.trim().is_empty() {
            return Err(IncreaseError::InvalidParameter("account_id must not be empty"));
        }
        info!("Creating card for account {}", params.account_id);
        self.client.post(PATH.to_string(), params).await
    }

    pub async fn retrieve(&self, card_id: &str) -> Result<Card, IncreaseError> {
        let path = resource_path(PATH, card_id)?;
        debug!("Retrieving card {}", card_id);
        self.client.get(path).await
    }

    pub async fn update(
        &self,
        card_id: &str,
        params: &UpdateCardParams,
    ) -> Result<Card, IncreaseError> {
        let path = resource_path(PATH, card_id)?;
        info!("Updating card {}", card_id);
        self.client.patch(path, params).await
    }

    pub async fn list(&self, params: &ListCardsParams) -> Result<Page<Card>, IncreaseError> {
        debug!("Listing cards");
        self.client.list(PATH, params).await
    }

    pub async fn list_all(&self, params: ListCardsParams) -> Result<Vec<Card>, IncreaseError> {
        self.client.list_all(PATH, params).await
    }

    /// Full card number and verification code.
    pub async fn details(&self, card_id: &str) -> Result<CardDetails, IncreaseError> {
        let path = format!("{}/details", resource_path(PATH, card_id)?);
        debug!("Retrieving sensitive details for card {}", card_id);
        self.client.get(path).await
    }
}
