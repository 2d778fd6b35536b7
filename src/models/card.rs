use super::common::{CreatedAtFilter, InFilter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Active,
    Disabled,
    Canceled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub account_id: Option<String>,
    pub description: Option<String>,
    pub last4: Option<String>,
    pub expiration_month: Option<u32>,
    pub expiration_year: Option<u32>,
    pub status: Option<CardStatus>,
    pub billing_address: Option<BillingAddress>,
    pub entity_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sensitive card details. Keep out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_id: Option<String>,
    pub primary_account_number: Option<String>,
    pub expiration_month: Option<u32>,
    pub expiration_year: Option<u32>,
    pub verification_code: Option<String>,
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pan = self.primary_account_number.as_deref().map(|pan| {
            let last4 = pan.get(pan.len().saturating_sub(4)..).unwrap_or_default();
            format!("****{last4}")
        });
        f.debug_struct("CardDetails")
            .field("card_id", &self.card_id)
            .field("primary_account_number", &pan)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field(
                "verification_code",
                &self.verification_code.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateCardParams {
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateCardParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListCardsParams {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub account_id: Option<String>,
    pub idempotency_key: Option<String>,
    pub status: Option<InFilter<CardStatus>>,
    pub created_at: Option<CreatedAtFilter>,
}

crate::pagination::paginated!(ListCardsParams);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_card() {
        let card: Card = serde_json::from_value(json!({
            "account_id": "account_in71c4amph0vgo2qllky",
            "billing_address": {
                "city": "New York",
                "line1": "33 Liberty Street",
                "line2": null,
                "postal_code": "10045",
                "state": "NY"
            },
            "created_at": "2020-01-31T23:59:59Z",
            "description": "Office Expenses",
            "digital_wallet": null,
            "entity_id": null,
            "expiration_month": 11,
            "expiration_year": 2028,
            "id": "card_oubs0hwk5rn6knuecxg2",
            "idempotency_key": null,
            "last4": "4242",
            "status": "active",
            "type": "card"
        }))
        .expect("card should parse");
        assert_eq!(card.last4.as_deref(), Some("4242"));
        assert_eq!(card.status, Some(CardStatus::Active));
        assert_eq!(
            card.billing_address.and_then(|a| a.postal_code).as_deref(),
            Some("10045")
        );
    }

    #[test]
    fn card_details_debug_is_masked() {
        let details: CardDetails = serde_json::from_value(json!({
            "card_id": "card_oubs0hwk5rn6knuecxg2",
            "expiration_month": 7,
            "expiration_year": 2025,
            "primary_account_number": "4242424242424242",
            "type": "card_details",
            "verification_code": "123"
        }))
        .expect("details should parse");
        let rendered = format!("{details:?}");
        assert!(rendered.contains("****4242"));
        assert!(!rendered.contains("4242424242424242"));
        assert!(!rendered.contains("123\""));
    }

    #[test]
    fn sparse_card_decodes() {
        let card: Card = serde_json::from_value(json!({
            "id": "card_oubs0hwk5rn6knuecxg2",
            "status": "suspended",
            "last4": null
        }))
        .expect("card should parse");
        assert_eq!(card.status, Some(CardStatus::Unknown));
        assert!(card.last4.is_none());
        assert!(card.account_id.is_none());
        assert!(card.expiration_year.is_none());
    }

    #[test]
    fn billing_address_skips_unset_lines() {
        let address = BillingAddress {
            line1: Some("33 Liberty Street".into()),
            postal_code: Some("10045".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(address).expect("encodes"),
            json!({ "line1": "33 Liberty Street", "postal_code": "10045" })
        );
    }
}
