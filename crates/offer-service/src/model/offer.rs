/// Represents a time-bounded offer on a product.
///
/// # Record Store
/// This struct implements the [`StoreRecord`](record_store::StoreRecord) trait,
/// allowing it to be kept by a [`StoreActor`](record_store::StoreActor).
///
/// See [`impl StoreRecord for Offer`](#impl-StoreRecord-for-Offer) for details on:
/// - Creation parameters ([`OfferCreate`])
/// - Status updates ([`OfferAction`](crate::offer_actor::OfferAction))
use crate::model::{OfferStatus, ProductId};
use crate::offer_actor::OfferError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(pub u64);

impl From<u64> for OfferId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored offer, in the shape exchanged at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub description: String,
    pub price: Decimal,
    pub currency_code: String,
    /// Creation date, formatted with the configured [`DateFormat`](crate::config::DateFormat).
    pub created_on: String,
    pub days_valid_for: u32,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub status: OfferStatus,
}

/// Payload for storing a new offer. Built by the orchestrator, never by clients.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferCreate {
    pub description: String,
    pub price: Decimal,
    pub currency_code: String,
    pub created_on: String,
    pub days_valid_for: u32,
    pub product_id: ProductId,
    pub status: OfferStatus,
}

/// Offer as submitted by a client.
///
/// `id`, `createdOn` and `status` are accepted so that a full offer document can be posted
/// back, but they are ignored: the orchestrator always assigns them itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDraft {
    pub description: String,
    pub price: Decimal,
    pub currency_code: String,
    #[serde(default)]
    pub days_valid_for: u32,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    #[serde(default)]
    pub id: Option<OfferId>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl OfferDraft {
    /// Creates a draft with only the client-owned fields set.
    pub fn new(
        description: impl Into<String>,
        price: Decimal,
        currency_code: impl Into<String>,
        days_valid_for: u32,
        product_id: ProductId,
    ) -> Self {
        Self {
            description: description.into(),
            price,
            currency_code: currency_code.into(),
            days_valid_for,
            product_id,
            id: None,
            created_on: None,
            status: None,
        }
    }

    /// Checks the required fields.
    ///
    /// - `description` must not be blank
    /// - `price` must not be negative
    /// - `currencyCode` must be three ASCII letters (e.g. `EUR`)
    pub fn validate(&self) -> Result<(), OfferError> {
        if self.description.trim().is_empty() {
            return Err(OfferError::Validation("description is required".to_string()));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(OfferError::Validation(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        let code = self.currency_code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(OfferError::Validation(format!(
                "currency code must be three letters, got {:?}",
                self.currency_code
            )));
        }
        Ok(())
    }

    /// True when the client tried to set fields the orchestrator owns.
    pub fn has_server_fields(&self) -> bool {
        self.id.is_some() || self.created_on.is_some() || self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OfferDraft {
        OfferDraft::new("Spring sale", Decimal::new(100, 0), "EUR", 20, ProductId(4621346))
    }

    #[test]
    fn test_valid_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_validation_failures() {
        let mut blank = draft();
        blank.description = "   ".to_string();
        assert!(matches!(blank.validate(), Err(OfferError::Validation(_))));

        let mut negative = draft();
        negative.price = Decimal::new(-1, 2);
        assert!(matches!(negative.validate(), Err(OfferError::Validation(_))));

        let mut bad_code = draft();
        bad_code.currency_code = "EURO".to_string();
        assert!(matches!(bad_code.validate(), Err(OfferError::Validation(_))));

        let mut free = draft();
        free.price = Decimal::ZERO;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_draft_json_accepts_server_fields() {
        let json = r#"{
            "id": 17,
            "description": "Spring sale",
            "price": 100,
            "currencyCode": "EUR",
            "createdOn": "01/01/1980",
            "daysValidFor": 20,
            "productID": 4621346,
            "status": "whatever"
        }"#;
        let draft: OfferDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.product_id, ProductId(4621346));
        assert_eq!(draft.price, Decimal::new(100, 0));
        assert!(draft.has_server_fields());
    }

    #[test]
    fn test_days_valid_for_defaults_to_zero() {
        let json = r#"{"description":"d","price":1,"currencyCode":"EUR","productID":1}"#;
        let draft: OfferDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.days_valid_for, 0);
        assert!(!draft.has_server_fields());
    }

    #[test]
    fn test_offer_json_field_names() {
        let offer = Offer {
            id: OfferId(5),
            description: "Spring sale".to_string(),
            price: Decimal::new(100, 0),
            currency_code: "EUR".to_string(),
            created_on: "19/10/2026".to_string(),
            days_valid_for: 20,
            product_id: ProductId(4621346),
            status: OfferStatus::Valid,
        };
        let value = serde_json::to_value(&offer).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["productID"], 4621346);
        assert_eq!(value["currencyCode"], "EUR");
        assert_eq!(value["createdOn"], "19/10/2026");
        assert_eq!(value["daysValidFor"], 20);
        assert_eq!(value["status"], "valid");
        assert!(value["price"].is_number());
    }
}
