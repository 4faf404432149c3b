//! [`StoreRecord`] implementation for the [`Product`] model.
//!
//! Products are immutable once stored: the action type is uninhabited.

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use record_store::StoreRecord;

/// Products accept no targeted mutations.
#[derive(Debug, Clone)]
pub enum ProductAction {}

impl StoreRecord for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ();
    type Error = ProductError;

    /// Rejects products without a name.
    fn from_create(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.trim().is_empty() {
            return Err(ProductError::Validation(format!(
                "product {} needs a name",
                id
            )));
        }
        Ok(Self::new(id, params.name, params.description))
    }

    fn apply(&mut self, action: ProductAction) -> Result<(), ProductError> {
        match action {}
    }
}
