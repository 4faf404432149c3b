//! # StoreRecord Trait
//!
//! The `StoreRecord` trait is the contract every record kind (Offer, Product, …) implements to be
//! kept by the generic [`StoreActor`](crate::StoreActor). It names the identifier type, the
//! creation payload, the record-specific actions and the record's own error type.
//!
//! # Architecture Note
//! The store actor is written *once* and is reused for every record kind. The associated types
//! keep each store strongly typed: an offer store only accepts an offer creation payload, and a
//! product action can never be sent to the offer store.
//!
//! Records mutate only through [`StoreRecord::apply`]. There is no general "replace" or "delete"
//! request: a record that needs a targeted update (such as an offer status change) describes it
//! as an [`Action`](StoreRecord::Action), and the record decides whether the change is legal.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record kind must implement to be kept by a `StoreActor`.
pub trait StoreRecord: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from `u64` so the store can assign sequential ids.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new record (everything except the id).
    type Create: Send + Sync + Debug;

    /// Record-specific mutations (e.g., `SetStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// The store boxes it into [`StoreError::RecordError`](crate::StoreError::RecordError);
    /// typed clients recover it with `downcast`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from its assigned id and the creation payload.
    ///
    /// Returning an error rejects the creation; nothing is stored.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a record-specific action.
    ///
    /// The store only keeps the mutation when this returns `Ok`; implementations should leave
    /// `self` untouched on error.
    fn apply(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
