//! # StoreHandle Trait
//!
//! Common interface for record-specific clients: implement two methods and get `get` and
//! `exists` with tracing and error mapping for free.

use crate::{StoreClient, StoreError, StoreRecord};
use async_trait::async_trait;

/// Trait for record-specific clients built on top of a generic [`StoreClient`].
///
/// # Example
///
/// ```rust
/// use record_store::{StoreClient, StoreError, StoreHandle, StoreRecord};
///
/// #[derive(Clone, Debug)] struct Tag { id: u64 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error: {0}")] struct TagError(String);
///
/// impl StoreRecord for Tag {
///     type Id = u64;
///     type Create = TagCreate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Error = TagError;
///     fn from_create(id: u64, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
///     fn apply(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
/// }
///
/// struct TagClient { inner: StoreClient<Tag> }
///
/// impl StoreHandle<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &StoreClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and exists() are provided
///     let _ = client.get(1).await;
///     let _ = client.exists(1).await;
/// }
/// ```
#[async_trait]
pub trait StoreHandle<T: StoreRecord>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the record-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Check whether a record exists.
    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().exists(id).await.map_err(Self::map_error)
    }
}
