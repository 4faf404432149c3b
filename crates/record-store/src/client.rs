//! # Store Client
//!
//! The generic async handle for talking to a [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `StoreActor<T>`.
///
/// It only holds the channel sender, so cloning is cheap and clones can be shared across tasks.
/// Every method sends one request and waits for the store's reply.
pub struct StoreClient<T: StoreRecord> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the sender's behalf.
impl<T: StoreRecord> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreRecord> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Create { params, respond_to })
            .await
    }

    pub async fn insert(&self, id: T::Id, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| StoreRequest::Insert {
            id,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn exists(&self, id: T::Id) -> Result<bool, StoreError> {
        self.request(|respond_to| StoreRequest::Exists { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
