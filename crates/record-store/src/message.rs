//! # Store Messages
//!
//! Request types exchanged between a [`StoreClient`](crate::StoreClient) and its
//! [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::record::StoreRecord;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a store.
///
/// The variants cover what a record store needs and nothing more:
///
/// - **Create**: store-assigned id, built from [`StoreRecord::Create`].
/// - **Insert**: caller-assigned id (seeding reference data such as the product catalog).
/// - **Get**: fetch a clone of the record, `None` when absent.
/// - **Exists**: presence check without cloning the record.
/// - **Action**: targeted, record-specific mutation ([`StoreRecord::Action`]).
///
/// Records are never deleted.
#[derive(Debug)]
pub enum StoreRequest<T: StoreRecord> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Insert {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Exists {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
