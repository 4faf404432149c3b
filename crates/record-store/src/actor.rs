//! # Store Actor
//!
//! `StoreActor` is the server side of a record store. It owns the records of one kind and
//! processes every [`StoreRequest`] sequentially, so each request is atomic with respect to the
//! records it touches.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic store that keeps a collection of records.
///
/// # Architecture Note
/// This struct owns the state (`records`) and the receiving end of the channel. It runs in its
/// own Tokio task and handles one message at a time, so the map needs no `Mutex`: exclusive
/// ownership inside the task is the lock.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new()` returns the store and its client.
/// 2. **Run**: spawn `store.run()` in a background task.
/// 3. **Use**: clone the client wherever the records are needed.
///
/// ```rust
/// use record_store::{StoreActor, StoreRecord};
///
/// #[derive(Clone, Debug)] struct Note { id: u64, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] enum NoteAction { Append(String) }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl StoreRecord for Note {
///     type Id = u64;
///     type Create = NoteCreate;
///     type Action = NoteAction;
///     type ActionResult = usize;
///     type Error = NoteError;
///
///     fn from_create(id: u64, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
///
///     fn apply(&mut self, action: NoteAction) -> Result<usize, NoteError> {
///         match action {
///             NoteAction::Append(more) => {
///                 self.text.push_str(&more);
///                 Ok(self.text.len())
///             }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (store, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(store.run());
///
///     let id = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
///     let len = client.perform_action(id, NoteAction::Append(" world".into())).await.unwrap();
///     assert_eq!(len, 11);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: takes the next free id from the counter (ids already used by `Insert` are
///   skipped), builds the record with `from_create` and stores it.
/// * **Insert**: stores a record under a caller-chosen id; fails with `Conflict` if taken.
/// * **Get** / **Exists**: read-only lookups.
/// * **Action**: applies the action to a *copy* of the record and only commits the copy when the
///   record accepts it, so a rejected action never leaves a half-applied change behind.
pub struct StoreActor<T: StoreRecord> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: StoreRecord> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (store, client)
    }

    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Short type name ("Offer" rather than "offer_service::model::offer::Offer")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    let id = self.allocate_id();
                    match T::from_create(id.clone(), params) {
                        Ok(record) => {
                            self.records.insert(id.clone(), record);
                            info!(record_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(record_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Insert {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?params, "Insert");
                    if self.records.contains_key(&id) {
                        warn!(record_type, %id, "Already exists");
                        let _ = respond_to.send(Err(StoreError::Conflict(id.to_string())));
                        continue;
                    }
                    match T::from_create(id.clone(), params) {
                        Ok(record) => {
                            self.records.insert(id.clone(), record);
                            info!(record_type, %id, size = self.records.len(), "Inserted");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(record_type, %id, error = %e, "Insert failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Exists { id, respond_to } => {
                    let found = self.records.contains_key(&id);
                    debug!(record_type, %id, found, "Exists");
                    let _ = respond_to.send(Ok(found));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?action, "Action");
                    let Some(record) = self.records.get_mut(&id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut updated = record.clone();
                    match updated.apply(action) {
                        Ok(result) => {
                            *record = updated;
                            info!(record_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(record_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}
