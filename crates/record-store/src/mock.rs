//! # Mock Stores & Testing Guide
//!
//! [`MockStore<T>`] hands out a real [`StoreClient<T>`], but the requests are answered from a queue
//! of expectations instead of a running [`StoreActor`](crate::StoreActor). It lets client wrappers
//! and orchestration logic be tested deterministically, including error paths that a real store
//! would rarely produce.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | None (scripted replies) | Real records |
//! | **Use Case** | Logic *around* the client | The store or the whole system |
//! | **Error Injection** | Easy (`return_err`) | Needs a specific state |
//!
//! ## Example
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::StoreRecord;
//!
//! #[derive(Clone, Debug, PartialEq)] struct Tag { id: u64, label: String }
//! #[derive(Debug)] struct TagCreate { label: String }
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! impl StoreRecord for Tag {
//!     type Id = u64; type Create = TagCreate; type Action = TagAction;
//!     type ActionResult = (); type Error = TagError;
//!     fn from_create(id: u64, p: TagCreate) -> Result<Self, TagError> { Ok(Self { id, label: p.label }) }
//!     fn apply(&mut self, action: TagAction) -> Result<(), TagError> { match action {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Tag>::new();
//!     mock.expect_create().return_ok(7);
//!     mock.expect_exists(7).return_ok(true);
//!
//!     let client = mock.client();
//!     let id = client.create(TagCreate { label: "sale".into() }).await.unwrap();
//!     assert_eq!(id, 7);
//!     assert!(client.exists(id).await.unwrap());
//!
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation (wrong
//! kind or wrong id) gets no reply, so the caller sees
//! [`StoreError::StoreDropped`](crate::StoreError::StoreDropped), and [`MockStore::verify`] reports
//! the mismatch.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::StoreRecord;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: StoreRecord> {
    Create {
        response: Result<T::Id, StoreError>,
    },
    Insert {
        id: T::Id,
        response: Result<T::Id, StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Exists {
        id: T::Id,
        response: Result<bool, StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted store for tests.
pub struct MockStore<T: StoreRecord> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreRecord> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<R>(respond_to: oneshot::Sender<Result<R, StoreError>>, response: Result<R, StoreError>) {
    let _ = respond_to.send(response);
}

impl<T: StoreRecord> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let pending = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = pending.lock().unwrap().pop_front();

                match (request, next) {
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response);
                    }
                    (
                        StoreRequest::Insert { id, respond_to, .. },
                        Some(Expectation::Insert { id: expected, response }),
                    ) if id == expected => reply(respond_to, response),
                    (
                        StoreRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) if id == expected => reply(respond_to, response),
                    (
                        StoreRequest::Exists { id, respond_to },
                        Some(Expectation::Exists { id: expected, response }),
                    ) if id == expected => reply(respond_to, response),
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) if id == expected => reply(respond_to, response),
                    (request, next) => {
                        failures.lock().unwrap().push(format!(
                            "unexpected {} (expected {})",
                            describe_request(&request),
                            next.as_ref().map(describe_expectation).unwrap_or("nothing"),
                        ));
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects an `insert` request for `id`.
    pub fn expect_insert(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Insert { id, response }
        })
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects an `exists` request for `id`.
    pub fn expect_exists(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Exists { id, response }
        })
    }

    /// Expects an `action` request for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Mock store received unexpected requests: {:?}", *mismatches);
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn describe_request<T: StoreRecord>(request: &StoreRequest<T>) -> String {
    match request {
        StoreRequest::Create { .. } => "Create".to_string(),
        StoreRequest::Insert { id, .. } => format!("Insert({id})"),
        StoreRequest::Get { id, .. } => format!("Get({id})"),
        StoreRequest::Exists { id, .. } => format!("Exists({id})"),
        StoreRequest::Action { id, action, .. } => format!("Action({id}, {action:?})"),
    }
}

fn describe_expectation<T: StoreRecord>(expectation: &Expectation<T>) -> &'static str {
    match expectation {
        Expectation::Create { .. } => "Create",
        Expectation::Insert { .. } => "Insert",
        Expectation::Get { .. } => "Get",
        Expectation::Exists { .. } => "Exists",
        Expectation::Action { .. } => "Action",
    }
}

/// Builder that records the reply for one expectation.
pub struct ExpectationBuilder<T: StoreRecord, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: StoreRecord, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Replies with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the raw receiver behind it.
///
/// Useful when a test needs to inspect the exact payload a client sends (e.g. the action it
/// built) before replying by hand.
pub fn create_mock_client<T: StoreRecord>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a `Create`.
pub async fn expect_create<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an `Action`.
pub async fn expect_action<T: StoreRecord>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TagAction {
        Rename(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("tag error")]
    struct TagError;

    impl StoreRecord for Tag {
        type Id = u64;
        type Create = TagCreate;
        type Action = TagAction;
        type ActionResult = ();
        type Error = TagError;

        fn from_create(id: u64, params: TagCreate) -> Result<Self, TagError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        fn apply(&mut self, action: TagAction) -> Result<(), TagError> {
            match action {
                TagAction::Rename(label) => self.label = label,
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_payload() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TagCreate {
                    label: "clearance".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "clearance");
        responder.send(Ok(3)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::<Tag>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Tag {
            id: 1,
            label: "sale".to_string(),
        }));
        mock.expect_action(1)
            .return_err(StoreError::NotFound("1".to_string()));

        let client = mock.client();
        let id = client
            .create(TagCreate {
                label: "sale".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap().unwrap();
        assert_eq!(fetched.label, "sale");

        let renamed = client
            .perform_action(1, TagAction::Rename("promo".to_string()))
            .await;
        assert!(matches!(renamed, Err(StoreError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "unexpected Get(2)")]
    async fn test_mock_store_reports_wrong_id() {
        let mut mock = MockStore::<Tag>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(StoreError::StoreDropped)));

        mock.verify();
    }
}
