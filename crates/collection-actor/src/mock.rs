//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`CollectionClient<T>`] whose requests are answered from a
//! queue of expectations instead of by an actor. It lets you test the code *around* a client
//! (error mapping, argument plumbing) without any storage at all.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast, but touches storage |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real collection |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing backend |
//!
//! ## Example
//!
//! ```rust
//! use collection_actor::mock::MockClient;
//! use collection_actor::{CollectionEntity, FrameworkError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Tag { id: u32, label: String }
//! #[derive(Debug, thiserror::Error)] #[error("Tag error")] struct TagError;
//!
//! impl CollectionEntity for Tag {
//!     type Id = u32; type Create = String; type Update = String; type Error = TagError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn next_id(tags: &[Self]) -> Result<u32, TagError> { Ok(tags.len() as u32 + 1) }
//!     fn from_create_params(id: u32, label: String) -> Result<Self, TagError> { Ok(Self { id, label }) }
//!     fn on_update(&mut self, label: String, _: &[Self]) -> Result<(), TagError> { self.label = label; Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1, label: "rust".into() }));
//!     mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().label, "rust");
//!     assert!(matches!(client.delete(2).await, Err(FrameworkError::NotFound(_))));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, then pull requests off it with
//! [`expect_list`], [`expect_create`], [`expect_get`], [`expect_update`] or [`expect_delete`] and
//! answer them by hand. Use [`MockClient`] for the fluent, queue-based API.

use crate::client::CollectionClient;
use crate::entity::CollectionEntity;
use crate::error::FrameworkError;
use crate::message::{CollectionRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response it should receive.
enum Expectation<T: CollectionEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: CollectionEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (wrong operation or wrong id) panics the background task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: CollectionEntity> {
    client: CollectionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CollectionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CollectionEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }
}

/// Builder that records the response for one expectation.
pub struct ExpectationBuilder<T: CollectionEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: CollectionEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests: the test pulls them off the receiver with the `expect_*`
/// helpers below, inspects the payload and replies through the returned responder. This
/// simulates the actor's behavior (success, failure, delays) deterministically.
pub fn create_mock_client<T: CollectionEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(CollectionRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: CollectionEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
