//! # Mock Store & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered from
//! a queue of expectations instead of a running store. It lets you script what a collaborator
//! store returns (including failures) and test the code *around* the client deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (scripted answers) | Real store semantics |
//! | **Use Case** | Unit testing logic around a client | Testing the store itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires killing the actor) |
//!
//! ## Example
//!
//! ```rust
//! use store_actor::mock::MockClient;
//! use store_actor::{FrameworkError, StoreEntity};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Team { id: Option<u64>, name: String }
//!
//! impl StoreEntity for Team {
//!     type Id = u64;
//!     fn id(&self) -> Option<u64> { self.id }
//!     fn with_id(self, id: u64) -> Self { Self { id: Some(id), ..self } }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Team>::new();
//!     mock.expect_find_by_id(1)
//!         .return_ok(Some(Team { id: Some(1), name: "Ops".into() }));
//!     mock.expect_find_by_id(2)
//!         .return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.find_by_id(1).await.unwrap().unwrap().name, "Ops");
//!     assert!(matches!(client.find_by_id(2).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Low-level Helpers
//!
//! [`create_mock_client`] returns a client and the raw request receiver, so a test can inspect
//! each request and answer it by hand (see [`expect_save`] and [`expect_find_by_id`]).

use crate::client::ResourceClient;
use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation<T: StoreEntity> {
    FindById {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    FindAll {
        response: Result<Vec<T>, FrameworkError>,
    },
    Save {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    DeleteById {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not match
/// the next expectation (wrong operation or wrong id) panics the mock task, which surfaces in the
/// caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: StoreEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::FindById { id, respond_to },
                        Some(Expectation::FindById {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "FindById called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindAll { respond_to },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Save { respond_to, .. },
                        Some(Expectation::Save { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { entity, respond_to },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(
                            entity.id(),
                            Some(expected),
                            "Update called with unexpected id"
                        );
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::DeleteById { id, respond_to },
                        Some(Expectation::DeleteById {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "DeleteById called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `find_by_id` operation.
    pub fn expect_find_by_id(&mut self, id: T::Id) -> FindByIdExpectationBuilder<T> {
        FindByIdExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find_all` operation.
    pub fn expect_find_all(&mut self) -> FindAllExpectationBuilder<T> {
        FindAllExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` of the entity stored under `id`.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete_by_id` operation.
    pub fn expect_delete_by_id(&mut self, id: T::Id) -> DeleteByIdExpectationBuilder<T> {
        DeleteByIdExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `find_by_id` expectations.
pub struct FindByIdExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: StoreEntity> FindByIdExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindById {
                id: self.id,
                response,
            });
    }
}

/// Builder for `find_all` expectations.
pub struct FindAllExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> FindAllExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.push(Ok(items));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::FindAll { response });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: StoreEntity> {
    expectations: Expectations<T>,
}

impl<T: StoreEntity> SaveExpectationBuilder<T> {
    /// Answers with `saved` as the persisted entity.
    pub fn return_ok(self, saved: T) {
        self.push(Ok(saved));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Save { response });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: StoreEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        self.push(Ok(updated));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Update {
                id: self.id,
                response,
            });
    }
}

/// Builder for `delete_by_id` expectations.
pub struct DeleteByIdExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: StoreEntity> DeleteByIdExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::DeleteById {
                id: self.id,
                response,
            });
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test needs to look at the request payload itself (e.g. the entity passed to
/// `save`) before answering it.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request.
pub async fn expect_save<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindById request.
pub async fn expect_find_by_id<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindById { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
