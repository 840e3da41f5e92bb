//! # Mock Framework
//!
//! Utilities for testing clients and the generator in isolation.
//!
//! Use [`MockClient`] to script the responses a store would give, then hand
//! `mock.client()` to the code under test. [`create_mock_client`] is the lower-level
//! variant that exposes the raw request channel.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
///
/// This enum is used internally by `MockClient` to track what requests
/// are expected and what responses should be returned.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Count {
        response: Result<usize, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation makes the mock task panic, which the caller observes as
/// [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_count().return_ok(0);
/// mock.expect_create().return_err(FrameworkError::ActorClosed);
///
/// let client = UserClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Count { respond_to }, Some(Expectation::Count { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
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

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get { response })
    }

    /// Expects a `count` operation.
    pub fn expect_count(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Count { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of spinning up a full `ResourceActor`, the test owns the channel, inspects
/// each request as it arrives and answers it through the embedded responder. This
/// makes success, failure and ordering fully deterministic.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, tokio::sync::oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Count request
pub async fn expect_count<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<tokio::sync::oneshot::Sender<Result<usize, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::Count { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PickupLocation, PickupLocationCreate, PickupLocationId};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<PickupLocation>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(PickupLocationCreate { name: "Store".to_string() })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Store");
        responder
            .send(Ok(PickupLocation::new(PickupLocationId(7), "Store")))
            .unwrap();

        let stored = create_task.await.unwrap().unwrap();
        assert_eq!(stored.id, PickupLocationId(7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<PickupLocation>::new();

        mock.expect_count().return_ok(0);
        mock.expect_create()
            .return_ok(PickupLocation::new(PickupLocationId(1), "Bakery"));
        mock.expect_list().return_err(FrameworkError::ActorClosed);

        let client = mock.client();

        assert_eq!(client.count().await.unwrap(), 0);
        let stored = client
            .create(PickupLocationCreate { name: "Bakery".to_string() })
            .await
            .unwrap();
        assert_eq!(stored.name, "Bakery");
        assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_mismatch_drops_responder() {
        let mut mock = MockClient::<PickupLocation>::new();
        mock.expect_count().return_ok(3);

        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
