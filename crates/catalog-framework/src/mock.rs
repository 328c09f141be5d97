//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running actor. It lets you test the
//! logic *around* a client (validation, error mapping, paging defaults) fast and
//! deterministically.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real store and search |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//!
//! A request that was never expected makes the mock panic. A facade that must
//! *not* reach the actor (a rejected validation) is therefore tested with a mock
//! holding no expectations at all.
//!
//! ```rust
//! use catalog_framework::mock::MockClient;
//! use catalog_framework::{CatalogEntity, FieldValue, InputError, Record};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Genre { id: u32, name: String }
//! impl Record for Genre {
//!     fn field(&self, _: &str) -> Option<FieldValue> { None }
//! }
//!
//! #[async_trait]
//! impl CatalogEntity for Genre {
//!     const KIND: &'static str = "GENRE";
//!     type Id = u32; type Create = String; type Update = String; type Context = ();
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, name: String) -> Result<Self, InputError> { Ok(Self { id, name }) }
//!     fn duplicate(&self, id: u32) -> Self { Self { id, ..self.clone() } }
//!     async fn on_update(&mut self, name: String, _: &()) -> Result<(), InputError> { self.name = name; Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Genre>::new();
//!     mock.expect_get(1).return_ok(Some(Genre { id: 1, name: "Jazz".into() }));
//!
//!     let genre = mock.client().get(1).await.unwrap();
//!     assert_eq!(genre.unwrap().name, "Jazz");
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::paging::Page;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to answer it with.
enum Expectation<T: CatalogEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Search {
        response: Result<Page<T>, FrameworkError>,
    },
    Duplicate {
        response: Result<T::Id, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<(Option<<T as CatalogEntity>::Id>, Expectation<T>)>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: CatalogEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: CatalogEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                let Some((expected_id, expectation)) = next else {
                    panic!("Unexpected request: no expectation left for {request:?}");
                };

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Expectation::Get { response }) => {
                        assert_id(expected_id, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Expectation::Create { response }) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Expectation::Update { response },
                    ) => {
                        assert_id(expected_id, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Expectation::Delete { response }) => {
                        assert_id(expected_id, &id);
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Search { respond_to, .. }, Expectation::Search { response }) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Duplicate { id, respond_to },
                        Expectation::Duplicate { response },
                    ) => {
                        assert_id(expected_id, &id);
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Expectation mismatch for {request:?}");
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

    fn expect(&mut self, id: Option<T::Id>) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<T> {
        GetExpectation(self.expect(Some(id)))
    }

    pub fn expect_create(&mut self) -> CreateExpectation<T> {
        CreateExpectation(self.expect(None))
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectation<T> {
        UpdateExpectation(self.expect(Some(id)))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectation<T> {
        DeleteExpectation(self.expect(Some(id)))
    }

    pub fn expect_search(&mut self) -> SearchExpectation<T> {
        SearchExpectation(self.expect(None))
    }

    pub fn expect_duplicate(&mut self, id: T::Id) -> DuplicateExpectation<T> {
        DuplicateExpectation(self.expect(Some(id)))
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

fn assert_id<I: PartialEq + std::fmt::Debug>(expected: Option<I>, actual: &I) {
    if let Some(expected) = expected {
        assert_eq!(&expected, actual, "request for unexpected id");
    }
}

struct ExpectationBuilder<T: CatalogEntity> {
    id: Option<T::Id>,
    expectations: Expectations<T>,
}

impl<T: CatalogEntity> ExpectationBuilder<T> {
    fn push(self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.id, expectation));
    }
}

macro_rules! expectation_builder {
    ($name:ident, $variant:ident, $ok:ty) => {
        #[doc = concat!("Builder for `", stringify!($variant), "` expectations.")]
        pub struct $name<T: CatalogEntity>(ExpectationBuilder<T>);

        impl<T: CatalogEntity> $name<T> {
            /// Sets the expectation to return a successful result.
            pub fn return_ok(self, value: $ok) {
                self.0.push(Expectation::$variant { response: Ok(value) });
            }

            /// Sets the expectation to return an error.
            pub fn return_err(self, error: FrameworkError) {
                self.0.push(Expectation::$variant {
                    response: Err(error),
                });
            }
        }
    };
}

expectation_builder!(GetExpectation, Get, Option<T>);
expectation_builder!(CreateExpectation, Create, T::Id);
expectation_builder!(UpdateExpectation, Update, T);
expectation_builder!(DeleteExpectation, Delete, ());
expectation_builder!(SearchExpectation, Search, Page<T>);
expectation_builder!(DuplicateExpectation, Duplicate, T::Id);

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on, for asserting request contents.
pub fn create_mock_client<T: CatalogEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, crate::message::Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Search request.
pub async fn expect_search<T: CatalogEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Option<crate::filter::Specification<T>>,
    crate::paging::PageRequest,
    crate::message::Response<Page<T>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Search {
            spec,
            page,
            respond_to,
        }) => Some((spec, page, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_error::InputError;
    use crate::paging::PageRequest;
    use crate::record::{FieldValue, Record};
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Studio {
        id: u32,
        name: String,
    }

    impl Record for Studio {
        fn field(&self, name: &str) -> Option<FieldValue> {
            (name == "name").then(|| FieldValue::from(self.name.as_str()))
        }
    }

    #[async_trait]
    impl CatalogEntity for Studio {
        const KIND: &'static str = "STUDIO";
        type Id = u32;
        type Create = String;
        type Update = String;
        type Context = ();

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, name: String) -> Result<Self, InputError> {
            Ok(Self { id, name })
        }

        fn duplicate(&self, id: u32) -> Self {
            Self { id, ..self.clone() }
        }

        async fn on_update(&mut self, name: String, _ctx: &()) -> Result<(), InputError> {
            self.name = name;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Studio>(10);

        let task = tokio::spawn(async move { client.create("Ghibli".to_string()).await });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        assert_eq!(params, "Ghibli");
        responder.send(Ok(4)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_search_expectation() {
        let mut mock = MockClient::<Studio>::new();
        mock.expect_search().return_ok(Page {
            items: vec![Studio {
                id: 1,
                name: "A24".to_string(),
            }],
            total: 1,
            index: 0,
            size: 50,
        });

        let page = mock.client().search(None, PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "A24");
        mock.verify();
    }

    #[tokio::test]
    async fn test_error_injection() {
        let mut mock = MockClient::<Studio>::new();
        mock.expect_duplicate(9)
            .return_err(FrameworkError::NotFound("9".to_string()));

        let err = mock.client().duplicate(9).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("9".to_string()));
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Studio>::new();
        mock.expect_delete(1).return_ok(());
        mock.verify();
    }
}
