//! # Catalog Framework
//!
//! Building blocks for a media catalogue made of independent resources (movies, books,
//! series, ...). Every resource lives in its own actor and shares the same plumbing:
//!
//! 1. **Results** ([`Outcome`], [`Event`]) - the severity lattice that validation speaks
//! 2. **Validation** ([`Validator`], [`Checks`]) - collect every problem, reject once
//! 3. **Queries** ([`Filter`], [`Specification`], [`PagingFilter`]) - optional string
//!    filters compiled into predicates, plus 1-based paging
//! 4. **Runtime** ([`ResourceActor`], [`ResourceClient`]) - the store and query executor
//!    of one resource, reached through message passing
//!
//! A resource writes its business rules once, in its [`CatalogEntity`] impl and its
//! validator. Creation, lookup, search and duplication come from the framework.
//!
//! ## Example
//!
//! ```rust
//! use catalog_framework::{CatalogEntity, FieldValue, InputError, Record, ResourceActor};
//! use catalog_framework::{Criterion, Filter, PagingFilter};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Genre { id: u32, name: String }
//!
//! impl Record for Genre {
//!     fn field(&self, name: &str) -> Option<FieldValue> {
//!         (name == "name").then(|| FieldValue::from(self.name.as_str()))
//!     }
//! }
//!
//! #[async_trait]
//! impl CatalogEntity for Genre {
//!     const KIND: &'static str = "GENRE";
//!     type Id = u32; type Create = String; type Update = String; type Context = ();
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, name: String) -> Result<Self, InputError> { Ok(Self { id, name }) }
//!     fn duplicate(&self, id: u32) -> Self { Self { id, ..self.clone() } }
//!     async fn on_update(&mut self, name: String, _: &()) -> Result<(), InputError> {
//!         self.name = name;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct GenreFilter { name: Option<String> }
//! impl Filter<Genre> for GenreFilter {
//!     fn criteria(&self) -> Vec<Criterion> { vec![Criterion::eq("name", self.name.as_deref())] }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Genre>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.create("Jazz".into()).await.unwrap();
//!     client.create("Blues".into()).await.unwrap();
//!
//!     let spec = GenreFilter { name: Some("Blues".into()) }.to_specification().unwrap();
//!     let page = client
//!         .search(Some(spec), PagingFilter::default().to_pageable(None))
//!         .await
//!         .unwrap();
//!     assert_eq!(page.total, 1);
//!     assert_eq!(page.items[0].id, 2);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected in `run(context)`, not at construction. A book actor is
//! started with the author and publisher clients it checks against, whatever order the
//! actors were created in.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and owns its store
//! - Messages are processed **sequentially** within an actor, so the store has no lock
//! - Different resources run in **parallel**
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`ResourceClient`] from queued expectations, so
//! code around a client can be tested without an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod filter;
pub mod input_error;
pub mod message;
pub mod mock;
pub mod outcome;
pub mod paging;
pub mod record;
pub mod telemetry;
pub mod validator;

#[doc(hidden)]
pub use paste;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::CatalogEntity;
pub use error::FrameworkError;
pub use filter::{Criterion, Filter, Operation, Specification};
pub use input_error::{InputError, DEFAULT_STATUS, EMPTY_FILTER, NOT_FOUND_STATUS};
pub use message::{ResourceRequest, Response};
pub use outcome::{Event, Outcome, Severity, Status};
pub use paging::{Direction, Page, PageRequest, PagingFilter, Sort, DEFAULT_PAGE_SIZE};
pub use record::{FieldValue, Record};
pub use telemetry::setup_tracing;
pub use validator::{AllOf, Checks, Validator};
