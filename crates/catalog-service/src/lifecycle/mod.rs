//! # Catalogue Lifecycle
//!
//! Starting, wiring and stopping the twelve resource actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them in `run(context)`:
//!
//! ```rust,ignore
//! let (author_actor, authors) = ResourceActor::<Author>::new(buffer);
//! let (book_actor, books) = ResourceActor::<Book>::new(buffer);
//!
//! tokio::spawn(author_actor.run(()));
//! tokio::spawn(book_actor.run((authors.clone(), publishers.clone())));
//! ```
//!
//! The dependency graph is acyclic (book → author/publisher, music → artist,
//! game → platform), so closing every facade is enough to stop all actors: a
//! dependent actor stops first and its context, holding the dependency's client,
//! goes with it.
//!
//! ## Observability
//!
//! Call [`setup_tracing`] once before [`CatalogSystem::new`]:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and writes
//! RUST_LOG=debug cargo run     # payloads and compiled filters
//! ```

mod catalog_system;

pub use catalog_framework::telemetry::setup_tracing;
pub use catalog_system::*;
