//! # CatalogEntity Trait
//!
//! The `CatalogEntity` trait is the contract every catalog resource (Movie, Book,
//! Series, ...) implements to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the id and request types, exposes the entity as a [`Record`] for the
//! query executor, and provides async lifecycle hooks.
//!
//! # Architecture Note
//! The actor loop, the store, searching and duplication are written *once* in
//! the framework. A resource only says how it is built from a request, how an
//! update request changes it and how it is copied.
//!
//! Associated types keep the plumbing type safe: a `Movie` actor accepts a
//! `MovieChange`, never a `BookChange`.
//!
//! # Provided Methods (Hooks)
//! - [`CatalogEntity::on_create`]
//! - [`CatalogEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use crate::input_error::InputError;
use crate::record::Record;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any catalog resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they can consult other actors (a book checks that its authors
/// exist). The `Context` associated type carries those dependencies; it is injected
/// in `run()` rather than at construction, so actors can be wired in any order.
///
/// # Errors
/// Hooks reject with an [`InputError`], the same shape validators use, so the
/// boundary has a single path for everything a client can fix.
#[async_trait]
pub trait CatalogEntity: Record + Clone + Debug + Send + Sync + 'static {
    /// Upper-case resource name used in event codes, e.g. `"MOVIE"`.
    const KIND: &'static str;

    /// The unique identifier. Generated by the actor from a `u32` counter.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the id and the create request.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, InputError>;

    /// A copy of `self` stored under `id`.
    fn duplicate(&self, id: Self::Id) -> Self;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), InputError> {
        Ok(())
    }

    /// Called when an update request is received. The entity changes itself.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context) -> Result<(), InputError>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), InputError> {
        Ok(())
    }
}

/// Declares a `u32`-backed id newtype for a catalog resource.
///
/// `catalog_id!(Movie, "movie")` defines `MovieId`, displayed as `movie_7`.
#[macro_export]
macro_rules! catalog_id {
    ($resource:ident, $prefix:literal) => {
        $crate::paste::paste! {
            #[doc = "Type-safe identifier for " $resource " resources."]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            pub struct [<$resource Id>](pub u32);

            impl From<u32> for [<$resource Id>] {
                fn from(id: u32) -> Self {
                    Self(id)
                }
            }

            impl std::fmt::Display for [<$resource Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!($prefix, "_{}"), self.0)
                }
            }
        }
    };
}
