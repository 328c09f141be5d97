//! # Generic Client
//!
//! This module defines the generic client for communicating with resource actors.

use crate::entity::CatalogEntity;
use crate::error::FrameworkError;
use crate::filter::Specification;
use crate::message::ResourceRequest;
use crate::paging::{Page, PageRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// The client holds only a sender, so cloning is cheap and clones can be shared
/// across tasks. Every method sends one request and awaits its one-shot reply.
#[derive(Clone)]
pub struct ResourceClient<T: CatalogEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: CatalogEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Runs the query executor. `None` lists everything.
    pub async fn search(
        &self,
        spec: Option<Specification<T>>,
        page: PageRequest,
    ) -> Result<Page<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Search {
            spec,
            page,
            respond_to,
        })
        .await
    }

    pub async fn duplicate(&self, id: T::Id) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Duplicate { id, respond_to })
            .await
    }
}
