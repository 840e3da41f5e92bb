//! # Core Store Framework
//!
//! This module defines the generic building blocks for the entity stores.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all persisted resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns one in-memory store.
//! - [`ResourceClient`]: The generic client for communicating with a store actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, Conflict).

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and Drafts)
// =============================================================================

/// Trait that any resource entity must implement to be stored by a [`ResourceActor`].
///
/// # Architecture Note
/// Every entity kind (User, Product, PickupLocation, Order) satisfies the same contract,
/// so the store loop is written *once* and reused for all of them.
///
/// Associated types keep the drafts apart: a `User` store only accepts a `UserCreate`
/// draft, and the compiler rejects a `ProductCreate` sent to it.
///
/// Entities are write-once. A draft goes in, the actor assigns the identity, runs the
/// `on_create` hook and hands back the persisted value. There is no update or delete.
///
/// # Async & Context
/// `on_create` is async so an entity can consult other stores while being validated.
/// The `Context` type is injected when the actor is started (`run(context)`), not when
/// it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Built from the store's sequential counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (the unsaved draft).
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the assigned ID and the draft.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Natural key that must be unique within the store, if the entity has one.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Called after the entity is built and before it is inserted.
    /// Returning an error rejects the write; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate key: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The store is append-only, so the vocabulary is small:
///
/// - **Create**: persist a draft, answer with the stored entity.
/// - **Get**: fetch one entity by ID.
/// - **Count**: number of stored entities (used for the "store is empty" guard).
/// - **List**: every stored entity in ID order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Requests are handled one at a time, so the
/// store needs no `Mutex`; exclusive ownership inside the task is enough.
///
/// IDs come from a `u32` counter starting at 1, and the store is a `BTreeMap`,
/// so `List` returns entities in insertion order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    unique_keys: HashSet<String>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client
    /// calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            unique_keys: HashSet::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every `on_create` call. This allows entities
    /// to reach other stores that were created *after* this actor was instantiated but
    /// *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "bakery_seed::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(_) => debug!(entity_type, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Count { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Count");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        let key = item.unique_key();
        if let Some(key) = &key {
            if self.unique_keys.contains(key) {
                return Err(FrameworkError::Conflict(key.clone()));
            }
        }

        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;

        // The counter only advances for accepted writes, so IDs stay gapless.
        self.next_id += 1;
        if let Some(key) = key {
            self.unique_keys.insert(key);
        }
        self.store.insert(id, item.clone());
        Ok(item)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
///
/// Holds only a sender, so cloning is cheap and clones can be shared freely.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Count { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error: {0}")]
    struct TagError(String);

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = u32;
        type Create = TagCreate;
        type Context = ();
        type Error = TagError;

        fn from_create_params(id: u32, params: TagCreate) -> Result<Self, Self::Error> {
            Ok(Self { id, label: params.label })
        }

        fn unique_key(&self) -> Option<String> {
            Some(self.label.clone())
        }

        async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
            if self.label.is_empty() {
                return Err(TagError("empty label".into()));
            }
            Ok(())
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_resource_actor_append_only_store() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run(()));

        // 1. Create assigns sequential ids and returns the stored value
        let first = client.create(TagCreate { label: "a".into() }).await.unwrap();
        let second = client.create(TagCreate { label: "b".into() }).await.unwrap();
        assert_eq!(first, Tag { id: 1, label: "a".into() });
        assert_eq!(second.id, 2);

        // 2. Duplicate natural key is rejected
        let dup = client.create(TagCreate { label: "a".into() }).await;
        assert!(matches!(dup, Err(FrameworkError::Conflict(key)) if key == "a"));

        // 3. Hook failure is rejected and does not consume an id
        let bad = client.create(TagCreate { label: String::new() }).await;
        assert!(matches!(bad, Err(FrameworkError::EntityError(_))));
        let third = client.create(TagCreate { label: "c".into() }).await.unwrap();
        assert_eq!(third.id, 3);

        // 4. Read side
        assert_eq!(client.count().await.unwrap(), 3);
        assert_eq!(client.get(2).await.unwrap(), Some(second));
        assert_eq!(client.get(99).await.unwrap(), None);
        let labels: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Tag>::new(1);
        drop(actor);
        let result = client.count().await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
