use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// Implementors only provide access to the inner [`ResourceClient`] and the mapping
/// from [`FrameworkError`] into their own error type; `save`, `get`, `count` and
/// `list` come for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Persist a draft and return the stored entity.
    #[tracing::instrument(skip(self, params))]
    async fn save(&self, params: T::Create) -> Result<T, Self::Error> {
        tracing::trace!("Sending request");
        self.inner().create(params).await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::trace!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Number of stored entities.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }

    /// Every stored entity, in ID order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}

/// Recovers the entity's own error from a boxed [`FrameworkError::EntityError`].
///
/// Falls back to `fallback` with the error text when the box holds something else.
pub fn downcast_entity_error<E>(
    e: Box<dyn std::error::Error + Send + Sync>,
    fallback: fn(String) -> E,
) -> E
where
    E: std::error::Error + 'static,
{
    match e.downcast::<E>() {
        Ok(err) => *err,
        Err(other) => fallback(other.to_string()),
    }
}
