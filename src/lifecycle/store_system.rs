use crate::clients::{OrderClient, PickupLocationClient, ProductClient, UserClient};
use tracing::{error, info};

/// Owns the running stores the demo data is written to.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all store actors
/// - **Dependency Wiring**: The order store looks up users, products and pickup
///   locations, so it is started with their clients
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new();
///
/// let outcome = DataGenerator::for_system(&system).load_data().await?;
/// let orders = system.order_client.list().await?;
///
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub pickup_location_client: PickupLocationClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns every store in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new();
        let (product_actor, product_client) = crate::product_actor::new();
        let (pickup_location_actor, pickup_location_client) = crate::pickup_location_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let pickup_location_handle = tokio::spawn(pickup_location_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((
            user_client.clone(),
            product_client.clone(),
            pickup_location_client.clone(),
        )));

        Self {
            user_client,
            product_client,
            pickup_location_client,
            order_client,
            handles: vec![
                user_handle,
                product_handle,
                pickup_location_handle,
                order_handle,
            ],
        }
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// Actors exit once the last client of their channel is gone, so any clones handed
    /// out (for example to a [`DataGenerator`](crate::demo_data::DataGenerator)) must
    /// be dropped first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down stores...");

        // The order actor holds clones of the other clients in its context; it stops
        // when the order client goes, releasing them.
        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.pickup_location_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
