use crate::clients::ProductClient;
use crate::config::StoreConfig;
use crate::model::Product;
use crate::product_actor;
use collection_actor::storage::CollectionStorage;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// The running product store: one actor task and the client that talks to it.
///
/// # Example
///
/// ```rust
/// use product_store::config::StoreConfig;
/// use product_store::lifecycle::ProductSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dir = tempfile::tempdir()?;
///     let system = ProductSystem::open(&StoreConfig::new(dir.path().join("products.json")));
///
///     assert!(system.product_client.list_products().await?.is_empty());
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    handle: JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns a Product actor over the JSON file in `config`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn open(config: &StoreConfig) -> Self {
        info!(path = %config.path.display(), buffer_size = config.buffer_size, "Opening product store");
        let (actor, product_client) = product_actor::open(config);
        let handle = tokio::spawn(actor.run());

        Self {
            product_client,
            handle,
        }
    }

    /// Spawns a Product actor over any storage backend.
    pub fn with_storage<S>(storage: S, buffer_size: usize) -> Self
    where
        S: CollectionStorage<Product>,
    {
        let (actor, product_client) = product_actor::new(storage, buffer_size);
        let handle = tokio::spawn(actor.run());

        Self {
            product_client,
            handle,
        }
    }

    /// Drops the client and waits for the actor to drain its queue and exit.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        drop(self.product_client);
        self.handle.await?;

        info!("Product store shut down");
        Ok(())
    }
}
