use tracing::{error, info};
use crate::app_system::StoreConfig;
use crate::error::{Result, StoreError};
use crate::store::ElectronicStore;
use crate::store_actor::{StoreClient, StoreService};

/// The running store: one [`StoreService`] task plus a client to reach it.
///
/// Responsible for starting the actor and for shutting it down cleanly.
pub struct StoreSystem {
    pub client: StoreClient,
    handle: tokio::task::JoinHandle<ElectronicStore>,
}

impl StoreSystem {
    /// Starts an empty store named after `config.store_name`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_store(ElectronicStore::new(config.store_name.clone()), config.channel_capacity)
    }

    pub fn with_store(store: ElectronicStore, channel_capacity: usize) -> Self {
        info!(store = %store.name(), "Starting store system");
        let (service, client) = StoreService::new(store, channel_capacity.max(1));
        let handle = tokio::spawn(service.run());
        Self { client, handle }
    }

    /// Stops the service after pending requests and returns the final store state.
    pub async fn shutdown(self) -> Result<ElectronicStore> {
        info!("Shutting down system...");
        self.client.shutdown().await?;
        drop(self.client);

        match self.handle.await {
            Ok(store) => {
                info!("System shutdown complete.");
                Ok(store)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(StoreError::ActorCommunication(format!("Actor task failed: {}", e)))
            }
        }
    }
}
