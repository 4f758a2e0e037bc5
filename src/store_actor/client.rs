use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{Customer, Product, ProductKey};
use crate::error::{Result, StoreError};
use super::messages::StoreRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))?;

                response.await.map_err(|_| StoreError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

/// Cloneable handle to a running [`StoreService`](super::StoreService).
#[derive(Clone, Debug)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<()> {
        debug!("Sending shutdown");
        self.sender
            .send(StoreRequest::Shutdown)
            .await
            .map_err(|_| StoreError::ActorCommunication("Actor closed".to_string()))
    }
}

client_method!(StoreClient => fn add_product(product: Product) -> ProductKey as StoreRequest::AddProduct);
client_method!(StoreClient => fn register_customer(customer: Customer) -> () as StoreRequest::RegisterCustomer);
client_method!(StoreClient => fn search_products(query: String, min_price: f64, max_price: f64) -> Vec<Product> as StoreRequest::SearchProducts);
client_method!(StoreClient => fn add_stock(key: ProductKey, amount: u32) -> u32 as StoreRequest::AddStock);
client_method!(StoreClient => fn update_price(key: ProductKey, price: f64) -> () as StoreRequest::UpdatePrice);
client_method!(StoreClient => fn sell_product(key: ProductKey, customer_name: String, amount: u32) -> f64 as StoreRequest::SellProduct);
client_method!(StoreClient => fn top_customers(count: usize) -> Vec<Customer> as StoreRequest::TopCustomers);
client_method!(StoreClient => fn get_product(key: ProductKey) -> Option<Product> as StoreRequest::GetProduct);
client_method!(StoreClient => fn get_customer(name: String) -> Option<Customer> as StoreRequest::GetCustomer);
client_method!(StoreClient => fn revenue() -> f64 as StoreRequest::GetRevenue);
client_method!(StoreClient => fn export_document() -> String as StoreRequest::ExportDocument);
client_method!(StoreClient => fn save_to_file(path: PathBuf) -> () as StoreRequest::SaveToFile);
