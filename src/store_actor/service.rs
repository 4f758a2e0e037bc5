use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::domain::{Customer, Product, ProductKey};
use crate::store::{report, ElectronicStore};
use super::client::StoreClient;
use super::messages::{ServiceResponse, StoreRequest};

/// Actor that owns an [`ElectronicStore`] and serializes all access to it.
pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    store: ElectronicStore,
}

impl StoreService {
    pub fn new(store: ElectronicStore, buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = StoreClient::new(sender);
        (service, client)
    }

    /// Processes requests until a `Shutdown` arrives or every client is
    /// dropped, then hands the store back.
    #[instrument(name = "store_service", skip(self), fields(store = %self.store.name()))]
    pub async fn run(mut self) -> ElectronicStore {
        info!("StoreService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::AddProduct { product, respond_to } => {
                    self.handle_add_product(product, respond_to);
                }
                StoreRequest::RegisterCustomer { customer, respond_to } => {
                    self.handle_register_customer(customer, respond_to);
                }
                StoreRequest::SearchProducts { query, min_price, max_price, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.search_products(&query, min_price, max_price)));
                }
                StoreRequest::AddStock { key, amount, respond_to } => {
                    let _ = respond_to.send(self.store.add_stock(&key, amount));
                }
                StoreRequest::UpdatePrice { key, price, respond_to } => {
                    let _ = respond_to.send(self.store.update_price(&key, price));
                }
                StoreRequest::SellProduct { key, customer_name, amount, respond_to } => {
                    self.handle_sell_product(key, customer_name, amount, respond_to);
                }
                StoreRequest::TopCustomers { count, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.top_customers(count)));
                }
                StoreRequest::GetProduct { key, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.product(&key).cloned()));
                }
                StoreRequest::GetCustomer { name, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.customer(&name).cloned()));
                }
                StoreRequest::GetRevenue { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.revenue()));
                }
                StoreRequest::ExportDocument { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.export_document()));
                }
                StoreRequest::SaveToFile { path, respond_to } => {
                    self.handle_save_to_file(path, respond_to).await;
                }
                StoreRequest::Shutdown => {
                    info!("StoreService shutting down");
                    break;
                }
            }
        }
        info!("StoreService stopped");
        self.store
    }

    #[instrument(fields(product = %product), skip(self, product, respond_to))]
    fn handle_add_product(&mut self, product: Product, respond_to: ServiceResponse<ProductKey>) {
        debug!("Processing add_product request");
        let _ = respond_to.send(self.store.add_product(product));
    }

    #[instrument(fields(customer = %customer.name()), skip(self, customer, respond_to))]
    fn handle_register_customer(&mut self, customer: Customer, respond_to: ServiceResponse<()>) {
        debug!("Processing register_customer request");
        let _ = respond_to.send(self.store.register_customer(customer));
    }

    #[instrument(fields(product = %key, customer = %customer_name), skip(self, key, customer_name, respond_to))]
    fn handle_sell_product(
        &mut self,
        key: ProductKey,
        customer_name: String,
        amount: u32,
        respond_to: ServiceResponse<f64>,
    ) {
        debug!("Processing sell_product request");
        let result = self.store.sell_product(&key, &customer_name, amount);
        if let Err(e) = &result {
            info!(error = %e, "Sale refused");
        }
        let _ = respond_to.send(result);
    }

    /// Renders in memory, then writes the whole document in one call.
    #[instrument(fields(path = %path.display()), skip(self, path, respond_to))]
    async fn handle_save_to_file(&self, path: PathBuf, respond_to: ServiceResponse<()>) {
        debug!("Processing save_to_file request");
        let document = self.store.export_document();
        let result = tokio::fs::write(&path, document)
            .await
            .map_err(|source| report::write_failed(&path, source));
        if result.is_ok() {
            info!("Store exported");
        }
        let _ = respond_to.send(result);
    }
}
