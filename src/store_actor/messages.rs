use std::path::PathBuf;
use tokio::sync::oneshot;
use crate::domain::{Customer, Product, ProductKey};
use crate::error::Result;

/// Reply channel carried by every request.
pub type ServiceResponse<T> = oneshot::Sender<Result<T>>;

/// Typed messages understood by [`StoreService`](super::StoreService). Each
/// variant carries its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum StoreRequest {
    AddProduct {
        product: Product,
        respond_to: ServiceResponse<ProductKey>,
    },
    RegisterCustomer {
        customer: Customer,
        respond_to: ServiceResponse<()>,
    },
    SearchProducts {
        query: String,
        min_price: f64,
        max_price: f64,
        respond_to: ServiceResponse<Vec<Product>>,
    },
    AddStock {
        key: ProductKey,
        amount: u32,
        respond_to: ServiceResponse<u32>,
    },
    UpdatePrice {
        key: ProductKey,
        price: f64,
        respond_to: ServiceResponse<()>,
    },
    SellProduct {
        key: ProductKey,
        customer_name: String,
        amount: u32,
        respond_to: ServiceResponse<f64>,
    },
    TopCustomers {
        count: usize,
        respond_to: ServiceResponse<Vec<Customer>>,
    },
    GetProduct {
        key: ProductKey,
        respond_to: ServiceResponse<Option<Product>>,
    },
    GetCustomer {
        name: String,
        respond_to: ServiceResponse<Option<Customer>>,
    },
    GetRevenue {
        respond_to: ServiceResponse<f64>,
    },
    ExportDocument {
        respond_to: ServiceResponse<String>,
    },
    SaveToFile {
        path: PathBuf,
        respond_to: ServiceResponse<()>,
    },
    Shutdown,
}
