//! The store: catalog, customer registry, sales and reporting.

pub(crate) mod report;
mod search;

pub use search::PriceRange;

use std::path::Path;
use tracing::{debug, info, instrument, warn};
use crate::domain::{Customer, Product, ProductKey};
use crate::error::{Result, StoreError};

/// An electronics store holding a product catalog and registered customers.
///
/// All operations are synchronous and take `&mut self` when they mutate; for
/// shared access run the store behind a [`StoreService`](crate::store_actor::StoreService).
#[derive(Debug, Clone)]
pub struct ElectronicStore {
    name: String,
    revenue: f64,
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl ElectronicStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revenue: 0.0,
            products: Vec::new(),
            customers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of every successful sale.
    pub fn revenue(&self) -> f64 {
        self.revenue
    }

    /// Catalog in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Registered customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn product(&self, key: &ProductKey) -> Option<&Product> {
        self.products.iter().find(|p| p.matches(key))
    }

    pub fn customer(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name() == name)
    }

    /// Adds a product to the catalog and returns its key.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateProduct`] if an entry with the same key
    /// or the same description is already listed.
    #[instrument(skip(self, product), fields(product = %product))]
    pub fn add_product(&mut self, product: Product) -> Result<ProductKey> {
        let key = product.key();
        let description = product.description();
        let duplicate = self
            .products
            .iter()
            .any(|p| p.matches(&key) || p.description() == description);
        if duplicate {
            warn!("Product already listed");
            return Err(StoreError::DuplicateProduct(description));
        }
        self.products.push(product);
        debug!(catalog_size = self.products.len(), "Product added");
        Ok(key)
    }

    /// Registers a customer.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateCustomer`] if the name is taken, and
    /// [`StoreError::CustomerHasHistory`] if the customer arrives with
    /// purchases the store never sold.
    #[instrument(skip(self, customer), fields(customer = %customer.name()))]
    pub fn register_customer(&mut self, customer: Customer) -> Result<()> {
        if self.customer(customer.name()).is_some() {
            warn!("Customer already registered");
            return Err(StoreError::DuplicateCustomer(customer.name().to_string()));
        }
        if customer.has_purchases() {
            warn!("Customer carries outside purchases");
            return Err(StoreError::CustomerHasHistory(customer.name().to_string()));
        }
        self.customers.push(customer);
        debug!(registry_size = self.customers.len(), "Customer registered");
        Ok(())
    }

    /// Products whose description contains `query` (case-insensitive) and
    /// whose price lies within the bounds. A negative bound is unbounded.
    pub fn search_products(&self, query: &str, min_price: f64, max_price: f64) -> Vec<Product> {
        self.search(query, PriceRange::from_bounds(min_price, max_price))
    }

    pub fn search(&self, query: &str, range: PriceRange) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.description().to_lowercase().contains(&needle))
            .filter(|p| range.contains(p.price()))
            .cloned()
            .collect()
    }

    /// Increases stock of a listed product and returns the new level.
    #[instrument(skip(self, key), fields(product = %key))]
    pub fn add_stock(&mut self, key: &ProductKey, amount: u32) -> Result<u32> {
        let product = self.product_mut(key)?;
        let level = product.add_quantity(amount)?;
        debug!(level, "Stock added");
        Ok(level)
    }

    /// Changes the price of a listed product. Past sales keep the price they were made at.
    #[instrument(skip(self, key), fields(product = %key))]
    pub fn update_price(&mut self, key: &ProductKey, price: f64) -> Result<()> {
        self.product_mut(key)?.set_price(price)?;
        debug!("Price updated");
        Ok(())
    }

    /// Sells `amount` units of a listed product to a registered customer and
    /// returns the sale amount.
    ///
    /// Checks run in order: product listed, customer registered, enough
    /// stock, non-zero amount, positive sale amount. The first failing check
    /// aborts the sale with nothing changed. On success stock, the customer's
    /// history and the store revenue are all updated.
    #[instrument(skip(self, key), fields(product = %key))]
    pub fn sell_product(&mut self, key: &ProductKey, customer_name: &str, amount: u32) -> Result<f64> {
        let product_idx = self
            .products
            .iter()
            .position(|p| p.matches(key))
            .ok_or_else(|| StoreError::ProductNotFound(key.to_string()))?;
        let customer_idx = self
            .customers
            .iter()
            .position(|c| c.name() == customer_name)
            .ok_or_else(|| StoreError::CustomerNotFound(customer_name.to_string()))?;

        let product = &mut self.products[product_idx];
        if product.quantity() < amount {
            warn!(requested = amount, available = product.quantity(), "Sale rejected");
            return Err(StoreError::InsufficientStock {
                requested: amount,
                available: product.quantity(),
            });
        }
        if amount == 0 {
            return Err(StoreError::InvalidQuantity(amount));
        }
        let quoted = product.price() * f64::from(amount);
        if quoted <= 0.0 {
            return Err(StoreError::NonPositiveSale(quoted));
        }

        // Stage the customer update; nothing is committed until stock has moved.
        let mut buyer = self.customers[customer_idx].clone();
        buyer.add_purchase(product, amount)?;
        let sale_amount = product.sell_units(amount)?;
        self.customers[customer_idx] = buyer;
        self.revenue += sale_amount;

        info!(amount, sale_amount, revenue = self.revenue, "Sale completed");
        Ok(sale_amount)
    }

    /// Customers ranked by total spent, highest first; ties keep registration order.
    pub fn top_customers(&self, count: usize) -> Vec<Customer> {
        if count == 0 || self.customers.is_empty() {
            return Vec::new();
        }
        let mut ranked = self.customers.clone();
        ranked.sort_by(|a, b| b.total_purchases().total_cmp(&a.total_purchases()));
        ranked.truncate(count);
        ranked
    }

    /// Plain-text dump of the store, as written by [`save_to_file`](Self::save_to_file).
    pub fn export_document(&self) -> String {
        report::render(self)
    }

    /// Writes [`export_document`](Self::export_document) to `path`, replacing any existing file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = self.export_document();
        std::fs::write(path, document).map_err(|source| report::write_failed(path, source))?;
        info!("Store exported");
        Ok(())
    }

    fn product_mut(&mut self, key: &ProductKey) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.matches(key))
            .ok_or_else(|| StoreError::ProductNotFound(key.to_string()))
    }
}
