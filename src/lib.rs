//! # Electronic Store
//!
//! An in-memory retail inventory: a store lists products, registers
//! customers, sells stock to them, and can dump its state to a text file.
//!
//! - [`ElectronicStore`] is the synchronous core: catalog, customer registry,
//!   sales, search, top-customer ranking and export.
//! - [`StoreService`] / [`StoreClient`] run a store behind a single-writer
//!   actor so it can be shared between tasks.
//! - [`StoreSystem`] starts and stops that actor; [`setup_tracing`] and
//!   [`StoreConfig`] cover logging and settings.
//!
//! ```no_run
//! use electronic_store::{Customer, ElectronicStore, Product};
//!
//! let mut store = ElectronicStore::new("TechMart");
//! let oven = store.add_product(Product::general("Oven A", 50.0, 10)?)?;
//! store.register_customer(Customer::new("Alice"))?;
//! store.sell_product(&oven, "Alice", 3)?;
//! store.save_to_file("techmart.txt")?;
//! # Ok::<(), electronic_store::StoreError>(())
//! ```

pub mod app_system;
pub mod domain;
pub mod error;
pub mod store;
pub mod store_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, StoreConfig, StoreSystem};
pub use domain::{ApplianceSpec, Customer, Product, ProductKey, ProductKind, PurchaseLine};
pub use error::{ErrorKind, Result, StoreError};
pub use store::{ElectronicStore, PriceRange};
pub use store_actor::{StoreClient, StoreService};
