//! Catalog entries and customers. Pure data with no store or actor concerns.

pub mod product;
pub mod customer;

pub use product::*;
pub use customer::*;
