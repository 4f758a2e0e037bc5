use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product already in catalog: {0}")]
    DuplicateProduct(String),
    #[error("Customer already registered: {0}")]
    DuplicateCustomer(String),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Customer has purchases from outside this store: {0}")]
    CustomerHasHistory(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("Sale amount must be positive, got {0:.2}")]
    NonPositiveSale(f64),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

/// Coarse failure categories, for callers that only need to branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InsufficientStock,
    InvalidQuantity,
    InvalidArgument,
    Io,
    Unavailable,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::DuplicateProduct(_) | StoreError::DuplicateCustomer(_) => ErrorKind::DuplicateKey,
            StoreError::ProductNotFound(_) | StoreError::CustomerNotFound(_) => ErrorKind::NotFound,
            StoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            StoreError::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            StoreError::InvalidPrice(_)
            | StoreError::NonPositiveSale(_)
            | StoreError::CustomerHasHistory(_) => ErrorKind::InvalidArgument,
            StoreError::Io { .. } => ErrorKind::Io,
            StoreError::ActorCommunication(_) => ErrorKind::Unavailable,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
