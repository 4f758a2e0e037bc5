//! Single-writer actor around [`ElectronicStore`](crate::store::ElectronicStore).
//!
//! One task owns the store and handles requests one at a time, so every store
//! operation runs with exclusive access. Callers talk to it through a
//! cloneable [`StoreClient`].

mod client;
mod messages;
mod service;

pub use client::StoreClient;
pub use messages::{ServiceResponse, StoreRequest};
pub use service::StoreService;
