//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`StoreClient`] without running
//! a real [`StoreService`](crate::store_actor::StoreService).
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_sell`] to inspect each request and
//! answer it by hand.

use tokio::sync::mpsc;
use crate::domain::{Customer, ProductKey};
use crate::store_actor::{ServiceResponse, StoreClient, StoreRequest};

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a RegisterCustomer request
pub async fn expect_register(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<(Customer, ServiceResponse<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::RegisterCustomer { customer, respond_to }) => Some((customer, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SellProduct request
pub async fn expect_sell(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ProductKey, String, u32, ServiceResponse<f64>)> {
    match receiver.recv().await {
        Some(StoreRequest::SellProduct { key, customer_name, amount, respond_to }) => {
            Some((key, customer_name, amount, respond_to))
        }
        _ => None,
    }
}

/// Helper to verify that the next message is a Shutdown request
pub async fn expect_shutdown(receiver: &mut mpsc::Receiver<StoreRequest>) -> bool {
    matches!(receiver.recv().await, Some(StoreRequest::Shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;
    use crate::error::{ErrorKind, StoreError};

    #[tokio::test]
    async fn test_mock_client_sell() {
        let (client, mut receiver) = create_mock_client(10);
        let key = Product::general("Oven A", 50.0, 10).unwrap().key();

        let sell_key = key.clone();
        let sell_task = tokio::spawn(async move {
            client.sell_product(sell_key, "Alice".to_string(), 3).await
        });

        let (got_key, customer_name, amount, responder) = expect_sell(&mut receiver).await.expect("Expected SellProduct request");
        assert_eq!(got_key, key);
        assert_eq!(customer_name, "Alice");
        assert_eq!(amount, 3);
        responder.send(Ok(150.0)).unwrap();

        let result = sell_task.await.unwrap();
        assert_eq!(result.unwrap(), 150.0);
    }

    #[tokio::test]
    async fn test_mock_client_forwards_store_errors() {
        let (client, mut receiver) = create_mock_client(10);

        let register_task = tokio::spawn(async move {
            client.register_customer(Customer::new("Alice")).await
        });

        let (customer, responder) = expect_register(&mut receiver).await.expect("Expected RegisterCustomer request");
        assert_eq!(customer.name(), "Alice");
        responder.send(Err(StoreError::DuplicateCustomer("Alice".to_string()))).unwrap();

        let err = register_task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let revenue_task = tokio::spawn(async move { client.revenue().await });

        // Drop the request, and with it the reply channel.
        drop(receiver.recv().await);

        let err = revenue_task.await.unwrap().unwrap_err();
        assert!(matches!(err, StoreError::ActorCommunication(_)));
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let err = client.shutdown().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn test_shutdown_request() {
        let (client, mut receiver) = create_mock_client(10);
        client.shutdown().await.unwrap();
        assert!(expect_shutdown(&mut receiver).await);
    }
}
