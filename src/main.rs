use tracing::{error, info, Instrument};
use electronic_store::{setup_tracing, Customer, Product, StoreConfig, StoreSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StoreConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(store = %config.store_name, "Starting store demo");

    let system = StoreSystem::new(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("catalog_setup");
    let oven_key = async {
        info!("Listing products");
        let oven = client
            .add_product(Product::general("Oven A", 50.0, 10).map_err(|e| e.to_string())?)
            .await
            .map_err(|e| e.to_string())?;
        client
            .add_product(Product::oven(129.99, 4, 1500, "Silver", "Acme", true).map_err(|e| e.to_string())?)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(oven)
    }
    .instrument(span)
    .await?;

    client
        .register_customer(Customer::new("Alice"))
        .await
        .map_err(|e| e.to_string())?;

    // A second Alice is refused
    if let Err(e) = client.register_customer(Customer::new("Alice")).await {
        info!(error = %e, "Duplicate registration rejected");
    }

    let span = tracing::info_span!("sale");
    let sale = async {
        info!("Selling through the store service");
        client.sell_product(oven_key.clone(), "Alice".to_string(), 3).await
    }
    .instrument(span)
    .await;

    match sale {
        Ok(amount) => info!(amount, "Sale completed"),
        Err(e) => error!(error = %e, "Sale failed"),
    }

    for customer in client.top_customers(5).await.map_err(|e| e.to_string())? {
        info!(customer = %customer, "Top customer");
    }

    client
        .save_to_file(config.export_path.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(path = %config.export_path.display(), "Store exported");

    drop(client);
    let store = system.shutdown().await.map_err(|e| e.to_string())?;
    info!(revenue = store.revenue(), "Application completed successfully");
    Ok(())
}
