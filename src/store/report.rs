use std::path::Path;
use tracing::error;
use crate::error::StoreError;
use super::ElectronicStore;

/// Renders the export document for `store`.
///
/// ```text
/// Store Name: <name>
/// Revenue: <revenue>
///
/// Products:
/// <description>
///
/// Customers:
/// <name> who has spent $<total>
/// Purchase History:
/// <description> x <quantity>
/// ```
pub(super) fn render(store: &ElectronicStore) -> String {
    let mut doc = format!("Store Name: {}\n", store.name());
    doc.push_str(&format!("Revenue: {:.2}\n", store.revenue()));

    doc.push_str("\nProducts:\n");
    for product in store.products() {
        doc.push_str(&format!("{}\n", product));
    }

    doc.push_str("\nCustomers:\n");
    for customer in store.customers() {
        doc.push_str(&format!("{}\n", customer));
        if customer.has_purchases() {
            doc.push_str("Purchase History:\n");
            for line in customer.purchase_lines() {
                doc.push_str(&format!("{} x {}\n", line.description, line.quantity));
            }
        }
    }
    doc
}

/// Maps a failed export write to [`StoreError::Io`], logging it once.
///
/// Shared by the blocking and the actor export paths.
pub(crate) fn write_failed(path: &Path, source: std::io::Error) -> StoreError {
    error!(path = %path.display(), error = %source, "Export failed");
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
