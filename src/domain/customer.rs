use std::fmt;
use indexmap::IndexMap;
use crate::domain::{Product, ProductKey};
use crate::error::{Result, StoreError};

/// One line of a customer's purchase history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseLine {
    pub key: ProductKey,
    /// Product description, kept for display.
    pub description: String,
    /// Cumulative quantity bought.
    pub quantity: u32,
}

/// Represents a registered customer of a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    purchases: IndexMap<ProductKey, PurchaseLine>,
    total_spent: f64,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purchases: IndexMap::new(),
            total_spent: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total amount spent, priced at the time of each sale.
    pub fn total_purchases(&self) -> f64 {
        self.total_spent
    }

    /// Records a purchase of `quantity` units at the product's current price.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidQuantity`] when `quantity` is zero or the
    /// cumulative quantity for the product would overflow. Nothing is
    /// recorded on error.
    pub fn add_purchase(&mut self, product: &Product, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        let key = product.key();
        let cumulative = self
            .quantity_purchased(&key)
            .checked_add(quantity)
            .ok_or(StoreError::InvalidQuantity(quantity))?;
        self.purchases
            .entry(key.clone())
            .or_insert_with(|| PurchaseLine {
                key,
                description: product.description(),
                quantity: 0,
            })
            .quantity = cumulative;
        self.total_spent += product.price() * f64::from(quantity);
        Ok(())
    }

    /// Snapshot of the purchase history, in first-purchase order.
    pub fn purchase_history(&self) -> Vec<PurchaseLine> {
        self.purchases.values().cloned().collect()
    }

    pub fn quantity_purchased(&self, key: &ProductKey) -> u32 {
        self.purchases.get(key).map_or(0, |line| line.quantity)
    }

    pub fn has_purchases(&self) -> bool {
        !self.purchases.is_empty()
    }

    pub(crate) fn purchase_lines(&self) -> impl Iterator<Item = &PurchaseLine> {
        self.purchases.values()
    }

    /// Human-readable purchase history, one `<qty> x <description>` line per product.
    pub fn history_report(&self) -> String {
        let mut report = format!("Purchase history for {}:\n", self.name);
        for line in self.purchases.values() {
            report.push_str(&format!("{} x {}\n", line.quantity, line.description));
        }
        report
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} who has spent ${:.2}", self.name, self.total_spent)
    }
}
