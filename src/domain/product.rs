use std::fmt;
use crate::error::{Result, StoreError};

/// Electrical attributes shared by every appliance kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplianceSpec {
    pub wattage: u32,
    pub color: String,
    pub brand: String,
}

impl ApplianceSpec {
    pub fn new(wattage: u32, color: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            wattage,
            color: color.into(),
            brand: brand.into(),
        }
    }
}

/// The closed set of product variants a store can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Toaster oven, optionally with a convection fan.
    Oven {
        appliance: ApplianceSpec,
        convection: bool,
    },
    /// Any other appliance, described by its model name.
    Appliance {
        name: String,
        appliance: ApplianceSpec,
    },
    /// Free-form catalog item described only by its name.
    General { name: String },
}

impl ProductKind {
    fn appliance_spec(&self) -> Option<&ApplianceSpec> {
        match self {
            ProductKind::Oven { appliance, .. } | ProductKind::Appliance { appliance, .. } => Some(appliance),
            ProductKind::General { .. } => None,
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKind::Oven { appliance, convection } => {
                write!(f, "{} Toaster ", appliance.brand)?;
                if *convection {
                    write!(f, "with convection ")?;
                }
                write!(f, "({}, {} watts)", appliance.color, appliance.wattage)
            }
            ProductKind::Appliance { name, appliance } => {
                write!(f, "{} {} ({}, {} watts)", appliance.brand, name, appliance.color, appliance.wattage)
            }
            ProductKind::General { name } => write!(f, "{}", name),
        }
    }
}

/// Catalog identity of a product.
///
/// Derived from the immutable attributes only, so price changes and stock
/// movements never change which catalog entry a key refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey(ProductKind);

impl ProductKey {
    pub fn kind(&self) -> &ProductKind {
        &self.0
    }
}

impl From<ProductKind> for ProductKey {
    fn from(kind: ProductKind) -> Self {
        Self(kind)
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Represents a product in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    kind: ProductKind,
    price: f64,
    quantity: u32,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidPrice`] when `price` is negative or not finite.
    pub fn new(kind: ProductKind, price: f64, quantity: u32) -> Result<Self> {
        validate_price(price)?;
        Ok(Self { kind, price, quantity })
    }

    pub fn oven(
        price: f64,
        quantity: u32,
        wattage: u32,
        color: impl Into<String>,
        brand: impl Into<String>,
        convection: bool,
    ) -> Result<Self> {
        let appliance = ApplianceSpec::new(wattage, color, brand);
        Self::new(ProductKind::Oven { appliance, convection }, price, quantity)
    }

    pub fn appliance(
        name: impl Into<String>,
        price: f64,
        quantity: u32,
        wattage: u32,
        color: impl Into<String>,
        brand: impl Into<String>,
    ) -> Result<Self> {
        let appliance = ApplianceSpec::new(wattage, color, brand);
        Self::new(ProductKind::Appliance { name: name.into(), appliance }, price, quantity)
    }

    pub fn general(name: impl Into<String>, price: f64, quantity: u32) -> Result<Self> {
        Self::new(ProductKind::General { name: name.into() }, price, quantity)
    }

    pub fn key(&self) -> ProductKey {
        ProductKey(self.kind.clone())
    }

    /// Whether this product is the catalog entry identified by `key`.
    pub fn matches(&self, key: &ProductKey) -> bool {
        self.kind == key.0
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Current stock level.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn wattage(&self) -> Option<u32> {
        self.kind.appliance_spec().map(|a| a.wattage)
    }

    pub fn color(&self) -> Option<&str> {
        self.kind.appliance_spec().map(|a| a.color.as_str())
    }

    pub fn brand(&self) -> Option<&str> {
        self.kind.appliance_spec().map(|a| a.brand.as_str())
    }

    pub fn description(&self) -> String {
        self.kind.to_string()
    }

    pub fn set_price(&mut self, price: f64) -> Result<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Increases stock by `amount` and returns the new level.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidQuantity`] if the new level would overflow.
    pub fn add_quantity(&mut self, amount: u32) -> Result<u32> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or(StoreError::InvalidQuantity(amount))?;
        Ok(self.quantity)
    }

    /// Removes `amount` units from stock and returns the sale revenue.
    ///
    /// Stock is left untouched on any error.
    pub fn sell_units(&mut self, amount: u32) -> Result<f64> {
        if amount == 0 {
            return Err(StoreError::InvalidQuantity(amount));
        }
        if self.quantity < amount {
            return Err(StoreError::InsufficientStock {
                requested: amount,
                available: self.quantity,
            });
        }
        self.quantity -= amount;
        Ok(self.price * f64::from(amount))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

fn validate_price(price: f64) -> Result<()> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(StoreError::InvalidPrice(price))
    }
}
