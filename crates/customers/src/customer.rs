use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use checkout_core::{DomainError, DomainResult, Entity, impl_identity_by_id};
use checkout_products::Product;

/// Zip code of a customer's home address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(zip: impl Into<String>) -> Self {
        Self(zip.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZipCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ZipCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A customer visit.
///
/// Identity is the arrival time (`queued_at`), unique within one snapshot.
/// The cart is only mutable while the customer is being loaded; once the
/// customer is owned by a snapshot nothing hands out `&mut` access.
#[derive(Debug, Clone)]
pub struct Customer {
    queued_at: NaiveTime,
    zip_code: ZipCode,
    items_cart: HashMap<Product, u32>,
}

impl Customer {
    pub fn new(queued_at: NaiveTime, zip_code: impl Into<ZipCode>) -> Self {
        Self {
            queued_at,
            zip_code: zip_code.into(),
            items_cart: HashMap::new(),
        }
    }

    pub fn queued_at(&self) -> NaiveTime {
        self.queued_at
    }

    pub fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    pub fn items_cart(&self) -> &HashMap<Product, u32> {
        &self.items_cart
    }

    /// Add `number` units of `product`, accumulating onto an existing line.
    ///
    /// Zero quantities are refused, as is a line total that no longer fits
    /// in a `u32`. The cart is left untouched on error.
    pub fn add_to_cart(&mut self, product: Product, number: u32) -> DomainResult<()> {
        if number == 0 {
            return Err(DomainError::validation(format!(
                "customer queued at {} bought zero of product {}",
                self.queued_at,
                product.code()
            )));
        }

        let current = self.items_cart.get(&product).copied().unwrap_or(0);
        let total = current.checked_add(number).ok_or_else(|| {
            DomainError::validation(format!(
                "customer queued at {} bought too many of product {}",
                self.queued_at,
                product.code()
            ))
        })?;
        self.items_cart.insert(product, total);
        Ok(())
    }

    /// Builder-style [`Customer::add_to_cart`].
    pub fn with_item(mut self, product: Product, number: u32) -> DomainResult<Self> {
        self.add_to_cart(product, number)?;
        Ok(self)
    }

    /// Total number of units in the cart.
    pub fn total_items(&self) -> u64 {
        self.items_cart.values().map(|&n| u64::from(n)).sum()
    }

    /// Sum of quantity × unit price over the cart.
    pub fn total_bill(&self) -> f64 {
        self.items_cart
            .iter()
            .map(|(product, &number)| product.price() * f64::from(number))
            .sum()
    }
}

impl Entity for Customer {
    type Id = NaiveTime;

    fn id(&self) -> &Self::Id {
        &self.queued_at
    }
}

impl_identity_by_id!(Customer);

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "queuedAt: {}", self.queued_at)?;
        writeln!(f, "zipCode: {}", self.zip_code)?;
        write!(f, "Purchases:")?;

        // Cart order is unspecified; print by product code for stable output.
        let mut lines: Vec<(&Product, &u32)> = self.items_cart.iter().collect();
        lines.sort_by(|a, b| a.0.cmp(b.0));
        for (product, number) in lines {
            write!(f, "\n\t{product}: {number}")?;
        }
        writeln!(f)
    }
}
