//! Immutable checkout snapshot: catalog, customers and opening hours.

use std::collections::BTreeSet;

use chrono::NaiveTime;

use checkout_core::{DomainError, DomainResult};
use checkout_customers::Customer;
use checkout_products::Product;

/// One run's worth of checkout data.
///
/// Invariants (checked by [`Snapshot::new`]):
/// - `open_time <= closing_time`
/// - product codes are unique, arrival times are unique
/// - every product in any cart exists in the catalog with the same
///   description and price
#[derive(Debug, Clone)]
pub struct Snapshot {
    name: String,
    open_time: NaiveTime,
    closing_time: NaiveTime,
    products: BTreeSet<Product>,
    customers: BTreeSet<Customer>,
}

impl Snapshot {
    pub fn new(
        name: impl Into<String>,
        open_time: NaiveTime,
        closing_time: NaiveTime,
        products: impl IntoIterator<Item = Product>,
        customers: impl IntoIterator<Item = Customer>,
    ) -> DomainResult<Self> {
        if open_time > closing_time {
            return Err(DomainError::invariant(format!(
                "open time {open_time} is after closing time {closing_time}"
            )));
        }

        let mut catalog = BTreeSet::new();
        for product in products {
            let code = product.code().clone();
            if !catalog.insert(product) {
                return Err(DomainError::conflict(format!("duplicate product code {code}")));
            }
        }

        let mut queue = BTreeSet::new();
        for customer in customers {
            for product in customer.items_cart().keys() {
                check_against_catalog(&catalog, &customer, product)?;
            }

            let queued_at = customer.queued_at();
            if !queue.insert(customer) {
                return Err(DomainError::conflict(format!(
                    "duplicate customer arrival time {queued_at}"
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            open_time,
            closing_time,
            products: catalog,
            customers: queue,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open_time(&self) -> NaiveTime {
        self.open_time
    }

    pub fn closing_time(&self) -> NaiveTime {
        self.closing_time
    }

    /// Catalog, ordered by product code.
    pub fn products(&self) -> &BTreeSet<Product> {
        &self.products
    }

    /// Customers, ordered by arrival time.
    pub fn customers(&self) -> &BTreeSet<Customer> {
        &self.customers
    }

    /// Whether there is anything to report on.
    pub fn is_complete(&self) -> bool {
        !self.products.is_empty() && !self.customers.is_empty()
    }
}

/// A cart line must name a catalog product and carry the catalog's
/// description and price, since bills are priced from the cart's copy.
fn check_against_catalog(
    catalog: &BTreeSet<Product>,
    customer: &Customer,
    product: &Product,
) -> DomainResult<()> {
    let Some(listed) = catalog.get(product) else {
        return Err(DomainError::invariant(format!(
            "customer queued at {} bought unknown product {}",
            customer.queued_at(),
            product.code()
        )));
    };

    if listed.price() != product.price() || listed.description() != product.description() {
        return Err(DomainError::invariant(format!(
            "customer queued at {} bought product {} as {:?} at {}, catalog lists {:?} at {}",
            customer.queued_at(),
            product.code(),
            product.description(),
            product.price(),
            listed.description(),
            listed.price()
        )));
    }
    Ok(())
}
