//! JSON snapshot document.
//!
//! ```json
//! {
//!   "name": "jambi",
//!   "openTime": "08:00",
//!   "closingTime": "20:00",
//!   "products": [{ "code": "1", "description": "Milk", "price": 1.25 }],
//!   "customers": [
//!     { "queuedAt": "09:05:00", "zipCode": "1000AA",
//!       "items": [{ "product": "1", "number": 2 }] }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use checkout_analytics::Snapshot;
use checkout_core::DomainError;
use checkout_customers::{Customer, ZipCode};
use checkout_products::{Product, ProductCode};

use crate::error::{LoadError, LoadResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument {
    name: String,
    open_time: String,
    closing_time: String,
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    customers: Vec<CustomerRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    code: ProductCode,
    description: String,
    price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerRecord {
    queued_at: String,
    zip_code: ZipCode,
    #[serde(default)]
    items: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    product: ProductCode,
    number: u32,
}

/// Read and validate a snapshot document from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> LoadResult<Snapshot> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&raw)
}

/// Parse and validate a snapshot document.
pub fn load_from_str(raw: &str) -> LoadResult<Snapshot> {
    let doc: SnapshotDocument = serde_json::from_str(raw)?;
    build_snapshot(doc)
}

fn build_snapshot(doc: SnapshotDocument) -> LoadResult<Snapshot> {
    let open_time = parse_time("openTime", &doc.open_time)?;
    let closing_time = parse_time("closingTime", &doc.closing_time)?;

    let mut products = Vec::with_capacity(doc.products.len());
    for record in doc.products {
        products.push(product_from_record(record).inspect_err(reject)?);
    }

    // First definition wins here; duplicates are refused by `Snapshot::new`.
    let mut catalog: HashMap<&ProductCode, &Product> = HashMap::with_capacity(products.len());
    for product in &products {
        catalog.entry(product.code()).or_insert(product);
    }

    let mut customers = Vec::with_capacity(doc.customers.len());
    for record in doc.customers {
        customers.push(customer_from_record(record, &catalog).inspect_err(reject)?);
    }

    let snapshot = Snapshot::new(doc.name, open_time, closing_time, products, customers)
        .map_err(LoadError::from)
        .inspect_err(reject)?;

    tracing::info!(
        snapshot = %snapshot.name(),
        open_time = %snapshot.open_time(),
        closing_time = %snapshot.closing_time(),
        products = snapshot.products().len(),
        customers = snapshot.customers().len(),
        "snapshot_loaded"
    );

    Ok(snapshot)
}

fn reject(err: &LoadError) {
    tracing::warn!(error = %err, "snapshot_rejected");
}

/// `HH:MM:SS` or `HH:MM`. Leap seconds (`:60`) are refused; interval
/// arithmetic assumes ordinary seconds.
fn parse_time(field: &str, value: &str) -> LoadResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| LoadError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn product_from_record(record: ProductRecord) -> LoadResult<Product> {
    if record.code.as_str().trim().is_empty() {
        return Err(LoadError::Validation(format!(
            "product {:?} has an empty code",
            record.description
        )));
    }
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(LoadError::Validation(format!(
            "product {} has invalid price {}",
            record.code, record.price
        )));
    }
    Ok(Product::new(record.code, record.description, record.price))
}

fn customer_from_record(
    record: CustomerRecord,
    catalog: &HashMap<&ProductCode, &Product>,
) -> LoadResult<Customer> {
    let queued_at = parse_time("queuedAt", &record.queued_at)?;
    let mut customer = Customer::new(queued_at, record.zip_code);

    for item in record.items {
        let product = catalog.get(&item.product).ok_or_else(|| {
            DomainError::not_found(format!(
                "customer queued at {queued_at} bought unknown product {}",
                item.product
            ))
        })?;
        customer.add_to_cart((*product).clone(), item.number)?;
    }

    Ok(customer)
}
