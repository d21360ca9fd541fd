//! Aggregation engine: pure queries over a [`Snapshot`].

use std::collections::{BTreeMap, BTreeSet, HashMap, btree_set};

use chrono::{NaiveTime, TimeDelta};

use checkout_customers::{Customer, ZipCode};
use checkout_products::Product;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::snapshot::Snapshot;

/// Revenue of the customers who arrived in `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalRevenue {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub revenue: f64,
}

/// Read-only query surface over one snapshot.
///
/// Every method is a pure function of the borrowed snapshot. Results borrow
/// from the snapshot too, so they can outlive the engine value itself.
#[derive(Debug, Clone, Copy)]
pub struct AggregationEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> AggregationEngine<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    /// Guard for reporting operations: fails when the catalog or the customer
    /// set is empty.
    pub fn ensure_complete(&self) -> AnalyticsResult<()> {
        if self.snapshot.is_complete() {
            Ok(())
        } else {
            tracing::debug!(
                snapshot = %self.snapshot.name(),
                products = self.snapshot.products().len(),
                customers = self.snapshot.customers().len(),
                "report_refused_incomplete_snapshot"
            );
            Err(AnalyticsError::IncompleteData)
        }
    }

    fn customers(&self) -> btree_set::Iter<'a, Customer> {
        self.snapshot.customers().iter()
    }

    /// Units sold across all customers.
    pub fn total_items_sold(&self) -> u64 {
        self.customers().map(Customer::total_items).sum()
    }

    /// Units sold per product. Iteration order is unspecified.
    pub fn product_counts(&self) -> HashMap<&'a Product, u64> {
        let mut counts: HashMap<&'a Product, u64> = HashMap::new();
        for customer in self.customers() {
            for (product, &number) in customer.items_cart() {
                *counts.entry(product).or_insert(0) += u64::from(number);
            }
        }
        counts
    }

    /// Distinct zip codes of the customers who bought each product.
    pub fn zip_codes_per_product(&self) -> HashMap<&'a Product, BTreeSet<&'a ZipCode>> {
        let mut zips: HashMap<&'a Product, BTreeSet<&'a ZipCode>> = HashMap::new();
        for customer in self.customers() {
            for product in customer.items_cart().keys() {
                zips.entry(product).or_default().insert(customer.zip_code());
            }
        }
        zips
    }

    /// Units sold per product, bucketed by the buyer's zip code.
    pub fn product_counts_by_zip(&self) -> HashMap<&'a ZipCode, HashMap<&'a Product, u64>> {
        let mut by_zip: HashMap<&'a ZipCode, HashMap<&'a Product, u64>> = HashMap::new();
        for customer in self.customers() {
            let counts = by_zip.entry(customer.zip_code()).or_default();
            for (product, &number) in customer.items_cart() {
                *counts.entry(product).or_insert(0) += u64::from(number);
            }
        }
        by_zip
    }

    /// Largest single bill, or `0.0` when there are no customers.
    pub fn highest_bill(&self) -> f64 {
        self.customers()
            .map(Customer::total_bill)
            .fold(None, |max: Option<f64>, bill| {
                Some(max.map_or(bill, |m| m.max(bill)))
            })
            .unwrap_or(0.0)
    }

    /// Every customer whose bill equals [`Self::highest_bill`], in arrival order.
    ///
    /// Bills are compared with exact equality; no tolerance is applied.
    pub fn customers_with_highest_bill(&self) -> Vec<&'a Customer> {
        let highest = self.highest_bill();
        self.customers()
            .filter(|customer| customer.total_bill() == highest)
            .collect()
    }

    /// Earliest arrival among the customers with the highest bill.
    pub fn most_paying_customer(&self) -> Option<&'a Customer> {
        self.customers_with_highest_bill().into_iter().next()
    }

    pub fn total_revenue(&self) -> f64 {
        self.customers().map(Customer::total_bill).sum()
    }

    /// Mean bill per customer, or `0.0` when there are no customers.
    pub fn average_revenue(&self) -> f64 {
        let count = self.snapshot.customers().len();
        if count == 0 {
            return 0.0;
        }
        self.total_revenue() / count as f64
    }

    /// Summed bills per zip code, ascending by zip code.
    pub fn revenue_by_zipcode(&self) -> BTreeMap<&'a ZipCode, f64> {
        let mut revenue: BTreeMap<&'a ZipCode, f64> = BTreeMap::new();
        for customer in self.customers() {
            *revenue.entry(customer.zip_code()).or_insert(0.0) += customer.total_bill();
        }
        revenue
    }

    /// Products found in the largest number of distinct carts. Ties are all returned.
    ///
    /// Popularity counts customers, not units: buying ten of a product counts once.
    pub fn most_popular_products(&self) -> BTreeSet<&'a Product> {
        let mut carts: HashMap<&'a Product, usize> = HashMap::new();
        for customer in self.customers() {
            for (product, &number) in customer.items_cart() {
                if number > 0 {
                    *carts.entry(product).or_insert(0) += 1;
                }
            }
        }

        let Some(&max) = carts.values().max() else {
            return BTreeSet::new();
        };

        carts
            .into_iter()
            .filter(|&(_, count)| count == max)
            .map(|(product, _)| product)
            .collect()
    }

    /// The product with the most units sold within each zip code, ascending by
    /// zip code.
    ///
    /// On a tie the product with the smallest code wins. Zip codes where nothing
    /// was bought are left out.
    pub fn most_bought_product_by_zipcode(&self) -> BTreeMap<&'a ZipCode, &'a Product> {
        self.product_counts_by_zip()
            .into_iter()
            .filter_map(|(zip, counts)| {
                counts
                    .into_iter()
                    .filter(|&(_, number)| number > 0)
                    // Highest count first, then the smaller product code.
                    .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
                    .map(|(product, _)| (zip, product))
            })
            .collect()
    }

    /// Revenue per consecutive `minutes`-long bucket of `[open_time, closing_time)`.
    ///
    /// Buckets start at `open_time`; the last one is cut short at
    /// `closing_time`. Customers arriving outside opening hours are not counted.
    pub fn revenue_per_interval(&self, minutes: i64) -> AnalyticsResult<Vec<IntervalRevenue>> {
        if minutes <= 0 {
            return Err(AnalyticsError::InvalidArgument(format!(
                "interval must be a positive number of minutes (got {minutes})"
            )));
        }

        let open = self.snapshot.open_time();
        let close = self.snapshot.closing_time();
        let span = (close - open).num_seconds();
        let step = minutes.saturating_mul(60);

        tracing::debug!(
            snapshot = %self.snapshot.name(),
            interval_minutes = minutes,
            %open,
            %close,
            "revenue_per_interval"
        );

        let mut buckets = Vec::new();
        let mut offset = 0i64;
        while offset < span {
            let end_offset = offset.saturating_add(step).min(span);
            let end = if end_offset == span {
                close
            } else {
                open + TimeDelta::seconds(end_offset)
            };
            buckets.push(IntervalRevenue {
                start: open + TimeDelta::seconds(offset),
                end,
                revenue: 0.0,
            });
            offset = end_offset;
        }

        for customer in self.customers() {
            let queued_at = customer.queued_at();
            if queued_at < open || queued_at >= close {
                continue;
            }
            let index = ((queued_at - open).num_seconds() / step) as usize;
            if let Some(bucket) = buckets.get_mut(index) {
                bucket.revenue += customer.total_bill();
            }
        }

        Ok(buckets)
    }
}
