//! Reporting views: the engine's answers grouped the way the report reads them.
//!
//! Each builder checks [`AggregationEngine::ensure_complete`] first, so a
//! report is never computed over an empty catalog or an empty queue.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;

use checkout_customers::{Customer, ZipCode};
use checkout_products::Product;

use crate::engine::{AggregationEngine, IntervalRevenue};
use crate::error::AnalyticsResult;

/// Who shopped, how much, and who paid the most.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerStatistics<'a> {
    pub name: &'a str,
    pub open_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub customer_count: usize,
    pub items_sold: u64,
    pub product_count: usize,
    pub highest_bill: f64,
    /// Arrival order.
    pub customers_with_highest_bill: Vec<&'a Customer>,
}

/// What was bought, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStatistics<'a> {
    /// Units sold per product, ordered by product code.
    pub product_counts: BTreeMap<&'a Product, u64>,
    pub zip_codes_per_product: BTreeMap<&'a Product, BTreeSet<&'a ZipCode>>,
    pub most_popular_products: BTreeSet<&'a Product>,
    pub most_bought_by_zipcode: BTreeMap<&'a ZipCode, &'a Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueStatistics<'a> {
    pub total_revenue: f64,
    pub average_revenue: f64,
    pub revenue_by_zipcode: BTreeMap<&'a ZipCode, f64>,
    pub interval_minutes: i64,
    pub revenue_per_interval: Vec<IntervalRevenue>,
}

impl<'a> AggregationEngine<'a> {
    pub fn customer_statistics(&self) -> AnalyticsResult<CustomerStatistics<'a>> {
        self.ensure_complete()?;
        let snapshot = self.snapshot();

        Ok(CustomerStatistics {
            name: snapshot.name(),
            open_time: snapshot.open_time(),
            closing_time: snapshot.closing_time(),
            customer_count: snapshot.customers().len(),
            items_sold: self.total_items_sold(),
            product_count: snapshot.products().len(),
            highest_bill: self.highest_bill(),
            customers_with_highest_bill: self.customers_with_highest_bill(),
        })
    }

    pub fn product_statistics(&self) -> AnalyticsResult<ProductStatistics<'a>> {
        self.ensure_complete()?;

        Ok(ProductStatistics {
            product_counts: self.product_counts().into_iter().collect(),
            zip_codes_per_product: self.zip_codes_per_product().into_iter().collect(),
            most_popular_products: self.most_popular_products(),
            most_bought_by_zipcode: self.most_bought_product_by_zipcode(),
        })
    }

    pub fn revenue_statistics(&self, interval_minutes: i64) -> AnalyticsResult<RevenueStatistics<'a>> {
        self.ensure_complete()?;

        Ok(RevenueStatistics {
            total_revenue: self.total_revenue(),
            average_revenue: self.average_revenue(),
            revenue_by_zipcode: self.revenue_by_zipcode(),
            interval_minutes,
            revenue_per_interval: self.revenue_per_interval(interval_minutes)?,
        })
    }
}
