use checkout_analytics::{
    AggregationEngine, AnalyticsError, AnalyticsResult, CustomerStatistics, ProductStatistics,
    RevenueStatistics,
};

use crate::config::ReportConfig;

/// Printed in place of a section when the snapshot has no products or customers.
pub const INCOMPLETE_DATA_MESSAGE: &str = "No products or customers have been set up...";

const TIME_FORMAT: &str = "%H:%M";

/// Renders the customer, product and revenue sections of a report.
#[derive(Debug, Clone)]
pub struct ReportFormatter<'a> {
    engine: AggregationEngine<'a>,
    config: ReportConfig,
}

impl<'a> ReportFormatter<'a> {
    pub fn new(engine: AggregationEngine<'a>, config: ReportConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// All three sections, in order.
    pub fn render(&self) -> AnalyticsResult<String> {
        let mut out = self.customer_statistics()?;
        out.push_str(&self.product_statistics()?);
        out.push_str(&self.revenue_statistics()?);
        Ok(out)
    }

    pub fn customer_statistics(&self) -> AnalyticsResult<String> {
        self.section("customers", self.engine.customer_statistics().map(|s| self.customers(&s)))
    }

    pub fn product_statistics(&self) -> AnalyticsResult<String> {
        self.section("products", self.engine.product_statistics().map(|s| self.products(&s)))
    }

    pub fn revenue_statistics(&self) -> AnalyticsResult<String> {
        let stats = self.engine.revenue_statistics(self.config.interval_minutes);
        self.section("revenue", stats.map(|s| self.revenue(&s)))
    }

    /// Swaps an incomplete-data refusal for the placeholder line; any other
    /// error is the caller's problem.
    fn section(&self, name: &str, rendered: AnalyticsResult<String>) -> AnalyticsResult<String> {
        match rendered {
            Err(AnalyticsError::IncompleteData) => {
                tracing::warn!(section = name, "report_section_skipped_incomplete_data");
                Ok(format!("{INCOMPLETE_DATA_MESSAGE}\n"))
            }
            other => other,
        }
    }

    fn header(&self, title: &str) -> String {
        format!("{}{}{}\n", self.config.bold, title, self.config.reset)
    }

    fn customers(&self, stats: &CustomerStatistics<'_>) -> String {
        let mut out = self.header(&format!(
            "\n>>>>> Customer Statistics of '{}' between {} and {} <<<<<",
            stats.name,
            stats.open_time.format(TIME_FORMAT),
            stats.closing_time.format(TIME_FORMAT),
        ));

        out.push_str(&format!(
            "\n{} customers have shopped {} items out of {} different products\n\n",
            stats.customer_count, stats.items_sold, stats.product_count
        ));

        out.push_str(&format!(
            "Customer(s) with the highest bill of {:.2} {}:\n",
            stats.highest_bill, self.config.currency
        ));
        for customer in &stats.customers_with_highest_bill {
            out.push_str(&customer.to_string());
        }
        out
    }

    fn products(&self, stats: &ProductStatistics<'_>) -> String {
        let mut out = self.header("\n>>>>> Product Statistics of all purchases <<<<<");

        out.push_str("\n>>> Products and total number bought:\n");
        for (product, count) in &stats.product_counts {
            out.push_str(&format!("{:<35} {:>10}\n", product.description(), count));
        }

        out.push('\n');
        out.push_str(&self.header(">>> Products and zipcodes"));
        let per_line = self.config.zip_codes_per_line.max(1);
        for (product, zips) in &stats.zip_codes_per_product {
            out.push_str(&format!("{}:\n", product.description()));
            let zips: Vec<&str> = zips.iter().map(|z| z.as_str()).collect();
            for line in zips.chunks(per_line) {
                out.push_str(&line.join(", "));
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&self.header(">>> Most popular products"));
        out.push_str("\nProduct(s) bought by most customers:\n");
        for product in &stats.most_popular_products {
            out.push_str(&format!("{}\n", product.description()));
        }

        out.push('\n');
        out.push_str(&self.header(">>> Most bought products per zipcode"));
        out.push('\n');
        for (zip, product) in &stats.most_bought_by_zipcode {
            out.push_str(&format!("{} - {}\n", zip, product.description()));
        }
        out
    }

    fn revenue(&self, stats: &RevenueStatistics<'_>) -> String {
        let mut out = self.header("\n>>>>> Revenue Statistics of all purchases <<<<<");

        out.push_str(&format!(
            "\nTotal revenue = {:.2}\nAverage revenue per customer = {:.2}\n\n",
            stats.total_revenue, stats.average_revenue
        ));

        out.push_str(&self.header(">>> Revenues per zip-code:"));
        out.push('\n');
        for (zip, revenue) in &stats.revenue_by_zipcode {
            out.push_str(&format!("{:<7} -  {:.2}\n", zip.as_str(), revenue));
        }

        out.push('\n');
        out.push_str(&self.header(&format!(
            ">>> Revenues per interval of {} minutes",
            stats.interval_minutes
        )));
        out.push('\n');
        for bucket in &stats.revenue_per_interval {
            out.push_str(&format!(
                "Between {} and {} the revenue was: {:.2}\n",
                bucket.start.format(TIME_FORMAT),
                bucket.end.format(TIME_FORMAT),
                bucket.revenue
            ));
        }
        out
    }
}
