/// Display settings for a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Length of the revenue buckets, in minutes.
    pub interval_minutes: i64,
    /// Zip codes printed per line in the product/zip code listing. A value of
    /// 0 is rendered as 1.
    pub zip_codes_per_line: usize,
    /// Written before section headers.
    pub bold: String,
    /// Written after section headers.
    pub reset: String,
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
            zip_codes_per_line: 8,
            bold: "\x1b[1m".to_string(),
            reset: "\x1b[0m".to_string(),
            currency: "euro".to_string(),
        }
    }
}

impl ReportConfig {
    /// Defaults without ANSI escape sequences (for files and pipes).
    pub fn plain() -> Self {
        Self {
            bold: String::new(),
            reset: String::new(),
            ..Self::default()
        }
    }

    pub fn with_interval_minutes(mut self, minutes: i64) -> Self {
        self.interval_minutes = minutes;
        self
    }

    pub fn with_zip_codes_per_line(mut self, per_line: usize) -> Self {
        self.zip_codes_per_line = per_line;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keeps_defaults_but_drops_escapes() {
        let plain = ReportConfig::plain();
        assert!(plain.bold.is_empty());
        assert!(plain.reset.is_empty());
        assert_eq!(plain.interval_minutes, 15);
        assert_eq!(plain.zip_codes_per_line, 8);
    }

    #[test]
    fn builders_override_fields() {
        let config = ReportConfig::default()
            .with_interval_minutes(30)
            .with_zip_codes_per_line(4)
            .with_currency("EUR");
        assert_eq!(config.interval_minutes, 30);
        assert_eq!(config.zip_codes_per_line, 4);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.bold, "\x1b[1m");
    }
}
