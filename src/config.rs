//! Configuration loading from TOML files.
//!
//! Every field has a default, so an empty file (or no file at all, via
//! `Config::default()`) yields a working storefront configuration.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

/// Top-level crate configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation-time pricing knobs.
///
/// Tax and shipping are derived at display time (see
/// [`OrderSummary`](crate::cart::OrderSummary)); nothing here changes
/// what the cart stores.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Flat tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

/// Filter and search behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Upper bound of the price slider, and of default criteria.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: Decimal,

    /// Quiescence window before a search keystroke burst commits.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2) // 0.08
}

fn default_price_ceiling() -> Decimal {
    Decimal::from(1000)
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            price_ceiling: default_price_ceiling(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if
    /// a value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::Config(ConfigError::ReadFile(e)))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| Error::Config(ConfigError::Parse(e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pricing.tax_rate < Decimal::ZERO || self.pricing.tax_rate >= Decimal::ONE {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "tax_rate",
                reason: format!("must be in [0, 1), got {}", self.pricing.tax_rate),
            }));
        }

        if self.filter.price_ceiling <= Decimal::ZERO {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "price_ceiling",
                reason: format!("must be positive, got {}", self.filter.price_ceiling),
            }));
        }

        if self.logging.level.is_empty() {
            return Err(Error::Config(ConfigError::MissingField { field: "level" }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_values() {
        let config = Config::default();

        assert_eq!(config.pricing.tax_rate, dec!(0.08));
        assert_eq!(config.filter.price_ceiling, dec!(1000));
        assert_eq!(config.filter.debounce_ms, 300);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.pricing.tax_rate, dec!(0.08));
        assert_eq!(config.filter.debounce_ms, 300);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[filter]
debounce_ms = 150
"#,
        )
        .unwrap();

        assert_eq!(config.filter.debounce_ms, 150);
        assert_eq!(config.filter.price_ceiling, dec!(1000));
        assert_eq!(config.pricing.tax_rate, dec!(0.08));
    }
}
