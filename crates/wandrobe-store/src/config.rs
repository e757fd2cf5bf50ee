//! # Store Configuration
//!
//! Display configuration for the storefront.
//!
//! ## Thread Safety
//! Configuration is read-only after construction, so nothing here is
//! guarded. The admin credentials are deliberately NOT configuration:
//! they are fixed constants in `wandrobe-core` (there is no
//! environment-based configuration in this core).

use serde::{Deserialize, Serialize};
use wandrobe_core::Money;

/// Storefront display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (header and order confirmations).
    pub store_name: String,

    /// Tagline shown in the footer.
    pub tagline: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    /// Returns the WanDrobe shop defaults.
    fn default() -> Self {
        StoreConfig {
            store_name: "WanDrobe.".to_string(),
            tagline: "Beautiful Telekung Collections for Every Occasion".to_string(),
            currency_symbol: "RM".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Formats a monetary amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_sen(8999)), "RM 89.99");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sen = amount.sen();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = sen / divisor;
        let frac = (sen % divisor).abs();

        format!(
            "{}{} {}",
            if sen < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_sen(8999)), "RM 89.99");
        assert_eq!(config.format_currency(Money::from_sen(100)), "RM 1.00");
        assert_eq!(config.format_currency(Money::from_sen(1)), "RM 0.01");
        assert_eq!(config.format_currency(Money::from_sen(0)), "RM 0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_sen(-1234)), "-RM 12.34");
    }

    #[test]
    fn test_format_currency_large() {
        let config = StoreConfig::default();
        assert_eq!(
            config.format_currency(Money::from_sen(123456789)),
            "RM 1234567.89"
        );
    }
}
