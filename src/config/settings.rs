//! User settings for the ledger
//!
//! Budget cap, display currency and conversion rates. Settings are loaded
//! once at startup and only change through an explicit save.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Currency, Rates};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Spending cap in the base currency; 0 means no cap
    #[serde(default)]
    pub budget_cap: f64,

    /// Currency amounts are displayed in
    #[serde(default)]
    pub currency: Currency,

    /// Conversion rates versus USD
    #[serde(default)]
    pub rates: Rates,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_cap: 0.0,
            currency: Currency::default(),
            rates: Rates::default(),
        }
    }
}

impl Settings {
    /// Whether a budget cap is configured
    pub fn has_budget_cap(&self) -> bool {
        self.budget_cap > 0.0
    }

    /// Check the settings before they are saved
    pub fn validate(&self) -> Result<(), LedgerError> {
        if !self.budget_cap.is_finite() || self.budget_cap < 0.0 {
            return Err(LedgerError::Settings(format!(
                "Budget cap must be a non-negative number, got {}",
                self.budget_cap
            )));
        }

        for (currency, rate) in self.rates.iter() {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(LedgerError::Settings(format!(
                    "Rate for {} must be a positive number, got {}",
                    currency, rate
                )));
            }
        }

        Ok(())
    }
}
