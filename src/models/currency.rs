//! Display currencies and conversion
//!
//! Amounts are stored in the base currency (USD). Conversion goes through
//! USD as the intermediate using the single configured rate per currency.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Supported display currencies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    #[value(name = "USD")]
    Usd,
    #[value(name = "EUR")]
    Eur,
    #[value(name = "RWF")]
    Rwf,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rwf];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Rwf => "RWF",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Rwf => "FRw",
        }
    }

    /// Number of fraction digits shown for this currency
    pub fn decimals(&self) -> usize {
        match self {
            Self::Rwf => 0,
            _ => 2,
        }
    }

    /// Built-in rate versus USD, used when a configuration lacks one
    pub fn default_rate(&self) -> f64 {
        match self {
            Self::Usd => 1.0,
            Self::Eur => 0.92,
            Self::Rwf => 1320.0,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "RWF" => Ok(Self::Rwf),
            other => Err(format!("Unsupported currency: {}", other)),
        }
    }
}

/// Conversion rates of non-USD currencies versus USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rates(BTreeMap<Currency, f64>);

impl Rates {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Rate for a currency; USD is always 1
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => 1.0,
            other => self
                .0
                .get(&other)
                .copied()
                .unwrap_or_else(|| other.default_rate()),
        }
    }

    pub fn set(&mut self, currency: Currency, rate: f64) {
        if currency != Currency::Usd {
            self.0.insert(currency, rate);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.0.iter().map(|(c, r)| (*c, *r))
    }
}

impl Default for Rates {
    fn default() -> Self {
        let mut rates = Self::new();
        rates.set(Currency::Eur, Currency::Eur.default_rate());
        rates.set(Currency::Rwf, Currency::Rwf.default_rate());
        rates
    }
}

/// Convert an amount expressed in `from` into `to`
pub fn convert(amount: f64, from: Currency, to: Currency, rates: &Rates) -> f64 {
    if from == to {
        return amount;
    }

    let in_usd = if from == Currency::Usd {
        amount
    } else {
        amount / rates.rate(from)
    };

    if to == Currency::Usd {
        in_usd
    } else {
        in_usd * rates.rate(to)
    }
}

/// Format an amount with the currency symbol and its decimal places
pub fn format(amount: f64, currency: Currency) -> String {
    format!("{}{:.*}", currency.symbol(), currency.decimals(), amount)
}

/// Convert a base-currency amount to `currency` and format it
pub fn format_base(amount: Money, currency: Currency, rates: &Rates) -> String {
    format(convert(amount.as_f64(), Currency::Usd, currency, rates), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates(eur: f64, rwf: f64) -> Rates {
        let mut rates = Rates::new();
        rates.set(Currency::Eur, eur);
        rates.set(Currency::Rwf, rwf);
        rates
    }

    #[test]
    fn test_identity_conversion() {
        for r in [rates(0.92, 1320.0), rates(3.0, 0.5), Rates::new()] {
            for x in [0.0, 1.0, 12.34, 1e9] {
                assert_eq!(convert(x, Currency::Usd, Currency::Usd, &r), x);
                assert_eq!(convert(x, Currency::Eur, Currency::Eur, &r), x);
            }
        }
    }

    #[test]
    fn test_round_trip_through_eur() {
        for rate in [0.92, 0.01, 7.5, 1320.0] {
            let r = rates(rate, 1320.0);
            for x in [0.01, 1.0, 99.99, 123456.78] {
                let eur = convert(x, Currency::Usd, Currency::Eur, &r);
                let back = convert(eur, Currency::Eur, Currency::Usd, &r);
                assert!((back - x).abs() < 1e-9 * x.max(1.0));
            }
        }
    }

    #[test]
    fn test_cross_conversion_goes_through_usd() {
        let r = rates(0.5, 1000.0);
        // 10 EUR -> 20 USD -> 20000 RWF
        assert!((convert(10.0, Currency::Eur, Currency::Rwf, &r) - 20000.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rate_uses_default() {
        let r = Rates::new();
        assert_eq!(r.rate(Currency::Eur), 0.92);
        assert_eq!(r.rate(Currency::Usd), 1.0);
    }

    #[test]
    fn test_format() {
        assert_eq!(format(12.5, Currency::Usd), "$12.50");
        assert_eq!(format(12.5, Currency::Eur), "€12.50");
        assert_eq!(format(16500.4, Currency::Rwf), "FRw16500");
    }

    #[test]
    fn test_format_base() {
        let r = rates(0.5, 1320.0);
        assert_eq!(format_base(Money::from_cents(1000), Currency::Eur, &r), "€5.00");
        assert_eq!(format_base(Money::from_cents(1000), Currency::Usd, &r), "$10.00");
    }

    #[test]
    fn test_rates_serialize_as_code_map() {
        let json = serde_json::to_string(&Rates::default()).unwrap();
        assert_eq!(json, r#"{"EUR":0.92,"RWF":1320.0}"#);
        let parsed: Rates = serde_json::from_str(r#"{"EUR":0.9,"RWF":1300}"#).unwrap();
        assert_eq!(parsed.rate(Currency::Rwf), 1300.0);
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("GBP".parse::<Currency>().is_err());
    }
}
