//! Settings CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{Currency, Money};
use crate::models::currency::format_base;
use crate::services::Ledger;
use crate::storage::Persistence;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,
    /// Change one or more settings
    Set {
        /// Spending cap in USD (0 disables it)
        #[arg(long)]
        budget_cap: Option<f64>,
        /// Display currency
        #[arg(long, value_enum, ignore_case = true)]
        currency: Option<Currency>,
        /// Euros per US dollar
        #[arg(long)]
        rate_eur: Option<f64>,
        /// Rwandan francs per US dollar
        #[arg(long)]
        rate_rwf: Option<f64>,
    },
}

/// Handle a settings command
pub fn handle_settings_command<P: Persistence>(
    ledger: &mut Ledger<P>,
    cmd: SettingsCommands,
) -> LedgerResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(ledger.settings()));
        }
        SettingsCommands::Set {
            budget_cap,
            currency,
            rate_eur,
            rate_rwf,
        } => {
            let mut settings = ledger.settings().clone();
            let before = settings.clone();

            if let Some(cap) = budget_cap {
                settings.budget_cap = cap;
            }
            if let Some(currency) = currency {
                settings.currency = currency;
            }
            if let Some(rate) = rate_eur {
                settings.rates.set(Currency::Eur, rate);
            }
            if let Some(rate) = rate_rwf {
                settings.rates.set(Currency::Rwf, rate);
            }

            if settings == before {
                println!("No settings changed.");
                return Ok(());
            }

            ledger.save_settings(settings)?;
            println!("Settings saved.");
            print!("{}", format_settings(ledger.settings()));
        }
    }

    Ok(())
}

fn format_settings(settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Settings\n");
    output.push_str("========\n");
    let cap = if settings.has_budget_cap() {
        format!(
            "{} (${:.2})",
            format_base(Money::from_major(settings.budget_cap), settings.currency, &settings.rates),
            settings.budget_cap
        )
    } else {
        "not set".to_string()
    };
    output.push_str(&format!("Budget cap:       {}\n", cap));
    output.push_str(&format!("Display currency: {}\n", settings.currency));
    output.push_str("Rates (per USD):\n");
    for currency in Currency::ALL {
        output.push_str(&format!(
            "  {}: {}\n",
            currency.code(),
            settings.rates.rate(currency)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_set_persists() {
        let mut ledger = Ledger::open(MemoryStore::new());
        handle_settings_command(
            &mut ledger,
            SettingsCommands::Set {
                budget_cap: Some(250.0),
                currency: Some(Currency::Eur),
                rate_eur: Some(0.9),
                rate_rwf: None,
            },
        )
        .unwrap();

        let stored = ledger.persistence().load_settings().unwrap();
        assert_eq!(stored.budget_cap, 250.0);
        assert_eq!(stored.currency, Currency::Eur);
        assert_eq!(stored.rates.rate(Currency::Eur), 0.9);
        assert_eq!(stored.rates.rate(Currency::Rwf), 1320.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_settings_command(
            &mut ledger,
            SettingsCommands::Set {
                budget_cap: Some(-1.0),
                currency: None,
                rate_eur: None,
                rate_rwf: None,
            },
        )
        .unwrap_err();

        assert!(matches!(err, crate::error::LedgerError::Settings(_)));
        assert_eq!(ledger.settings(), &Settings::default());
    }

    #[test]
    fn test_format_settings() {
        let output = format_settings(&Settings::default());
        assert!(output.contains("Budget cap:       not set"));
        assert!(output.contains("EUR: 0.92"));
        assert!(output.contains("RWF: 1320"));
    }
}
