//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting
//! transactions.

use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionId, TransactionInput, TransactionPatchInput, DEFAULT_CATEGORY};
use crate::services::search::filter;
use crate::services::{sorted, Ledger, SearchMatcher, SortField, SortState};
use crate::storage::Persistence;
use crate::validation::{validate_input, validate_patch};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Regular expression matched against description, category and amount
        #[arg(short, long)]
        search: Option<String>,
        /// Match the search pattern case-sensitively
        #[arg(long)]
        case_sensitive: bool,
        /// Sort field (newest first when omitted)
        #[arg(long, value_enum)]
        sort: Option<SortField>,
        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: TransactionId,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: TransactionId,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: TransactionId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Delete every transaction
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<P: Persistence>(
    ledger: &mut Ledger<P>,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let settings = ledger.settings().clone();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let input = TransactionInput {
                description,
                amount,
                category,
                date: date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
            };
            let draft = validate_input(&input)?;
            let txn = ledger.create(draft)?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, &settings));
        }

        TransactionCommands::List {
            search,
            case_sensitive,
            sort,
            desc,
            limit,
        } => {
            let matcher = match search.as_deref() {
                Some(pattern) => match SearchMatcher::try_compile(pattern, case_sensitive) {
                    Ok(matcher) => matcher,
                    Err(e) => {
                        eprintln!("Warning: {}. Showing all transactions.", e);
                        None
                    }
                },
                None => None,
            };

            let state = match sort {
                Some(field) => SortState::new(field, !desc),
                None => SortState::default(),
            };
            let ordered = sorted(ledger.snapshot(), state.field, state.ascending);

            let mut shown = filter(&ordered, matcher.as_ref());
            let matched = shown.len();
            if let Some(limit) = limit {
                shown.truncate(limit);
            }

            print!(
                "{}",
                format_transaction_register(&shown, &settings, matcher.as_ref())
            );
            println!(
                "\nShowing {} of {} transactions (sorted by {} {})",
                shown.len(),
                matched,
                state.field,
                if state.ascending { "ascending" } else { "descending" }
            );
        }

        TransactionCommands::Show { id } => {
            let txn = ledger
                .get(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn, &settings));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let patch = validate_patch(&TransactionPatchInput {
                description,
                amount,
                category,
                date,
            })?;

            if patch.is_empty() {
                println!("Nothing to update. Pass at least one of --description, --amount, --category, --date");
                return Ok(());
            }

            let updated = ledger.update(&id, patch)?;
            println!("Updated transaction:");
            print!("{}", format_transaction_details(&updated, &settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = ledger
                .get(&id)
                .ok_or_else(|| LedgerError::transaction_not_found(id.as_str()))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(txn, &settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            ledger.remove(&id)?;
            println!("Deleted transaction: {}", id);
        }

        TransactionCommands::Clear { force } => {
            if !force {
                println!("About to delete all {} transactions.", ledger.len());
                println!("Use --force to confirm");
                return Ok(());
            }

            let count = ledger.len();
            ledger.clear()?;
            println!("Deleted {} transactions", count);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::open(MemoryStore::new())
    }

    fn add(ledger: &mut Ledger<MemoryStore>, description: &str, amount: &str) -> LedgerResult<()> {
        handle_transaction_command(
            ledger,
            TransactionCommands::Add {
                description: description.into(),
                amount: amount.into(),
                category: "Food".into(),
                date: Some("2024-01-05".into()),
            },
        )
    }

    #[test]
    fn test_add_validates_then_creates() {
        let mut ledger = ledger();
        add(&mut ledger, "Lunch", "12.50").unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.snapshot()[0].amount, Money::from_cents(1250));

        let err = add(&mut ledger, "coffee coffee", "3").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_defaults_category_and_date() {
        let mut ledger = ledger();
        handle_transaction_command(
            &mut ledger,
            TransactionCommands::Add {
                description: "Stamps".into(),
                amount: "2".into(),
                category: DEFAULT_CATEGORY.into(),
                date: None,
            },
        )
        .unwrap();

        let txn = &ledger.snapshot()[0];
        assert_eq!(txn.category, "Other");
        assert!(txn.naive_date().is_some());
    }

    #[test]
    fn test_delete_requires_force() {
        let mut ledger = ledger();
        add(&mut ledger, "Lunch", "12").unwrap();
        let id = ledger.snapshot()[0].id.clone();

        handle_transaction_command(
            &mut ledger,
            TransactionCommands::Delete {
                id: id.clone(),
                force: false,
            },
        )
        .unwrap();
        assert_eq!(ledger.len(), 1);

        handle_transaction_command(&mut ledger, TransactionCommands::Delete { id, force: true })
            .unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut ledger = ledger();
        let err = handle_transaction_command(
            &mut ledger,
            TransactionCommands::Edit {
                id: TransactionId::from_string("txn_missing"),
                description: None,
                amount: Some("5".into()),
                category: None,
                date: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_with_bad_pattern_still_succeeds() {
        let mut ledger = ledger();
        add(&mut ledger, "Lunch", "12").unwrap();
        handle_transaction_command(
            &mut ledger,
            TransactionCommands::List {
                search: Some("(".into()),
                case_sensitive: false,
                sort: Some(SortField::Amount),
                desc: true,
                limit: Some(5),
            },
        )
        .unwrap();
    }
}
