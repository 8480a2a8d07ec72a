use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use ledger_cli::cli::{
    handle_dashboard_command, handle_data_command, handle_settings_command,
    handle_transaction_command, DataCommands, SettingsCommands, TransactionCommands,
};
use ledger_cli::config::LedgerPaths;
use ledger_cli::services::Ledger;
use ledger_cli::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal personal finance ledger",
    long_about = "Record spending from the command line, search it with regular \
                  expressions, and see where the money goes by category and month, \
                  in USD, EUR or RWF."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Data(DataCommands),

    /// Show totals, budget status, spending by category and the monthly trend
    Dashboard,

    /// View or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    });

    let paths = LedgerPaths::new()?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved paths");

    let Some(command) = cli.command else {
        println!("ledger - terminal personal finance ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Transaction(cmd) => handle_transaction_command(&mut open_ledger(paths)?, cmd)?,
        Commands::Data(cmd) => handle_data_command(&mut open_ledger(paths)?, cmd)?,
        Commands::Dashboard => {
            handle_dashboard_command(&open_ledger(paths)?, chrono::Local::now().date_naive())?
        }
        Commands::Settings(cmd) => handle_settings_command(&mut open_ledger(paths)?, cmd)?,
        Commands::Config => print_config(&paths),
    }

    Ok(())
}

fn open_ledger(paths: LedgerPaths) -> Result<Ledger<JsonFileStore>> {
    let store = JsonFileStore::new(paths)?;
    Ok(Ledger::open(store))
}

fn print_config(paths: &LedgerPaths) {
    println!("Ledger Configuration");
    println!("====================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Data directory:    {}", paths.data_dir().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!("Settings file:     {}", paths.settings_file().display());
}

/// Send log events to stderr, honouring RUST_LOG when it is set
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
