use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::audit::AuditLogger;
use finance_tracker::cli::{
    handle_budget_command, handle_dashboard, handle_history, handle_stats,
    handle_transaction_command, BudgetCommands, TransactionCommands,
};
use finance_tracker::config::{paths::FinancePaths, settings::Settings};
use finance_tracker::storage::open_file_store;
use finance_tracker::store::{FinanceStore, StoreOptions};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance tracker in CFA francs",
    long_about = "Track income, expenses and per-category budgets from the terminal. \
                  Amounts are whole CFA francs; data is kept as JSON snapshots \
                  under the data directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance, totals, recent transactions and budgets (default)
    Dashboard,

    /// Daily and monthly expense series
    Stats {
        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    if let Some(Commands::Config) = cli.command {
        println!("Finance Tracker Configuration");
        println!("=============================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Audit log:        {}", paths.audit_log().display());
        println!();
        println!("Settings:");
        println!("  Snapshot policy:     {}", settings.snapshot_policy);
        println!("  Audit enabled:       {}", settings.audit_enabled);
        println!("  Recent transactions: {}", settings.recent_transactions);
        return Ok(());
    }

    if let Some(Commands::History { count }) = cli.command {
        handle_history(&audit, count)?;
        return Ok(());
    }

    let mut options = StoreOptions::new().snapshot_policy(settings.snapshot_policy);
    if settings.audit_enabled {
        options = options.audit(audit);
    }
    let mut store = FinanceStore::open(open_file_store(&paths)?, options)?;

    match cli.command {
        None | Some(Commands::Dashboard) => {
            handle_dashboard(&store, settings.recent_transactions)?;
        }
        Some(Commands::Stats { json }) => {
            handle_stats(&store, json)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, cmd)?;
        }
        Some(Commands::History { .. }) | Some(Commands::Config) => {}
    }

    Ok(())
}
