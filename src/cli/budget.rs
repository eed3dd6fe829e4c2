//! Budget CLI commands

use clap::Subcommand;

use crate::display::{format_budget_details, format_budget_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetId, BudgetUpdate, NewBudget};
use crate::reports::BudgetStatus;
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

use super::transaction::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List budgets with spending progress
    List,

    /// Create a budget for a category
    Add {
        /// Category name, matched exactly against transaction categories
        category: String,
        /// Spending limit in francs
        limit: String,
        /// Presentation color tag
        #[arg(long, default_value = "bg-pastel-blue")]
        color: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show one budget
    Show {
        id: String,
    },

    /// Change a budget's category, limit, color or description
    Update {
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a budget (transactions are kept)
    #[command(alias = "rm")]
    Remove {
        id: String,
    },
}

pub fn handle_budget_command<K: KeyValueStore>(
    store: &mut FinanceStore<K>,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::List => {
            let statuses: Vec<_> = store.budgets().iter().map(BudgetStatus::new).collect();
            print!("{}", format_budget_list(&statuses));
        }

        BudgetCommands::Add {
            category,
            limit,
            color,
            description,
        } => {
            let limit = parse_amount(&limit)?;
            let data = NewBudget {
                category,
                limit,
                color,
                description,
            };
            let budget = store.add_budget(data)?;

            println!("Created budget: {} ({})", budget.category, budget.limit);
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Show { id } => {
            let id = BudgetId::from(id.trim());
            let budget = store
                .budget(&id)
                .ok_or_else(|| FinanceError::budget_not_found(id.as_str()))?;
            print!("{}", format_budget_details(budget));
        }

        BudgetCommands::Update {
            id,
            category,
            limit,
            color,
            description,
        } => {
            let update = BudgetUpdate {
                category,
                limit: limit.as_deref().map(parse_amount).transpose()?,
                color,
                description,
            };

            if update.is_empty() {
                println!("No changes specified. Use --category, --limit, --color or --description.");
                return Ok(());
            }

            let id = BudgetId::from(id.trim());
            let updated = store
                .update_budget(&id, update)?
                .ok_or_else(|| FinanceError::budget_not_found(id.as_str()))?;
            println!("Updated budget: {}", updated);
        }

        BudgetCommands::Remove { id } => {
            let id = BudgetId::from(id.trim());
            let removed = store
                .remove_budget(&id)?
                .ok_or_else(|| FinanceError::budget_not_found(id.as_str()))?;
            println!("Deleted budget: {}", removed.category);
        }
    }

    Ok(())
}
