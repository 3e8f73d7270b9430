use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use finance_tracker::{
    AppState, Goal, Transaction, TransactionType,
    stores::{GoalStore, TransactionStore},
};

/// A utility for creating a test database for the finance tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let state = AppState::new(Connection::open(output_path)?)?;

    println!("Creating test transactions...");
    let today = OffsetDateTime::now_utc().date();
    let days_ago = |days: i64| (today - Duration::days(days)).to_string();

    let transactions = [
        (TransactionType::Income, "Salary", 4200.0, 28, "Monthly pay"),
        (TransactionType::Expense, "Rent", 1650.0, 27, ""),
        (TransactionType::Expense, "Groceries", 182.35, 20, "Weekly shop"),
        (TransactionType::Expense, "Transport", 45.0, 14, "Bus pass"),
        (TransactionType::Expense, "Groceries", 96.1, 13, ""),
        (TransactionType::Income, "Freelance", 600.0, 9, "Logo design"),
        (TransactionType::Expense, "Dining", 58.9, 6, "Birthday dinner"),
        (TransactionType::Expense, "Utilities", 120.0, 2, "Power bill"),
    ];

    for (kind, category, amount, age, description) in transactions {
        state.transaction_store.create(
            Transaction::build(kind, category, amount, &days_ago(age)).description(description),
        )?;
    }

    println!("Creating test goals...");
    state.goal_store.create(
        Goal::build("Emergency fund", 10000.0)
            .current_amount(2500.0)
            .deadline(&days_ago(-180)),
    )?;
    state
        .goal_store
        .create(Goal::build("New laptop", 2200.0).current_amount(800.0).deadline(&days_ago(-60)))?;
    state
        .goal_store
        .create(Goal::build("House deposit", 80000.0).current_amount(12000.0))?;

    println!("Success!");

    Ok(())
}
