//! Summarises transactions and goals for the dashboard.
//!
//! Everything here is a pure function of the records passed in, the handler
//! is responsible for fetching them.

use std::{collections::HashMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
};

use crate::{
    goal::Goal,
    transaction::{Transaction, TransactionType},
};

/// How many of the latest transactions the dashboard shows.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// The figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// Income minus expenses, may be negative.
    pub balance: f64,
    /// Expense totals per category, largest first.
    pub spending_by_category: SpendingByCategory,
    /// Up to [RECENT_TRANSACTION_COUNT] transactions, most recent first.
    pub recent_transactions: Vec<Transaction>,
    /// Every goal, earliest deadline first.
    pub goals_summary: Vec<Goal>,
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category label.
    pub category: String,
    /// The sum of the expenses in the category.
    pub amount: f64,
}

/// Expense totals per category, ordered by amount descending then by name.
///
/// Serialized as a JSON object whose keys appear in that order, e.g.
/// `{"Rent": 1200.0, "Food": 80.0}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendingByCategory(pub Vec<CategoryTotal>);

impl Serialize for SpendingByCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|total| (total.category.as_str(), total.amount)),
        )
    }
}

impl<'de> Deserialize<'de> for SpendingByCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SpendingByCategoryVisitor)
    }
}

struct SpendingByCategoryVisitor;

impl<'de> Visitor<'de> for SpendingByCategoryVisitor {
    type Value = SpendingByCategory;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to amounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut totals = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((category, amount)) = map.next_entry::<String, f64>()? {
            totals.push(CategoryTotal { category, amount });
        }

        Ok(SpendingByCategory(totals))
    }
}

/// Build the dashboard summary.
///
/// `transactions` must be ordered most recent first and `goals` by deadline,
/// as the stores return them. The goals are passed through unchanged.
pub fn compute_dashboard(transactions: Vec<Transaction>, goals: Vec<Goal>) -> DashboardSummary {
    let (total_income, total_expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), transaction| {
                match transaction.kind {
                    TransactionType::Income => (income + transaction.amount, expenses),
                    TransactionType::Expense => (income, expenses + transaction.amount),
                }
            });

    let spending_by_category = group_expenses_by_category(&transactions);

    let mut recent_transactions = transactions;
    recent_transactions.truncate(RECENT_TRANSACTION_COUNT);

    DashboardSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        spending_by_category,
        recent_transactions,
        goals_summary: goals,
    }
}

/// Sum expenses per category. Income is ignored.
fn group_expenses_by_category(transactions: &[Transaction]) -> SpendingByCategory {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionType::Expense)
    {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut totals: Vec<_> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_owned(),
            amount,
        })
        .collect();

    totals.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    SpendingByCategory(totals)
}
