//! Dashboard module
//!
//! Provides the overview figures: income and expense totals, the balance,
//! spending per category, the latest transactions and the savings goals.

mod aggregation;
mod handlers;

pub use aggregation::{
    CategoryTotal, DashboardSummary, RECENT_TRANSACTION_COUNT, SpendingByCategory,
    compute_dashboard,
};
pub use handlers::get_dashboard_data;
