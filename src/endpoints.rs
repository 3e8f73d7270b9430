//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/goals/{goal_id}', use [format_endpoint].

use crate::database_id::DatabaseId;

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The route to list and create savings goals.
pub const GOALS_API: &str = "/api/goals";
/// The route to get, update and delete a single savings goal.
pub const GOAL_API: &str = "/api/goals/{goal_id}";
/// The route for the dashboard summary.
pub const DASHBOARD_API: &str = "/api/dashboard_data";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// e.g., '{goal_id}' in '/api/goals/{goal_id}'. Only the first parameter is
/// replaced. An unterminated parameter runs to the end of the path.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: DatabaseId) -> String {
    let Some((prefix, parameter_and_rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };

    let rest = parameter_and_rest
        .split_once('}')
        .map_or("", |(_, rest)| rest);

    format!("{prefix}{id}{rest}")
}
