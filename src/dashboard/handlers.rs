//! The dashboard HTTP handler.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    dashboard::aggregation::{DashboardSummary, compute_dashboard},
    stores::{
        GoalStore, TransactionStore,
        sqlite::{SQLiteGoalStore, SQLiteTransactionStore},
    },
};

/// The state needed for building the dashboard summary.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store to read transactions from.
    pub transaction_store: SQLiteTransactionStore,
    /// The store to read savings goals from.
    pub goal_store: SQLiteGoalStore,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            goal_store: state.goal_store.clone(),
        }
    }
}

/// A route handler for the dashboard summary.
///
/// Totals are computed from every stored transaction on each request.
pub async fn get_dashboard_data(
    State(state): State<DashboardState>,
) -> Result<Json<DashboardSummary>, Error> {
    let transactions = state.transaction_store.list_all()?;
    let goals = state.goal_store.list_all()?;

    Ok(Json(compute_dashboard(transactions, goals)))
}

#[cfg(test)]
mod dashboard_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router,
        dashboard::{CategoryTotal, DashboardSummary, SpendingByCategory},
        endpoints::{self, format_endpoint},
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn post(server: &TestServer, path: &str, body: Value) -> Value {
        let response = server.post(path).json(&body).await;
        response.assert_status(StatusCode::CREATED);

        response.json::<Value>()
    }

    #[tokio::test]
    async fn empty_store_gives_zero_summary() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_API).await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "total_income": 0.0,
            "total_expenses": 0.0,
            "balance": 0.0,
            "spending_by_category": {},
            "recent_transactions": [],
            "goals_summary": []
        }));
    }

    #[tokio::test]
    async fn summarises_stored_records() {
        let server = get_test_server();
        post(
            &server,
            endpoints::TRANSACTIONS_API,
            json!({"type": "income", "category": "Salary", "amount": 1000, "date": "2024-01-01"}),
        )
        .await;
        post(
            &server,
            endpoints::TRANSACTIONS_API,
            json!({"type": "expense", "category": "Food", "amount": 50, "date": "2024-01-02"}),
        )
        .await;
        post(
            &server,
            endpoints::TRANSACTIONS_API,
            json!({"type": "expense", "category": "Food", "amount": 30, "date": "2024-01-03"}),
        )
        .await;
        post(
            &server,
            endpoints::TRANSACTIONS_API,
            json!({"type": "expense", "category": "Rent", "amount": 400, "date": "2024-01-04"}),
        )
        .await;
        post(
            &server,
            endpoints::GOALS_API,
            json!({"name": "Holiday", "target_amount": 2000}),
        )
        .await;

        let summary = server
            .get(endpoints::DASHBOARD_API)
            .await
            .json::<DashboardSummary>();

        assert_eq!(summary.total_income, 1000.0);
        assert_eq!(summary.total_expenses, 480.0);
        assert_eq!(summary.balance, 520.0);
        assert_eq!(
            summary.spending_by_category,
            SpendingByCategory(vec![
                CategoryTotal {
                    category: "Rent".to_owned(),
                    amount: 400.0
                },
                CategoryTotal {
                    category: "Food".to_owned(),
                    amount: 80.0
                },
            ])
        );
        let recent_dates: Vec<_> = summary
            .recent_transactions
            .iter()
            .map(|transaction| transaction.date.as_str())
            .collect();
        assert_eq!(
            recent_dates,
            vec!["2024-01-04", "2024-01-03", "2024-01-02", "2024-01-01"]
        );
        assert_eq!(summary.goals_summary.len(), 1);
        assert_eq!(summary.goals_summary[0].name, "Holiday");
    }

    #[tokio::test]
    async fn reflects_deleted_transactions() {
        let server = get_test_server();
        let expense = post(
            &server,
            endpoints::TRANSACTIONS_API,
            json!({"type": "expense", "category": "Food", "amount": 50, "date": "2024-01-02"}),
        )
        .await;
        let expense: Transaction = serde_json::from_value(expense).unwrap();

        server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, expense.id))
            .await
            .assert_status_ok();

        let summary = server
            .get(endpoints::DASHBOARD_API)
            .await
            .json::<DashboardSummary>();
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.spending_by_category, SpendingByCategory::default());
    }

    #[tokio::test]
    async fn recent_transactions_are_capped_at_five() {
        let server = get_test_server();
        for day in 1..=7 {
            post(
                &server,
                endpoints::TRANSACTIONS_API,
                json!({
                    "type": "expense",
                    "category": "Food",
                    "amount": 1,
                    "date": format!("2024-02-{day:02}")
                }),
            )
            .await;
        }

        let summary = server
            .get(endpoints::DASHBOARD_API)
            .await
            .json::<DashboardSummary>();

        assert_eq!(summary.recent_transactions.len(), 5);
        assert_eq!(summary.recent_transactions[0].date, "2024-02-07");
        assert_eq!(summary.total_expenses, 7.0);
    }
}
