//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState,
    dashboard::get_dashboard_data,
    endpoints,
    goal::{
        create_goal_endpoint, delete_goal_endpoint, get_goal_endpoint, list_goals_endpoint,
        update_goal_endpoint,
    },
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        list_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::GOALS_API,
            get(list_goals_endpoint).post(create_goal_endpoint),
        )
        .route(
            endpoints::GOAL_API,
            get(get_goal_endpoint)
                .put(update_goal_endpoint)
                .delete(delete_goal_endpoint),
        )
        .route(endpoints::DASHBOARD_API, get(get_dashboard_data))
        .fallback(get_404_not_found)
        .with_state(state)
}
