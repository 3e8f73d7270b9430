//! A personal finance tracker.
//!
//! This library provides a JSON REST API for recording income and expense
//! transactions, tracking savings goals and summarising both on a dashboard.
//! Records are kept in a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod error;
mod goal;
mod logging;
mod merge;
mod not_found;
mod routing;
pub mod stores;
mod transaction;
mod validation;

pub use app_state::AppState;
pub use dashboard::{
    CategoryTotal, DashboardSummary, RECENT_TRANSACTION_COUNT, SpendingByCategory,
    compute_dashboard,
};
pub use database_id::{DatabaseId, GoalId, TransactionId};
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorResponse};
pub use goal::{Goal, GoalPatch, GoalPayload, NewGoal};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    DeleteResponse, NewTransaction, Transaction, TransactionPatch, TransactionPayload,
    TransactionType,
};
pub use validation::{Bound, ValidationError};

/// Shut down the server when the process receives Ctrl+C or SIGTERM.
///
/// In-flight requests are given one second to finish.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to install SIGTERM handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
