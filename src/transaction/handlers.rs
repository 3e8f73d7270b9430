//! HTTP handlers for creating, reading, updating and deleting transactions.

use axum::{
    Json,
    extract::{
        FromRef, Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    stores::{TransactionStore, sqlite::SQLiteTransactionStore},
    transaction::{Transaction, TransactionPayload},
};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The store for managing transactions.
    pub transaction_store: SQLiteTransactionStore,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// The body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A confirmation message for the user.
    pub message: String,
}

/// A route handler for creating a new transaction.
///
/// Responds with `201 Created`, the stored transaction and its location.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Response, Error> {
    let Json(payload) = payload?;
    let new_transaction = payload
        .into_new_transaction()
        .inspect_err(|error| tracing::debug!("rejected new transaction: {error}"))?;

    let transaction = state.transaction_store.create(new_transaction)?;
    tracing::info!("created transaction {}", transaction.id);

    let location = format_endpoint(endpoints::TRANSACTION_API, transaction.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(transaction)).into_response())
}

/// A route handler for listing every transaction, most recent first.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    state.transaction_store.list_all().map(Json)
}

/// A route handler for getting a single transaction.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = path?;
    state
        .transaction_store
        .get(transaction_id)?
        .map(Json)
        .ok_or(Error::NotFound)
}

/// A route handler for changing some or all fields of a transaction.
///
/// The payload is checked before the store is touched, so a rejected update
/// leaves the transaction as it was.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionPayload>, JsonRejection>,
) -> Result<Json<Transaction>, Error> {
    let Path(transaction_id) = path?;
    let Json(payload) = payload?;
    let patch = payload.into_patch().inspect_err(|error| {
        tracing::debug!("rejected update to transaction {transaction_id}: {error}")
    })?;

    let transaction = state
        .transaction_store
        .update(transaction_id, patch)?
        .ok_or(Error::NotFound)?;
    tracing::info!("updated transaction {transaction_id}");

    Ok(Json(transaction))
}

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<DeleteResponse>, Error> {
    let Path(transaction_id) = path?;
    if !state.transaction_store.delete(transaction_id)? {
        return Err(Error::NotFound);
    }

    tracing::info!("deleted transaction {transaction_id}");

    Ok(Json(DeleteResponse {
        message: "Transaction deleted successfully".to_owned(),
    }))
}
