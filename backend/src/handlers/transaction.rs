//! HTTP handlers for marketplace transactions

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::TransactionStatus;

use crate::error::AppResult;
use crate::services::transaction::{TransactionList, TransactionService};
use crate::AppState;

use super::parse_param;

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    pub status: Option<String>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionsQuery>,
) -> AppResult<Json<TransactionList>> {
    let status: Option<TransactionStatus> = parse_param("status", query.status.as_deref())?;
    let service = TransactionService::new(state.store);
    Ok(Json(service.list(status)))
}
