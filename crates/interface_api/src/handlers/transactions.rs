//! Transaction handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::CurrentUser;
use crate::dto::transactions::{CreateTransactionRequest, TransactionResponse};
use crate::dto::validated;
use crate::error::ApiError;
use crate::AppState;

/// Records a settlement payment by the authenticated user
pub async fn create_transaction(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let request = validated(request)?;
    let transaction = state
        .service
        .create_transaction(request.into(), &user)
        .await?;
    Ok((StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
}
