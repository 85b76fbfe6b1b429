//! Bill handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use core_kernel::BillId;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::dto::bills::{AmountOwedResponse, BillResponse, CreateBillRequest};
use crate::dto::validated;
use crate::error::ApiError;
use crate::AppState;

/// Creates a bill, splitting the total among the participants
pub async fn create_bill(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateBillRequest>,
) -> Result<(StatusCode, Json<BillResponse>), ApiError> {
    let request = validated(request)?;
    let bill = state.service.create_bill(request.into(), &user).await?;
    Ok((StatusCode::CREATED, Json(BillResponse::from(bill))))
}

/// Fetches a bill; only its payer and share-holders may see it
pub async fn get_bill(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BillResponse>, ApiError> {
    let bill = state.service.get_bill(BillId::from(id), &user).await?;
    Ok(Json(BillResponse::from(bill)))
}

/// The authenticated user's outstanding balance on a bill
pub async fn amount_owed(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AmountOwedResponse>, ApiError> {
    let bill_id = BillId::from(id);
    let amount_owed = state.service.amount_owed(bill_id, &user).await?;
    Ok(Json(AmountOwedResponse {
        bill_id,
        user_id: user.id,
        amount_owed,
    }))
}
