// src/handlers/finance.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::{validate_amount, DateQuery},
    middleware::i18n::Locale,
    models::finance::{NewPayment, PaymentMethod, PaymentStatus},
    services::finance_service::PaymentFilter,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PaymentQuery {
    #[validate(length(max = 100, message = "La búsqueda admite hasta 100 caracteres."))]
    pub search: Option<String>,
    // Códigos livres: "all" ou vazio não filtram; desconhecidos não casam com nada.
    pub status: Option<String>,
    pub method: Option<String>,
}

// GET /api/payments?search=&status=&method=
pub async fn list_payments(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<PaymentQuery>,
) -> Result<impl IntoResponse, ApiError> {

    params.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let filter = PaymentFilter {
        search: params.search.unwrap_or_default(),
        status: params.status,
        method: params.method,
    };
    let payments = app_state.finance_service.list_payments(&filter, &locale).await;

    Ok((StatusCode::OK, Json(payments)))
}

// GET /api/payments/summary?date=
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<DateQuery>,
) -> Result<impl IntoResponse, ApiError> {

    let date = params.date.unwrap_or_else(|| app_state.settings.today());
    let summary = app_state.finance_service
        .summary(date, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentPayload {
    // Sem data, o pagamento entra no "hoje" configurado.
    pub date: Option<NaiveDate>,

    #[validate(length(min = 2, max = 120, message = "El nombre del cliente debe tener entre 2 y 120 caracteres."))]
    pub client_name: String,

    #[validate(length(min = 1, message = "El servicio es obligatorio."))]
    pub service: String,

    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,

    pub method: PaymentMethod,

    pub status: Option<PaymentStatus>,

    pub appointment_id: Option<u32>,
}

// POST /api/payments
pub async fn record_payment(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<RecordPaymentPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let new_payment = NewPayment {
        date: payload.date.unwrap_or_else(|| app_state.settings.today()),
        client_name: payload.client_name,
        service: payload.service,
        amount: payload.amount,
        method: payload.method,
        status: payload.status.unwrap_or(PaymentStatus::Completed),
        appointment_id: payload.appointment_id,
    };
    let payment = app_state.finance_service.record_payment(new_payment, &locale).await;

    Ok((StatusCode::CREATED, Json(payment)))
}
