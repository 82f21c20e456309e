// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::DateQuery,
    middleware::i18n::Locale,
};

// GET /api/dashboard/summary?date=
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<DateQuery>,
) -> Result<impl IntoResponse, ApiError> {

    let date = params.date.unwrap_or_else(|| app_state.settings.today());
    let summary = app_state.dashboard_service
        .get_summary(date, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}
