// src/handlers/reports.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::ApiError, config::AppState, middleware::i18n::Locale};

// GET /api/reports/overview
pub async fn get_overview(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let overview = app_state.report_service
        .overview(&locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(overview)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, state};

    #[tokio::test]
    async fn overview_over_the_seed() {
        let (status, body) = read_json(get_overview(State(state()), Locale::default()).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["averageTicket"], 1100.0);
        // Um único mês de dados: não há base para crescimento.
        assert!(body["revenueGrowth"].is_null());
        assert_eq!(body["monthly"][0]["label"], "Ene");
    }
}
