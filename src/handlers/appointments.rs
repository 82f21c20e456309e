// src/handlers/appointments.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::{error::{ApiError, AppError}, time_format::hhmm},
    config::AppState,
    handlers::DateQuery,
    middleware::i18n::Locale,
    models::appointments::{AppointmentStatus, ViewMode},
};

#[derive(Debug, Deserialize, Validate)]
pub struct AppointmentQuery {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub view: ViewMode,
    #[validate(length(max = 100, message = "La búsqueda admite hasta 100 caracteres."))]
    pub search: Option<String>,
}

// GET /api/appointments?date=&view=day|week&search=
pub async fn list_appointments(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<AppointmentQuery>,
) -> Result<impl IntoResponse, ApiError> {

    params.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let reference = params.date.unwrap_or_else(|| app_state.settings.today());
    let listing = app_state.schedule_service
        .list_appointments(reference, params.view, params.search.as_deref().unwrap_or(""), &locale)
        .await;

    Ok((StatusCode::OK, Json(listing)))
}

// GET /api/appointments/week?date=
pub async fn week_agenda(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<DateQuery>,
) -> impl IntoResponse {
    let reference = params.date.unwrap_or_else(|| app_state.settings.today());
    let agenda = app_state.schedule_service.week_agenda(reference, &locale).await;
    (StatusCode::OK, Json(agenda))
}

// GET /api/appointments/catalog
pub async fn get_catalog(State(app_state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(app_state.schedule_service.catalog().await))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    #[validate(length(min = 2, max = 120, message = "El nombre del cliente debe tener entre 2 y 120 caracteres."))]
    pub client_name: String,

    #[validate(length(min = 6, max = 30, message = "El teléfono debe tener entre 6 y 30 caracteres."))]
    pub client_phone: String,

    pub date: NaiveDate,

    #[serde(with = "hhmm")]
    pub time: NaiveTime,

    #[validate(length(min = 1, message = "required"))]
    pub service: String,
}

// POST /api/appointments
pub async fn create_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let appointment = app_state.schedule_service
        .schedule(
            payload.date,
            payload.time,
            &payload.client_name,
            &payload.client_phone,
            &payload.service,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: AppointmentStatus,
}

// PATCH /api/appointments/{id}/status
pub async fn update_status(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {

    let appointment = app_state.schedule_service
        .transition(id, payload.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(appointment)))
}

// DELETE /api/appointments/{id}
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {

    app_state.schedule_service
        .delete(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, state};

    fn query(date: Option<NaiveDate>, view: ViewMode, search: Option<&str>) -> Query<AppointmentQuery> {
        Query(AppointmentQuery { date, view, search: search.map(str::to_string) })
    }

    #[tokio::test]
    async fn day_listing_defaults_to_configured_today() {
        let (status, body) = read_json(
            list_appointments(State(state()), Locale::default(), query(None, ViewMode::Day, None)).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "day");
        assert_eq!(body["dates"][0], "2024-01-27");
        assert_eq!(body["appointments"].as_array().unwrap().len(), 3);
        assert_eq!(body["appointments"][0]["time"], "09:00");
        assert_eq!(body["appointments"][0]["badge"]["tone"], "green");
    }

    #[tokio::test]
    async fn overlong_search_is_rejected() {
        let long = "x".repeat(101);
        let (status, body) = read_json(
            list_appointments(State(state()), Locale::default(), query(None, ViewMode::Week, Some(long.as_str()))).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["search"].is_array());
    }

    #[tokio::test]
    async fn create_then_confirm() {
        let app_state = state();
        let payload = CreateAppointmentPayload {
            client_name: "Julia Ruiz".into(),
            client_phone: "+54 11 9999-0000".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
            time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            service: "Tratamiento facial".into(),
        };
        let (status, body) = read_json(
            create_appointment(State(app_state.clone()), Locale::default(), Json(payload)).await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 6);
        assert_eq!(body["durationMinutes"], 75);
        assert_eq!(body["status"], "pending");

        let (status, body) = read_json(
            update_status(
                State(app_state),
                Locale::default(),
                Path(6),
                Json(UpdateStatusPayload { status: AppointmentStatus::Confirmed }),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "confirmed");
    }

    #[tokio::test]
    async fn unknown_service_is_unprocessable() {
        let payload = CreateAppointmentPayload {
            client_name: "Julia Ruiz".into(),
            client_phone: "+54 11 9999-0000".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            service: "Botox".into(),
        };
        let (status, body) = read_json(
            create_appointment(State(state()), Locale("en".into()), Json(payload)).await,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Unknown service: Botox.");
    }

    #[tokio::test]
    async fn invalid_payload_reports_each_field() {
        let payload = CreateAppointmentPayload {
            client_name: "J".into(),
            client_phone: "12".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 29).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            service: "Manicure".into(),
        };
        let (status, body) = read_json(
            create_appointment(State(state()), Locale::default(), Json(payload)).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"].as_object().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_answers_not_implemented() {
        let (status, body) = read_json(
            delete_appointment(State(state()), Locale::default(), Path(1)).await,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn week_agenda_has_seven_days() {
        let (status, body) = read_json(
            week_agenda(State(state()), Locale::default(), Query(DateQuery::default())).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 7);
        assert_eq!(body[5]["weekday"], "Sáb");
    }

    #[tokio::test]
    async fn catalog_lists_services_and_slots() {
        let (_, body) = read_json(get_catalog(State(state())).await).await;
        assert_eq!(body["services"].as_array().unwrap().len(), 8);
        assert_eq!(body["timeSlots"][0], "09:00");
    }
}
