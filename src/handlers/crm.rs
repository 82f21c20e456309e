// src/handlers/crm.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::crm::NewClient,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(length(max = 100, message = "La búsqueda admite hasta 100 caracteres."))]
    pub search: Option<String>,
}

// GET /api/clients?search=
pub async fn list_clients(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {

    params.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let clients = app_state.crm_service
        .list_clients(params.search.as_deref().unwrap_or(""))
        .await;

    Ok((StatusCode::OK, Json(clients)))
}

// GET /api/clients/{id}
pub async fn get_client(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {

    let client = app_state.crm_service
        .client_detail(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(client)))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientPayload {
    #[validate(length(min = 2, max = 120, message = "El nombre debe tener entre 2 y 120 caracteres."))]
    pub name: String,

    #[validate(email(message = "El email no es válido."))]
    pub email: String,

    #[validate(length(min = 6, max = 30, message = "El teléfono debe tener entre 6 y 30 caracteres."))]
    pub phone: String,

    pub birth_date: NaiveDate,

    #[serde(default)]
    #[validate(length(max = 500, message = "Las preferencias admiten hasta 500 caracteres."))]
    pub preferences: String,
}

// POST /api/clients
pub async fn create_client(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateClientPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let client = app_state.crm_service
        .create_client(NewClient {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            preferences: payload.preferences,
        })
        .await;

    Ok((StatusCode::CREATED, Json(client)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, state};

    #[tokio::test]
    async fn search_filters_by_email() {
        let query = SearchQuery { search: Some("ANA@".into()) };
        let (status, body) = read_json(
            list_clients(State(state()), Locale::default(), Query(query)).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let clients = body.as_array().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0]["name"], "Ana Rodríguez");
    }

    #[tokio::test]
    async fn empty_search_lists_everyone() {
        let (_, body) = read_json(
            list_clients(State(state()), Locale::default(), Query(SearchQuery::default())).await,
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn detail_carries_derived_total() {
        let (status, body) = read_json(
            get_client(State(state()), Locale::default(), Path(1)).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSpent"], 2600.0);
    }

    #[tokio::test]
    async fn missing_client_is_404() {
        let (status, body) = read_json(
            get_client(State(state()), Locale("en".into()), Path(99)).await,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Client 99 not found.");
    }

    fn client_payload(email: &str) -> CreateClientPayload {
        CreateClientPayload {
            name: "Julia Ruiz".into(),
            email: email.into(),
            phone: "+54 11 9999-0000".into(),
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
            preferences: "Piel sensible".into(),
        }
    }

    #[tokio::test]
    async fn created_client_has_no_spending_yet() {
        let app_state = state();
        let (status, body) = read_json(
            create_client(State(app_state.clone()), Locale::default(), Json(client_payload("julia.ruiz@email.com"))).await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["totalSpent"], 0.0);
        assert_eq!(body["visits"], 0);
        assert!(body["lastVisit"].is_null());

        let (status, _) = read_json(get_client(State(app_state), Locale::default(), Path(4)).await).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (status, body) = read_json(
            create_client(State(state()), Locale::default(), Json(client_payload("julia-en-email"))).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["email"][0], "El email no es válido.");
    }
}
