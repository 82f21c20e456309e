// src/handlers/inventory.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::validate_amount,
    middleware::i18n::Locale,
    models::inventory::NewProduct,
    services::inventory_service::ProductFilter,
};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductQuery {
    #[validate(length(max = 100, message = "La búsqueda admite hasta 100 caracteres."))]
    pub search: Option<String>,
    pub category: Option<String>,
    // "low" | "normal"; o resto não filtra.
    pub stock: Option<String>,
}

// GET /api/inventory/products?search=&category=&stock=
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(params): Query<ProductQuery>,
) -> Result<impl IntoResponse, ApiError> {

    params.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let filter = ProductFilter {
        search: params.search.unwrap_or_default(),
        category: params.category,
        stock: params.stock,
    };
    let products = app_state.inventory_service.list_products(&filter, &locale).await;

    Ok((StatusCode::OK, Json(products)))
}

// GET /api/inventory/summary
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let summary = app_state.inventory_service
        .summary()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, max = 120, message = "El nombre del producto es obligatorio."))]
    pub name: String,

    #[validate(length(min = 1, max = 60, message = "La categoría es obligatoria."))]
    pub category: String,

    #[serde(default)]
    pub description: String,

    pub current_stock: u32,

    pub minimum_stock: u32,

    pub max_stock: u32,

    #[validate(custom(function = "validate_amount"))]
    pub unit_price: Decimal,

    #[serde(default)]
    pub supplier: String,
}

impl CreateProductPayload {
    // Regra: o estoque máximo nunca fica abaixo do mínimo.
    fn validate_consistency(&self) -> Result<(), ValidationError> {
        if self.max_stock < self.minimum_stock {
            let mut err = ValidationError::new("max_below_minimum");
            err.message = Some("El stock máximo no puede ser menor que el mínimo.".into());
            return Err(err);
        }
        Ok(())
    }
}

// POST /api/inventory/products
pub async fn create_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    payload.validate_consistency()
        .map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("maxStock", e);
            AppError::ValidationError(errors).to_api_error(&locale)
        })?;

    let new_product = NewProduct {
        name: payload.name,
        category: payload.category,
        description: payload.description,
        current_stock: payload.current_stock,
        minimum_stock: payload.minimum_stock,
        max_stock: payload.max_stock,
        unit_price: payload.unit_price,
        supplier: payload.supplier,
        registered_on: app_state.settings.today(),
    };
    let product = app_state.inventory_service
        .create_product(new_product, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(product)))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RestockPayload {
    #[validate(range(min = 1, message = "La cantidad debe ser al menos 1."))]
    pub quantity: u32,
}

// POST /api/inventory/products/{id}/restock
pub async fn restock_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
    Json(payload): Json<RestockPayload>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let product = app_state.inventory_service
        .restock(id, payload.quantity)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(product)))
}

// DELETE /api/inventory/products/{id}
pub async fn delete_product(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {

    app_state.inventory_service
        .delete(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}
