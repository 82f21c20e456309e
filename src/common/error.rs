// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::middleware::i18n::Locale;

// Erros de domínio. A tradução para HTTP fica em `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Agendamento {0} não encontrado")]
    AppointmentNotFound(u32),

    #[error("Cliente {0} não encontrado")]
    ClientNotFound(u32),

    #[error("Produto {0} não encontrado")]
    ProductNotFound(u32),

    #[error("Serviço desconhecido: {0}")]
    UnknownService(String),

    #[error("Horário fora da grade: {0}")]
    UnavailableTimeSlot(String),

    #[error("Estoque máximo {maximum} abaixo do mínimo {minimum}")]
    InvalidStockLimits { minimum: u32, maximum: u32 },

    #[error("Transição de status inválida: {from} -> {to}")]
    InvalidStatusTransition { from: &'static str, to: &'static str },

    // Botões que no painel não faziam nada (excluir, repor estoque).
    #[error("Operação não implementada: {0}")]
    NotImplemented(&'static str),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// O erro que sai pela API: status + mensagem já traduzida.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AppointmentNotFound(_)
            | AppError::ClientNotFound(_)
            | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnknownService(_)
            | AppError::UnavailableTimeSlot(_)
            | AppError::InvalidStockLimits { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidStatusTransition { .. } => StatusCode::CONFLICT,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let en = locale.is_english();
        let status = self.status_code();

        let error = match self {
            AppError::ValidationError(errors) => {
                // Retorna todos os detalhes da validação, campo a campo.
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<Value> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => Value::String(m.to_string()),
                            None => Value::String(e.code.to_string()),
                        })
                        .collect();
                    details.insert(field.to_string(), Value::Array(messages));
                }
                let error = if en {
                    "One or more fields are invalid."
                } else {
                    "Uno o más campos son inválidos."
                };
                return ApiError {
                    status,
                    error: error.to_string(),
                    details: Some(Value::Object(details)),
                };
            }
            AppError::AppointmentNotFound(id) if en => format!("Appointment {id} not found."),
            AppError::AppointmentNotFound(id) => format!("Turno {id} no encontrado."),
            AppError::ClientNotFound(id) if en => format!("Client {id} not found."),
            AppError::ClientNotFound(id) => format!("Cliente {id} no encontrado."),
            AppError::ProductNotFound(id) if en => format!("Product {id} not found."),
            AppError::ProductNotFound(id) => format!("Producto {id} no encontrado."),
            AppError::UnknownService(name) if en => format!("Unknown service: {name}."),
            AppError::UnknownService(name) => format!("Servicio desconocido: {name}."),
            AppError::UnavailableTimeSlot(time) if en => {
                format!("{time} is not a bookable time slot.")
            }
            AppError::UnavailableTimeSlot(time) => {
                format!("{time} no es un horario disponible.")
            }
            AppError::InvalidStockLimits { minimum, maximum } if en => {
                format!("Maximum stock ({maximum}) cannot be below the minimum ({minimum}).")
            }
            AppError::InvalidStockLimits { minimum, maximum } => {
                format!("El stock máximo ({maximum}) no puede ser menor que el mínimo ({minimum}).")
            }
            AppError::InvalidStatusTransition { from, to } if en => {
                format!("Cannot move an appointment from '{from}' to '{to}'.")
            }
            AppError::InvalidStatusTransition { from, to } => {
                format!("No se puede pasar un turno de '{from}' a '{to}'.")
            }
            AppError::NotImplemented(op) if en => format!("Operation not available yet: {op}."),
            AppError::NotImplemented(op) => format!("Operación todavía no disponible: {op}."),
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                if en {
                    "An unexpected error occurred.".to_string()
                } else {
                    "Ocurrió un error inesperado.".to_string()
                }
            }
        };

        ApiError { status, error, details: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn not_found_maps_to_404_with_spanish_message_by_default() {
        let api = AppError::ClientNotFound(9).to_api_error(&Locale::default());
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.error, "Cliente 9 no encontrado.");
        assert!(api.details.is_none());
    }

    #[test]
    fn english_locale_translates_messages() {
        let api = AppError::NotImplemented("restock").to_api_error(&Locale("en".into()));
        assert_eq!(api.status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(api.error, "Operation not available yet: restock.");
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("range");
        err.message = Some("negativo".into());
        errors.add("amount", err);

        let api = AppError::ValidationError(errors).to_api_error(&Locale::default());
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        let details = api.details.expect("details");
        assert_eq!(details["amount"][0], "negativo");
    }

    #[test]
    fn invalid_transition_is_a_conflict() {
        let err = AppError::InvalidStatusTransition { from: "cancelled", to: "confirmed" };
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn overflow_is_an_internal_error() {
        let err = crate::common::money::checked_add(rust_decimal::Decimal::MAX, rust_decimal::Decimal::ONE)
            .unwrap_err();
        let api = err.to_api_error(&Locale::default());
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.error, "Ocurrió un error inesperado.");
    }
}
