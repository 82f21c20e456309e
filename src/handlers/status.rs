// src/handlers/status.rs

use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    middleware::i18n::Locale,
    models::status::StatusBadge,
    services::status_service,
};

// GET /api/badges/{kind}/{code}
// kind: "appointment" | "payment". Nunca falha: o desconhecido sai em cinza.
pub async fn get_badge(
    locale: Locale,
    Path((kind, code)): Path<(String, String)>,
) -> impl IntoResponse {
    let badge = match kind.as_str() {
        "appointment" => status_service::appointment_badge(&code, &locale),
        "payment" => status_service::payment_badge(&code, &locale),
        _ => StatusBadge::neutral(&code),
    };
    (StatusCode::OK, Json(badge))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::read_json;

    async fn badge(kind: &str, code: &str) -> serde_json::Value {
        let path = Path((kind.to_string(), code.to_string()));
        read_json(get_badge(Locale::default(), path).await).await.1
    }

    #[tokio::test]
    async fn known_codes_get_their_tone() {
        let body = badge("appointment", "in_progress").await;
        assert_eq!(body["label"], "En progreso");
        assert_eq!(body["tone"], "blue");
        assert_eq!(badge("payment", "completed").await["tone"], "green");
    }

    #[tokio::test]
    async fn unknown_codes_pass_through_in_gray() {
        let body = badge("payment", "refunded").await;
        assert_eq!(body["label"], "refunded");
        assert_eq!(body["tone"], "gray");
        assert_eq!(badge("invoice", "paid").await["tone"], "gray");
    }
}
