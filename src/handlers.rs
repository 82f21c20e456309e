pub mod appointments;
pub mod crm;
pub mod dashboard;
pub mod finance;
pub mod inventory;
pub mod reports;
pub mod status;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::ValidationError;

use crate::common::money::MAX_AMOUNT;

// ?date=YYYY-MM-DD; sem data, vale o "hoje" configurado.
#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

// Valores de dinheiro digitados: entre 0 e o teto do painel.
pub(crate) fn validate_amount(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("El monto no puede ser negativo.".into());
        return Err(err);
    }
    if *val > MAX_AMOUNT {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &MAX_AMOUNT.to_string());
        err.message = Some("El monto supera el máximo permitido (99.999.999,99).".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::NaiveDate;
    use serde_json::Value;

    use crate::{
        config::{AppState, Settings},
        db::SalonStore,
    };

    pub fn state() -> AppState {
        let settings = Settings {
            bind_addr: "127.0.0.1:0".into(),
            fixed_today: NaiveDate::from_ymd_opt(2024, 1, 27),
        };
        AppState::with_store(settings, SalonStore::seeded())
    }

    pub async fn read_json(response: impl IntoResponse) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("corpo da resposta");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON válido")
        };
        (status, body)
    }
}
