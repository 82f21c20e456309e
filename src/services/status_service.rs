// src/services/status_service.rs

// Código de status -> badge. Nunca falha: código desconhecido vira cinza
// com o próprio código como texto.

use crate::{
    middleware::i18n::Locale,
    models::{
        appointments::AppointmentStatus,
        finance::PaymentStatus,
        status::StatusBadge,
    },
};

pub fn appointment_badge(code: &str, locale: &Locale) -> StatusBadge {
    match AppointmentStatus::from_code(code) {
        Some(status) => status.badge(locale),
        None => StatusBadge::neutral(code),
    }
}

pub fn payment_badge(code: &str, locale: &Locale) -> StatusBadge {
    match PaymentStatus::from_code(code) {
        Some(status) => status.badge(locale),
        None => StatusBadge::neutral(code),
    }
}
