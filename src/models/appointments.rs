// src/models/appointments.rs

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{search::Searchable, time_format::hhmm},
    middleware::i18n::Locale,
    models::status::{BadgeTone, StatusBadge},
};

// --- Enums ---

// Os aliases aceitam os códigos em espanhol usados nas planilhas do salão.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[serde(alias = "pendiente")]
    Pending,
    #[serde(alias = "confirmado")]
    Confirmed,
    #[serde(alias = "en_progreso")]
    InProgress,
    #[serde(alias = "cancelado")]
    Cancelled,
}

impl AppointmentStatus {
    pub fn code(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" | "pendiente" => Some(AppointmentStatus::Pending),
            "confirmed" | "confirmado" => Some(AppointmentStatus::Confirmed),
            "in_progress" | "en_progreso" => Some(AppointmentStatus::InProgress),
            "cancelled" | "cancelado" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    /// pending -> confirmed | cancelled
    /// confirmed -> in_progress | cancelled
    /// in_progress -> cancelled
    /// cancelled é terminal.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, InProgress)
                | (Confirmed, Cancelled)
                | (InProgress, Cancelled)
        )
    }

    pub fn badge(self, locale: &Locale) -> StatusBadge {
        let en = locale.is_english();
        let (label, tone) = match self {
            AppointmentStatus::Pending => (if en { "Pending" } else { "Pendiente" }, BadgeTone::Yellow),
            AppointmentStatus::Confirmed => (if en { "Confirmed" } else { "Confirmado" }, BadgeTone::Green),
            AppointmentStatus::InProgress => (if en { "In progress" } else { "En progreso" }, BadgeTone::Blue),
            AppointmentStatus::Cancelled => (if en { "Cancelled" } else { "Cancelado" }, BadgeTone::Red),
        };
        StatusBadge::new(self.code(), label, tone)
    }
}

// Visão da agenda: um dia ou a semana (segunda a domingo).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub client_name: String,
    pub client_phone: String,
    pub service: String,
    pub duration_minutes: u32,
    pub price: Decimal,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn ends_at(&self) -> NaiveTime {
        self.time + TimeDelta::minutes(i64::from(self.duration_minutes))
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.service.as_str(),
            self.client_phone.as_str(),
        ]
    }
}

// Item do catálogo de serviços: de onde saem duração e preço do agendamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    pub name: String,
    pub duration_minutes: u32,
    pub price: Decimal,
}

// --- Respostas ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    #[serde(with = "hhmm")]
    pub ends_at: NaiveTime,
    pub badge: StatusBadge,
}

impl AppointmentView {
    pub fn new(appointment: &Appointment, locale: &Locale) -> Self {
        Self {
            ends_at: appointment.ends_at(),
            badge: appointment.status.badge(locale),
            appointment: appointment.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListing {
    pub view: ViewMode,
    pub dates: Vec<NaiveDate>,
    pub appointments: Vec<AppointmentView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub appointments: Vec<AppointmentView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCatalog {
    pub services: Vec<ServiceOffering>,
    pub time_slots: Vec<String>,
}
