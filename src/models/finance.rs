// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::search::Searchable,
    middleware::i18n::Locale,
    models::status::{BadgeTone, StatusBadge},
};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[serde(alias = "efectivo")]
    Cash,
    #[serde(alias = "tarjeta")]
    Card,
    #[serde(alias = "transferencia")]
    Transfer,
}

impl PaymentMethod {
    // Ordem fixa dos cards "por método" no painel.
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer];

    pub fn code(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cash" | "efectivo" => Some(PaymentMethod::Cash),
            "card" | "tarjeta" => Some(PaymentMethod::Card),
            "transfer" | "transferencia" => Some(PaymentMethod::Transfer),
            _ => None,
        }
    }

    pub fn label(self, locale: &Locale) -> &'static str {
        let en = locale.is_english();
        match self {
            PaymentMethod::Cash => if en { "Cash" } else { "Efectivo" },
            PaymentMethod::Card => if en { "Credit/Debit card" } else { "Tarjeta de Crédito/Débito" },
            PaymentMethod::Transfer => if en { "Bank transfer" } else { "Transferencia Bancaria" },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[serde(alias = "completado")]
    Completed,
    #[serde(alias = "pendiente")]
    Pending,
    #[serde(alias = "cancelado")]
    Cancelled,
}

impl PaymentStatus {
    pub fn code(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" | "completado" => Some(PaymentStatus::Completed),
            "pending" | "pendiente" => Some(PaymentStatus::Pending),
            "cancelled" | "cancelado" => Some(PaymentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn badge(self, locale: &Locale) -> StatusBadge {
        let en = locale.is_english();
        let (label, tone) = match self {
            PaymentStatus::Completed => (if en { "Completed" } else { "Completado" }, BadgeTone::Green),
            PaymentStatus::Pending => (if en { "Pending" } else { "Pendiente" }, BadgeTone::Yellow),
            PaymentStatus::Cancelled => (if en { "Cancelled" } else { "Cancelado" }, BadgeTone::Red),
        };
        StatusBadge::new(self.code(), label, tone)
    }
}

// --- Pagamento ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u32,
    pub date: NaiveDate,
    pub client_name: String,
    pub service: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    // Referência fraca: só serve para consulta, pode não existir.
    pub appointment_id: Option<u32>,
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.client_name.as_str(), self.service.as_str()]
    }
}

// Dados de um pagamento novo; o id sai do store.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub date: NaiveDate,
    pub client_name: String,
    pub service: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub appointment_id: Option<u32>,
}

// --- Respostas ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    #[serde(flatten)]
    pub payment: Payment,
    pub badge: StatusBadge,
    pub method_label: &'static str,
    pub appointment_on_record: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodTotal {
    pub method: PaymentMethod,
    pub label: &'static str,
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub date: NaiveDate,
    pub total_revenue: Decimal,
    pub pending_amount: Decimal,
    pub revenue_on_date: Decimal,
    pub per_method: Vec<MethodTotal>,
}
