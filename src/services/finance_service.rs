// src/services/finance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::{error::AppError, money, search, time_format::weekday_short},
    db::{SalonStore, SharedStore},
    middleware::i18n::Locale,
    models::{
        appointments::{Appointment, ViewMode},
        finance::{
            DailyRevenue, FinanceSummary, MethodTotal, NewPayment, Payment, PaymentMethod,
            PaymentStatus, PaymentView,
        },
    },
    services::schedule_service::date_window,
};

// ---
// Agregações (sempre em Decimal, nada de float para dinheiro)
// ---

fn sum_amounts<'a>(payments: impl Iterator<Item = &'a Payment>) -> Result<Decimal, AppError> {
    money::checked_sum(payments.map(|p| p.amount))
}

pub fn total_revenue(payments: &[Payment]) -> Result<Decimal, AppError> {
    sum_amounts(payments.iter().filter(|p| p.status == PaymentStatus::Completed))
}

pub fn pending_amount(payments: &[Payment]) -> Result<Decimal, AppError> {
    sum_amounts(payments.iter().filter(|p| p.status == PaymentStatus::Pending))
}

pub fn revenue_on(payments: &[Payment], date: NaiveDate) -> Result<Decimal, AppError> {
    sum_amounts(
        payments
            .iter()
            .filter(|p| p.date == date && p.status == PaymentStatus::Completed),
    )
}

/// Só pagamentos concluídos. Os três métodos sempre aparecem, na ordem fixa.
pub fn per_method_totals(payments: &[Payment], locale: &Locale) -> Result<Vec<MethodTotal>, AppError> {
    PaymentMethod::ALL
        .iter()
        .map(|method| {
            let completed: Vec<&Payment> = payments
                .iter()
                .filter(|p| p.method == *method && p.status == PaymentStatus::Completed)
                .collect();
            Ok(MethodTotal {
                method: *method,
                label: method.label(locale),
                total: sum_amounts(completed.iter().copied())?,
                count: completed.len(),
            })
        })
        .collect()
}

/// Receita concluída dia a dia na semana (segunda a domingo) de `reference`.
pub fn weekly_revenue(
    payments: &[Payment],
    reference: NaiveDate,
    locale: &Locale,
) -> Result<Vec<DailyRevenue>, AppError> {
    date_window(reference, ViewMode::Week)
        .into_iter()
        .map(|date| {
            Ok(DailyRevenue {
                date,
                weekday: weekday_short(date, locale),
                amount: revenue_on(payments, date)?,
            })
        })
        .collect()
}

pub fn summarize(payments: &[Payment], date: NaiveDate, locale: &Locale) -> Result<FinanceSummary, AppError> {
    Ok(FinanceSummary {
        date,
        total_revenue: total_revenue(payments)?,
        pending_amount: pending_amount(payments)?,
        revenue_on_date: revenue_on(payments, date)?,
        per_method: per_method_totals(payments, locale)?,
    })
}

// Filtros da tela de pagamentos. Código desconhecido não casa com nada.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    pub search: String,
    pub status: Option<String>,
    pub method: Option<String>,
}

fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

impl PaymentFilter {
    pub fn matches(&self, payment: &Payment) -> bool {
        let status_ok = match self.status.as_deref() {
            None => true,
            Some(code) if is_wildcard(code) => true,
            Some(code) => PaymentStatus::from_code(code) == Some(payment.status),
        };
        let method_ok = match self.method.as_deref() {
            None => true,
            Some(code) if is_wildcard(code) => true,
            Some(code) => PaymentMethod::from_code(code) == Some(payment.method),
        };
        status_ok && method_ok && search::matches(payment, &self.search)
    }
}

pub fn filter_payments<'a>(payments: &'a [Payment], filter: &PaymentFilter) -> Vec<&'a Payment> {
    payments.iter().filter(|p| filter.matches(p)).collect()
}

/// A referência ao turno é fraca: só consulta, pode não existir.
pub fn linked_appointment<'a>(store: &'a SalonStore, payment: &Payment) -> Option<&'a Appointment> {
    payment.appointment_id.and_then(|id| store.find_appointment(id))
}

fn payment_view(store: &SalonStore, payment: &Payment, locale: &Locale) -> PaymentView {
    PaymentView {
        badge: payment.status.badge(locale),
        method_label: payment.method.label(locale),
        appointment_on_record: linked_appointment(store, payment).is_some(),
        payment: payment.clone(),
    }
}

#[derive(Clone)]
pub struct FinanceService {
    store: SharedStore,
}

impl FinanceService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_payments(&self, filter: &PaymentFilter, locale: &Locale) -> Vec<PaymentView> {
        let store = self.store.read().await;
        filter_payments(store.payments(), filter)
            .into_iter()
            .map(|p| payment_view(&store, p, locale))
            .collect()
    }

    pub async fn summary(&self, date: NaiveDate, locale: &Locale) -> Result<FinanceSummary, AppError> {
        let store = self.store.read().await;
        summarize(store.payments(), date, locale)
    }

    /// Registra um pagamento em memória (sem processamento real).
    pub async fn record_payment(&self, new_payment: NewPayment, locale: &Locale) -> PaymentView {
        let mut store = self.store.write().await;

        let payment = Payment {
            id: store.next_payment_id(),
            date: new_payment.date,
            client_name: new_payment.client_name.trim().to_string(),
            service: new_payment.service.trim().to_string(),
            amount: new_payment.amount,
            method: new_payment.method,
            status: new_payment.status,
            appointment_id: new_payment.appointment_id,
        };

        if let Some(id) = payment.appointment_id {
            if store.find_appointment(id).is_none() {
                tracing::warn!("Pagamento {} aponta para o turno {}, que não está na agenda", payment.id, id);
            }
        }

        store.insert_payment(payment.clone());
        tracing::info!("💰 Pagamento {} registrado: {} ({})", payment.id, payment.amount, payment.method.code());
        payment_view(&store, &payment, locale)
    }
}
