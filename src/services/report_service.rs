// src/services/report_service.rs

use std::{cmp::Reverse, collections::BTreeMap};

use chrono::{Datelike, Timelike};
use rust_decimal::Decimal;

use crate::{
    common::{error::AppError, money, time_format::month_short},
    db::{SalonStore, SharedStore},
    middleware::i18n::Locale,
    models::{
        appointments::{Appointment, AppointmentStatus},
        crm::Client,
        finance::{Payment, PaymentStatus},
        reports::{ClientMetrics, HourlyLoad, MonthlyRevenue, ReportOverview, ServicePopularity, TopClient},
    },
    services::finance_service,
};

const TOP_CLIENTS: usize = 5;

fn is_active(appointment: &Appointment) -> bool {
    appointment.status != AppointmentStatus::Cancelled
}

/// Variação percentual com uma casa decimal. `None` se a base for zero.
pub fn growth_percent(current: Decimal, previous: Decimal) -> Option<Decimal> {
    (current - previous)
        .checked_div(previous)
        .map(|ratio| (ratio * Decimal::ONE_HUNDRED).round_dp(1))
}

/// Receita concluída ÷ quantidade de pagamentos concluídos.
pub fn average_ticket(payments: &[Payment]) -> Result<Option<Decimal>, AppError> {
    let completed = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .count();
    Ok(finance_service::total_revenue(payments)?
        .checked_div(Decimal::from(completed))
        .map(|avg| avg.round_dp(2)))
}

pub fn monthly_series(
    payments: &[Payment],
    appointments: &[Appointment],
    locale: &Locale,
) -> Result<Vec<MonthlyRevenue>, AppError> {
    let mut months: BTreeMap<(i32, u32), (Decimal, usize)> = BTreeMap::new();

    for payment in payments.iter().filter(|p| p.status == PaymentStatus::Completed) {
        let entry = months
            .entry((payment.date.year(), payment.date.month()))
            .or_insert((Decimal::ZERO, 0));
        entry.0 = money::checked_add(entry.0, payment.amount)?;
    }
    for appointment in appointments.iter().filter(|a| is_active(a)) {
        let entry = months
            .entry((appointment.date.year(), appointment.date.month()))
            .or_insert((Decimal::ZERO, 0));
        entry.1 += 1;
    }

    Ok(months
        .into_iter()
        .map(|((year, month), (revenue, appointments))| MonthlyRevenue {
            year,
            month,
            label: month_short(month, locale),
            revenue,
            appointments,
        })
        .collect())
}

pub fn popular_services(appointments: &[Appointment]) -> Result<Vec<ServicePopularity>, AppError> {
    let mut by_service: BTreeMap<&str, (usize, Decimal)> = BTreeMap::new();
    for appointment in appointments.iter().filter(|a| is_active(a)) {
        let entry = by_service
            .entry(appointment.service.as_str())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 = money::checked_add(entry.1, appointment.price)?;
    }

    let mut ranking: Vec<ServicePopularity> = by_service
        .into_iter()
        .map(|(name, (count, revenue))| ServicePopularity {
            name: name.to_string(),
            count,
            revenue,
            avg_price: revenue.checked_div(Decimal::from(count)).map(|p| p.round_dp(2)),
        })
        .collect();
    // Mais atendimentos primeiro; empate desempata por receita. O sort é estável (nome).
    ranking.sort_by_key(|s| (Reverse(s.count), Reverse(s.revenue)));
    Ok(ranking)
}

pub fn hourly_distribution(appointments: &[Appointment]) -> Vec<HourlyLoad> {
    let mut by_hour: BTreeMap<u32, usize> = BTreeMap::new();
    for appointment in appointments.iter().filter(|a| is_active(a)) {
        *by_hour.entry(appointment.time.hour()).or_insert(0) += 1;
    }
    by_hour
        .into_iter()
        .map(|(hour, appointments)| HourlyLoad { hour, appointments })
        .collect()
}

pub fn top_clients(clients: &[Client], limit: usize) -> Vec<TopClient> {
    let mut ranking: Vec<TopClient> = clients
        .iter()
        .map(|c| TopClient {
            name: c.name.clone(),
            total_spent: c.total_spent(),
            visits: c.visits(),
            last_visit: c.last_visit(),
        })
        .collect();
    ranking.sort_by_key(|c| Reverse(c.total_spent));
    ranking.truncate(limit);
    ranking
}

pub fn client_metrics(clients: &[Client]) -> ClientMetrics {
    let total_visits: usize = clients.iter().map(Client::visits).sum();
    ClientMetrics {
        total_clients: clients.len(),
        recurring_clients: clients.iter().filter(|c| c.visits() > 1).count(),
        average_visits: Decimal::from(total_visits)
            .checked_div(Decimal::from(clients.len()))
            .map(|avg| avg.round_dp(1)),
    }
}

pub fn build_overview(store: &SalonStore, locale: &Locale) -> Result<ReportOverview, AppError> {
    let monthly = monthly_series(store.payments(), store.appointments(), locale)?;

    let (revenue_growth, appointment_growth) = match monthly.as_slice() {
        [.., previous, current] => (
            growth_percent(current.revenue, previous.revenue),
            growth_percent(
                Decimal::from(current.appointments),
                Decimal::from(previous.appointments),
            ),
        ),
        _ => (None, None),
    };

    Ok(ReportOverview {
        revenue_growth,
        appointment_growth,
        average_ticket: average_ticket(store.payments())?,
        popular_services: popular_services(store.appointments())?,
        hourly: hourly_distribution(store.appointments()),
        top_clients: top_clients(store.clients(), TOP_CLIENTS),
        client_metrics: client_metrics(store.clients()),
        monthly,
    })
}

#[derive(Clone)]
pub struct ReportService {
    store: SharedStore,
}

impl ReportService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn overview(&self, locale: &Locale) -> Result<ReportOverview, AppError> {
        let store = self.store.read().await;
        let overview = build_overview(&store, locale)?;
        tracing::debug!("Relatório gerado com {} meses", overview.monthly.len());
        Ok(overview)
    }
}
