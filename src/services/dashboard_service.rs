// src/services/dashboard_service.rs

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    db::{SalonStore, SharedStore},
    middleware::i18n::Locale,
    models::{
        appointments::{AppointmentView, ViewMode},
        dashboard::DashboardSummary,
    },
    services::{finance_service, inventory_service, schedule_service},
};

// Resumo do dia: cards do topo, agenda, estoque baixo e gráfico da semana.
pub fn build_summary(store: &SalonStore, date: NaiveDate, locale: &Locale) -> Result<DashboardSummary, AppError> {
    let window = schedule_service::date_window(date, ViewMode::Day);
    let today = schedule_service::filter_by_window(store.appointments(), &window);

    let clients: BTreeSet<&str> = today.iter().map(|a| a.client_name.as_str()).collect();
    let low_stock_items = inventory_service::low_stock_items(store.products());

    Ok(DashboardSummary {
        date,
        revenue: finance_service::revenue_on(store.payments(), date)?,
        appointments: today.len(),
        clients: clients.len(),
        low_stock: low_stock_items.len(),
        agenda: today.iter().map(|a| AppointmentView::new(a, locale)).collect(),
        low_stock_items,
        weekly_revenue: finance_service::weekly_revenue(store.payments(), date, locale)?,
    })
}

#[derive(Clone)]
pub struct DashboardService {
    store: SharedStore,
}

impl DashboardService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get_summary(&self, date: NaiveDate, locale: &Locale) -> Result<DashboardSummary, AppError> {
        let store = self.store.read().await;
        build_summary(&store, date, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_for_a_busy_day() {
        let store = SalonStore::seeded();
        let summary = build_summary(&store, date(2024, 1, 27), &Locale::default()).unwrap();

        assert_eq!(summary.revenue, Decimal::from(1400));
        assert_eq!(summary.appointments, 3);
        assert_eq!(summary.clients, 3);
        assert_eq!(summary.low_stock, 3);
        assert_eq!(summary.agenda[1].badge.label, "En progreso");
        assert_eq!(summary.weekly_revenue.len(), 7);
        assert_eq!(
            summary.low_stock_items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
            vec!["Crema hidratante facial", "Aceite esencial de lavanda", "Toallas desechables"]
        );
    }

    #[test]
    fn summary_for_an_empty_store_is_all_zero() {
        let store = SalonStore::default();
        let summary = build_summary(&store, date(2024, 1, 27), &Locale::default()).unwrap();
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.appointments, 0);
        assert_eq!(summary.clients, 0);
        assert_eq!(summary.low_stock, 0);
        assert!(summary.agenda.is_empty());
        assert!(summary.weekly_revenue.iter().all(|d| d.amount.is_zero()));
    }

    #[tokio::test]
    async fn service_reads_the_shared_store() {
        let svc = DashboardService::new(SalonStore::seeded().into_shared());
        let summary = svc.get_summary(date(2024, 1, 28), &Locale::default()).await.unwrap();
        assert_eq!(summary.appointments, 2);
        assert_eq!(summary.revenue, Decimal::ZERO);
    }
}
