// src/models/reports.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub label: &'static str,
    pub revenue: Decimal,
    pub appointments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePopularity {
    pub name: String,
    pub count: usize,
    pub revenue: Decimal,
    pub avg_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyLoad {
    pub hour: u32,
    pub appointments: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopClient {
    pub name: String,
    pub total_spent: Decimal,
    pub visits: usize,
    pub last_visit: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMetrics {
    pub total_clients: usize,
    pub recurring_clients: usize,
    // None quando não há clientes (sem divisão por zero).
    pub average_visits: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOverview {
    pub monthly: Vec<MonthlyRevenue>,
    pub revenue_growth: Option<Decimal>,
    pub appointment_growth: Option<Decimal>,
    pub average_ticket: Option<Decimal>,
    pub popular_services: Vec<ServicePopularity>,
    pub hourly: Vec<HourlyLoad>,
    pub top_clients: Vec<TopClient>,
    pub client_metrics: ClientMetrics,
}
