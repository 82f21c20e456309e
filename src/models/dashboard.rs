// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{
    appointments::AppointmentView,
    finance::DailyRevenue,
    inventory::LowStockItem,
};

// Os cards do topo + as listas do painel inicial, para um dia.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub appointments: usize,
    pub clients: usize,
    pub low_stock: usize,
    pub agenda: Vec<AppointmentView>,
    pub low_stock_items: Vec<LowStockItem>,
    pub weekly_revenue: Vec<DailyRevenue>,
}
