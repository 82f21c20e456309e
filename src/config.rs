// src/config.rs

use std::env;

use anyhow::Context;
use chrono::{Local, NaiveDate};

use crate::{
    db::SalonStore,
    services::{
        CrmService, DashboardService, FinanceService, InventoryService, ReportService,
        ScheduleService,
    },
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    // Fixa o "hoje" do painel (útil para demonstrar os dados de seed).
    pub fixed_today: Option<NaiveDate>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("SALON_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let fixed_today = match env::var("SALON_TODAY") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .with_context(|| format!("SALON_TODAY inválida: '{raw}' (esperado YYYY-MM-DD)"))?,
            ),
            _ => None,
        };

        Ok(Self { bind_addr, fixed_today })
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub schedule_service: ScheduleService,
    pub crm_service: CrmService,
    pub finance_service: FinanceService,
    pub inventory_service: InventoryService,
    pub dashboard_service: DashboardService,
    pub report_service: ReportService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Settings::from_env()?;
        let store = SalonStore::seeded();

        tracing::info!(
            "✅ Dados do salão carregados: {} turnos, {} clientes, {} produtos, {} pagamentos",
            store.appointments().len(),
            store.clients().len(),
            store.products().len(),
            store.payments().len()
        );

        Ok(Self::with_store(settings, store))
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(settings: Settings, store: SalonStore) -> Self {
        let store = store.into_shared();
        Self {
            settings,
            schedule_service: ScheduleService::new(store.clone()),
            crm_service: CrmService::new(store.clone()),
            finance_service: FinanceService::new(store.clone()),
            inventory_service: InventoryService::new(store.clone()),
            dashboard_service: DashboardService::new(store.clone()),
            report_service: ReportService::new(store),
        }
    }
}
