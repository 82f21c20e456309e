pub mod crm_service;
pub mod dashboard_service;
pub mod finance_service;
pub mod inventory_service;
pub mod report_service;
pub mod schedule_service;
pub mod status_service;

pub use crm_service::CrmService;
pub use dashboard_service::DashboardService;
pub use finance_service::FinanceService;
pub use inventory_service::InventoryService;
pub use report_service::ReportService;
pub use schedule_service::ScheduleService;
