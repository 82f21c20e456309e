//src/main.rs

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;

fn build_router(app_state: AppState) -> Router {
    let appointment_routes = Router::new()
        .route("/"
               ,get(handlers::appointments::list_appointments)
               .post(handlers::appointments::create_appointment)
        )
        .route("/week", get(handlers::appointments::week_agenda))
        .route("/catalog", get(handlers::appointments::get_catalog))
        .route("/{id}", delete(handlers::appointments::delete_appointment))
        .route("/{id}/status", patch(handlers::appointments::update_status));

    let client_routes = Router::new()
        .route("/"
               ,get(handlers::crm::list_clients)
               .post(handlers::crm::create_client)
        )
        .route("/{id}", get(handlers::crm::get_client));

    let payment_routes = Router::new()
        .route("/"
               ,get(handlers::finance::list_payments)
               .post(handlers::finance::record_payment)
        )
        .route("/summary", get(handlers::finance::get_summary));

    let inventory_routes = Router::new()
        .route("/products"
               ,get(handlers::inventory::list_products)
               .post(handlers::inventory::create_product)
        )
        .route("/products/{id}", delete(handlers::inventory::delete_product))
        .route("/products/{id}/restock", post(handlers::inventory::restock_product))
        .route("/summary", get(handlers::inventory::get_summary));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard/summary", get(handlers::dashboard::get_summary))
        .route("/api/reports/overview", get(handlers::reports::get_overview))
        .route("/api/badges/{kind}/{code}", get(handlers::status::get_badge))
        .nest("/api/appointments", appointment_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/payments", payment_routes)
        .nest("/api/inventory", inventory_routes)
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // RUST_LOG manda; sem ele, "info".
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");
    let addr = app_state.settings.bind_addr.clone();

    let app = build_router(app_state);

    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
