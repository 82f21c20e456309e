// src/services/crm_service.rs

use crate::{
    common::{error::AppError, search},
    db::SharedStore,
    models::crm::{Client, ClientDetail, ClientSummary, NewClient},
};

#[derive(Clone)]
pub struct CrmService {
    store: SharedStore,
}

impl CrmService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // Busca por nome, e-mail ou telefone.
    pub async fn list_clients(&self, query: &str) -> Vec<ClientSummary> {
        let store = self.store.read().await;
        search::search(store.clients(), query)
            .into_iter()
            .map(ClientSummary::from)
            .collect()
    }

    pub async fn client_detail(&self, id: u32) -> Result<ClientDetail, AppError> {
        let store = self.store.read().await;
        store
            .find_client(id)
            .map(ClientDetail::from)
            .ok_or(AppError::ClientNotFound(id))
    }

    // Cadastro só em memória; o histórico começa vazio (total gasto = 0).
    pub async fn create_client(&self, new_client: NewClient) -> ClientDetail {
        let mut store = self.store.write().await;
        let client = Client {
            id: store.next_client_id(),
            name: new_client.name.trim().to_string(),
            email: new_client.email.trim().to_lowercase(),
            phone: new_client.phone.trim().to_string(),
            birth_date: new_client.birth_date,
            preferences: new_client.preferences.trim().to_string(),
            services: Vec::new(),
        };
        store.insert_client(client.clone());

        tracing::info!("👤 Cliente {} cadastrada: {}", client.id, client.name);
        ClientDetail::from(&client)
    }
}
