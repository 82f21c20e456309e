// src/models/crm.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::search::Searchable;

// Uma linha do histórico de atendimentos da cliente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub date: NaiveDate,
    pub service: String,
    pub price: Decimal,
}

// --- CLIENTE ---
// Não existe `total_spent` nem `last_visit` guardados: os dois saem do histórico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub preferences: String,
    pub services: Vec<ServiceRecord>,
}

impl Client {
    pub fn total_spent(&self) -> Decimal {
        self.services.iter().map(|s| s.price).sum()
    }

    /// `None` para cliente recém-cadastrada, sem atendimentos.
    pub fn last_visit(&self) -> Option<NaiveDate> {
        self.services.iter().map(|s| s.date).max()
    }

    pub fn visits(&self) -> usize {
        self.services.len()
    }
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

// Formulário "Agregar Nuevo Cliente": nasce sem histórico.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub preferences: String,
}

// Linha da listagem de clientes, já com os totais derivados.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub last_visit: Option<NaiveDate>,
    pub total_spent: Decimal,
    pub visits: usize,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            last_visit: client.last_visit(),
            total_spent: client.total_spent(),
            visits: client.visits(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Client,
    pub last_visit: Option<NaiveDate>,
    pub total_spent: Decimal,
    pub visits: usize,
}

impl From<&Client> for ClientDetail {
    fn from(client: &Client) -> Self {
        Self {
            last_visit: client.last_visit(),
            total_spent: client.total_spent(),
            visits: client.visits(),
            client: client.clone(),
        }
    }
}
