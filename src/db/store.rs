// src/db/store.rs

use std::sync::Arc;

use chrono::NaiveTime;
use tokio::sync::RwLock;

use crate::models::{
    appointments::{Appointment, ServiceOffering},
    crm::Client,
    finance::Payment,
    inventory::Product,
};

// O "banco" é um snapshot em memória, compartilhado entre as requisições.
pub type SharedStore = Arc<RwLock<SalonStore>>;

#[derive(Debug, Clone, Default)]
pub struct SalonStore {
    appointments: Vec<Appointment>,
    clients: Vec<Client>,
    products: Vec<Product>,
    payments: Vec<Payment>,
    services: Vec<ServiceOffering>,
    time_slots: Vec<NaiveTime>,
}

impl SalonStore {
    pub fn new(
        appointments: Vec<Appointment>,
        clients: Vec<Client>,
        products: Vec<Product>,
        payments: Vec<Payment>,
        services: Vec<ServiceOffering>,
        time_slots: Vec<NaiveTime>,
    ) -> Self {
        Self {
            appointments,
            clients,
            products,
            payments,
            services,
            time_slots,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    // ---
    // Leitura
    // ---

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn time_slots(&self) -> &[NaiveTime] {
        &self.time_slots
    }

    pub fn find_appointment(&self, id: u32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn find_client(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn find_product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_service(&self, name: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.name == name)
    }

    // ---
    // Escrita (só em memória, nada é persistido)
    // ---

    pub fn next_appointment_id(&self) -> u32 {
        self.appointments.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    pub fn next_client_id(&self) -> u32 {
        self.clients.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    pub fn next_product_id(&self) -> u32 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn next_payment_id(&self) -> u32 {
        self.payments.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn appointment_mut(&mut self, id: u32) -> Option<&mut Appointment> {
        self.appointments.iter_mut().find(|a| a.id == id)
    }

    pub fn insert_appointment(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    pub fn insert_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    pub fn insert_client(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.push(product);
    }
}
