// src/models/inventory.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::search::Searchable,
    middleware::i18n::Locale,
    models::status::{BadgeTone, StatusBadge},
};

// --- Faixa de estoque ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    Low,
    Medium,
    Good,
}

impl StockTier {
    pub fn code(self) -> &'static str {
        match self {
            StockTier::Low => "low",
            StockTier::Medium => "medium",
            StockTier::Good => "good",
        }
    }

    pub fn badge(self, locale: &Locale) -> StatusBadge {
        let en = locale.is_english();
        let (label, tone) = match self {
            StockTier::Low => (if en { "Low stock" } else { "Stock Bajo" }, BadgeTone::Red),
            StockTier::Medium => (if en { "Medium stock" } else { "Stock Medio" }, BadgeTone::Yellow),
            StockTier::Good => (if en { "Good stock" } else { "Stock Bueno" }, BadgeTone::Green),
        };
        StatusBadge::new(self.code(), label, tone)
    }
}

// --- Produto ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub max_stock: u32,
    pub unit_price: Decimal,
    pub supplier: String,
    pub last_restock: NaiveDate,
    pub description: String,
}

impl Product {
    /// `None` se o produto estourar o Decimal.
    pub fn inventory_value(&self) -> Option<Decimal> {
        Decimal::from(self.current_stock).checked_mul(self.unit_price)
    }

    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

// Formulário "Agregar Nuevo Producto". A reposição começa no dia do cadastro.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub max_stock: u32,
    pub unit_price: Decimal,
    pub supplier: String,
    pub registered_on: NaiveDate,
}

// --- Respostas ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub tier: StockTier,
    pub badge: StatusBadge,
    pub inventory_value: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_units: u64,
    pub inventory_value: Decimal,
    pub low_stock_count: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub id: u32,
    pub name: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
}
