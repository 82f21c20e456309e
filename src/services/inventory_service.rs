// src/services/inventory_service.rs

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use anyhow::anyhow;

use crate::{
    common::{error::AppError, money, search},
    db::SharedStore,
    middleware::i18n::Locale,
    models::inventory::{InventorySummary, LowStockItem, NewProduct, Product, ProductView, StockTier},
};

// Acima de mínimo × 1,5 o estoque é considerado bom.
const MEDIUM_STOCK_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Baixo é testado primeiro; a faixa média inclui a igualdade com mínimo × 1,5.
pub fn classify_stock(current: u32, minimum: u32) -> StockTier {
    if current <= minimum {
        StockTier::Low
    } else if Decimal::from(current) <= Decimal::from(minimum) * MEDIUM_STOCK_FACTOR {
        StockTier::Medium
    } else {
        StockTier::Good
    }
}

pub fn inventory_value(products: &[Product]) -> Result<Decimal, AppError> {
    products.iter().try_fold(Decimal::ZERO, |total, product| {
        let value = product.inventory_value().ok_or_else(|| {
            AppError::InternalServerError(anyhow!("valor do produto {} estourou", product.id))
        })?;
        money::checked_add(total, value)
    })
}

pub fn low_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.is_low_stock()).count()
}

pub fn low_stock_items(products: &[Product]) -> Vec<LowStockItem> {
    products
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| LowStockItem {
            id: p.id,
            name: p.name.clone(),
            current_stock: p.current_stock,
            minimum_stock: p.minimum_stock,
        })
        .collect()
}

pub fn summarize(products: &[Product]) -> Result<InventorySummary, AppError> {
    let categories: BTreeSet<&str> = products.iter().map(|p| p.category.as_str()).collect();
    Ok(InventorySummary {
        product_count: products.len(),
        total_units: products.iter().map(|p| u64::from(p.current_stock)).sum(),
        inventory_value: inventory_value(products)?,
        low_stock_count: low_stock_count(products),
        categories: categories.into_iter().map(str::to_string).collect(),
    })
}

// Filtros da tela de inventário. "all"/"Todos" ou ausente = sem filtro.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<String>,
    pub stock: Option<String>,
}

fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("all") || value == "Todos"
}

impl ProductFilter {
    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None => true,
            Some(c) if is_wildcard(c) => true,
            Some(c) => product.category == c,
        }
    }

    // Valores desconhecidos do filtro de estoque não filtram nada.
    fn matches_stock(&self, product: &Product) -> bool {
        match self.stock.as_deref() {
            Some("low") => product.is_low_stock(),
            Some("normal") => !product.is_low_stock(),
            _ => true,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        search::matches(product, &self.search)
            && self.matches_category(product)
            && self.matches_stock(product)
    }
}

pub fn filter_products<'a>(products: &'a [Product], filter: &ProductFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

pub fn product_view(product: &Product, locale: &Locale) -> ProductView {
    let tier = classify_stock(product.current_stock, product.minimum_stock);
    ProductView {
        tier,
        badge: tier.badge(locale),
        inventory_value: product.inventory_value(),
        product: product.clone(),
    }
}

#[derive(Clone)]
pub struct InventoryService {
    store: SharedStore,
}

impl InventoryService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_products(&self, filter: &ProductFilter, locale: &Locale) -> Vec<ProductView> {
        let store = self.store.read().await;
        filter_products(store.products(), filter)
            .into_iter()
            .map(|p| product_view(p, locale))
            .collect()
    }

    pub async fn summary(&self) -> Result<InventorySummary, AppError> {
        let store = self.store.read().await;
        summarize(store.products())
    }

    // Cadastro só em memória. Estoque máximo abaixo do mínimo não entra.
    pub async fn create_product(&self, new_product: NewProduct, locale: &Locale) -> Result<ProductView, AppError> {
        if new_product.max_stock < new_product.minimum_stock {
            return Err(AppError::InvalidStockLimits {
                minimum: new_product.minimum_stock,
                maximum: new_product.max_stock,
            });
        }

        let mut store = self.store.write().await;
        let product = Product {
            id: store.next_product_id(),
            name: new_product.name.trim().to_string(),
            category: new_product.category.trim().to_string(),
            current_stock: new_product.current_stock,
            minimum_stock: new_product.minimum_stock,
            max_stock: new_product.max_stock,
            unit_price: new_product.unit_price,
            supplier: new_product.supplier.trim().to_string(),
            last_restock: new_product.registered_on,
            description: new_product.description.trim().to_string(),
        };
        store.insert_product(product.clone());

        tracing::info!("📦 Produto {} cadastrado: {} ({} un.)", product.id, product.name, product.current_stock);
        Ok(product_view(&product, locale))
    }

    // Reposição e exclusão não existem ainda: erro explícito, nunca sucesso silencioso.
    pub async fn restock(&self, product_id: u32, quantity: u32) -> Result<ProductView, AppError> {
        let store = self.store.read().await;
        let product = store
            .find_product(product_id)
            .ok_or(AppError::ProductNotFound(product_id))?;
        tracing::warn!("Reposição pedida para '{}' (+{}), ainda não suportada", product.name, quantity);
        Err(AppError::NotImplemented("restock product"))
    }

    pub async fn delete(&self, product_id: u32) -> Result<(), AppError> {
        let store = self.store.read().await;
        if store.find_product(product_id).is_none() {
            return Err(AppError::ProductNotFound(product_id));
        }
        Err(AppError::NotImplemented("delete product"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SalonStore;

    #[test]
    fn stock_tiers_follow_the_thresholds() {
        assert_eq!(classify_stock(2, 5), StockTier::Low);
        assert_eq!(classify_stock(5, 5), StockTier::Low);
        assert_eq!(classify_stock(7, 5), StockTier::Medium);
        assert_eq!(classify_stock(8, 5), StockTier::Good);
    }

    #[test]
    fn exactly_one_and_a_half_times_minimum_is_medium() {
        assert_eq!(classify_stock(6, 4), StockTier::Medium);
        assert_eq!(classify_stock(7, 4), StockTier::Good);
        assert_eq!(classify_stock(15, 10), StockTier::Medium);
        assert_eq!(classify_stock(16, 10), StockTier::Good);
    }

    #[test]
    fn zero_minimum_means_any_stock_is_good() {
        assert_eq!(classify_stock(0, 0), StockTier::Low);
        assert_eq!(classify_stock(1, 0), StockTier::Good);
    }

    #[test]
    fn seeded_inventory_totals() {
        let store = SalonStore::seeded();
        // 2×850 + 1×1200 + 15×45 + 8×680 + 12×520 + 25×280
        assert_eq!(inventory_value(store.products()).unwrap(), Decimal::from(22_255));
        assert_eq!(low_stock_count(store.products()), 3);

        let summary = summarize(store.products()).unwrap();
        assert_eq!(summary.total_units, 63);
        assert_eq!(summary.product_count, 6);
        assert_eq!(summary.categories.len(), 5);
    }

    #[test]
    fn empty_inventory_is_all_zero() {
        let summary = summarize(&[]).unwrap();
        assert_eq!(summary.inventory_value, Decimal::ZERO);
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.total_units, 0);
        assert!(low_stock_items(&[]).is_empty());
    }

    #[test]
    fn filters_combine_search_category_and_stock() {
        let store = SalonStore::seeded();
        let products = store.products();

        let facial = ProductFilter { category: Some("Facial".into()), ..Default::default() };
        assert_eq!(filter_products(products, &facial).len(), 2);

        let low_facial = ProductFilter { stock: Some("low".into()), ..facial.clone() };
        let found = filter_products(products, &low_facial);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Crema hidratante facial");

        let normal = ProductFilter { stock: Some("normal".into()), ..Default::default() };
        assert_eq!(filter_products(products, &normal).len(), 3);

        let by_description = ProductFilter { search: "RELAJACIÓN".into(), ..Default::default() };
        assert_eq!(filter_products(products, &by_description)[0].id, 2);

        let everything = ProductFilter { category: Some("Todos".into()), stock: Some("all".into()), ..Default::default() };
        assert_eq!(filter_products(products, &everything).len(), products.len());
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let store = SalonStore::seeded();
        let filter = ProductFilter { category: Some("Uñas".into()), ..Default::default() };
        assert!(filter_products(store.products(), &filter).is_empty());
    }

    #[tokio::test]
    async fn restock_and_delete_are_explicitly_unimplemented() {
        let svc = InventoryService::new(SalonStore::seeded().into_shared());
        assert!(matches!(svc.restock(1, 5).await, Err(AppError::NotImplemented(_))));
        assert!(matches!(svc.restock(99, 5).await, Err(AppError::ProductNotFound(99))));
        assert!(matches!(svc.delete(1).await, Err(AppError::NotImplemented(_))));
    }

    #[tokio::test]
    async fn listing_attaches_tier_badges() {
        let svc = InventoryService::new(SalonStore::seeded().into_shared());
        let views = svc.list_products(&ProductFilter::default(), &Locale::default()).await;
        let mask = views.iter().find(|v| v.product.id == 4).unwrap();
        // 8 > 5 × 1,5 = 7,5
        assert_eq!(mask.tier, StockTier::Good);
        assert_eq!(mask.badge.label, "Stock Bueno");
        assert_eq!(mask.inventory_value, Some(Decimal::from(5_440)));
    }

    fn new_product(minimum_stock: u32, max_stock: u32) -> NewProduct {
        NewProduct {
            name: " Tónico facial ".into(),
            category: "Facial".into(),
            description: "Tónico sin alcohol".into(),
            current_stock: 4,
            minimum_stock,
            max_stock,
            unit_price: Decimal::new(45050, 2),
            supplier: "Belleza Natural SA".into(),
            registered_on: chrono::NaiveDate::from_ymd_opt(2024, 1, 27).unwrap(),
        }
    }

    #[tokio::test]
    async fn created_product_joins_the_inventory() {
        let svc = InventoryService::new(SalonStore::seeded().into_shared());
        let view = svc.create_product(new_product(5, 20), &Locale::default()).await.unwrap();
        assert_eq!(view.product.id, 7);
        assert_eq!(view.product.name, "Tónico facial");
        assert_eq!(view.tier, StockTier::Low);
        assert_eq!(view.inventory_value, Some(Decimal::new(180200, 2)));

        let summary = svc.summary().await.unwrap();
        assert_eq!(summary.product_count, 7);
        assert_eq!(summary.low_stock_count, 4);
        assert_eq!(summary.inventory_value, Decimal::new(2_405_700, 2));
    }

    #[tokio::test]
    async fn max_stock_below_minimum_is_rejected() {
        let svc = InventoryService::new(SalonStore::seeded().into_shared());
        let result = svc.create_product(new_product(10, 5), &Locale::default()).await;
        assert!(matches!(result, Err(AppError::InvalidStockLimits { minimum: 10, maximum: 5 })));
        assert_eq!(svc.summary().await.unwrap().product_count, 6);
    }

    #[test]
    fn overflowing_inventory_value_is_an_error() {
        let mut product = SalonStore::seeded().products()[0].clone();
        product.unit_price = Decimal::MAX;
        assert_eq!(product.inventory_value(), None);
        assert!(matches!(inventory_value(&[product]), Err(AppError::InternalServerError(_))));
    }
}
