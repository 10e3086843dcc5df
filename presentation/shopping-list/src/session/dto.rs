use serde::Serialize;

use business::domain::catalog::model::Catalog;
use business::domain::product::model::Product;

/// One line of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: u64,
    pub name: String,
    pub shop: String,
    pub category: String,
    pub is_bought: bool,
}

impl ProductRow {
    pub fn from_product(product: &Product, catalog: &Catalog) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            shop: catalog.shop_label(product.shop),
            category: catalog.category_label(product.category),
            is_bought: product.is_bought,
        }
    }
}

/// An entry of a select box: the raw value submitted and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn shops(catalog: &Catalog) -> Vec<Self> {
        catalog
            .shops()
            .iter()
            .map(|s| Self {
                value: s.id.to_string(),
                label: s.name.clone(),
            })
            .collect()
    }

    pub fn categories(catalog: &Catalog) -> Vec<Self> {
        catalog
            .categories()
            .iter()
            .map(|c| Self {
                value: c.id.to_string(),
                label: c.name.clone(),
            })
            .collect()
    }
}
