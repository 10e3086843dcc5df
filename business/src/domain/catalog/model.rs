use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;
use super::value_objects::{CategoryId, ShopId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Static reference lists of shops and categories.
///
/// Built once at startup and shared read-only afterwards. Entry order is
/// the order the presentation layer lists them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    shops: Vec<Shop>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(shops: Vec<Shop>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for shop in &shops {
            if shop.name.trim().is_empty() {
                return Err(CatalogError::NameEmpty);
            }
            if !seen.insert(shop.id) {
                return Err(CatalogError::DuplicateShop(shop.id.value()));
            }
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(CatalogError::NameEmpty);
            }
            if !seen.insert(category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.value()));
            }
        }

        Ok(Self { shops, categories })
    }

    /// Builds a catalog from plain names, numbering entries from 1 in order.
    pub fn from_names<S, C>(shops: S, categories: C) -> Result<Self, CatalogError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let shops = (1u32..)
            .zip(shops)
            .map(|(id, name)| Shop {
                id: ShopId::new(id),
                name: name.into(),
            })
            .collect();
        let categories = (1u32..)
            .zip(categories)
            .map(|(id, name)| Category {
                id: CategoryId::new(id),
                name: name.into(),
            })
            .collect();
        Self::new(shops, categories)
    }

    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn shop(&self, id: ShopId) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name for a shop id, falling back to the raw id.
    pub fn shop_label(&self, id: ShopId) -> String {
        self.shop(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Display name for a category id, falling back to the raw id.
    pub fn category_label(&self, id: CategoryId) -> String {
        self.category(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
