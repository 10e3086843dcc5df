use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::ProductId;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::value_objects::{CategoryId, ShopId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub shop: ShopId,
    pub category: CategoryId,
    pub is_bought: bool,
}

/// A validated product that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub shop: ShopId,
    pub category: CategoryId,
}

pub struct NewProductProps {
    pub name: String,
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
}

impl NewProduct {
    /// Validates form input against the reference lists.
    ///
    /// The name is stored trimmed. Shop and category must both be selected
    /// and present in `catalog`.
    pub fn new(props: NewProductProps, catalog: &Catalog) -> Result<Self, ProductError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let shop = props.shop.ok_or(ProductError::ShopNotSelected)?;
        if catalog.shop(shop).is_none() {
            return Err(ProductError::UnknownShop);
        }

        let category = props.category.ok_or(ProductError::CategoryNotSelected)?;
        if catalog.category(category).is_none() {
            return Err(ProductError::UnknownCategory);
        }

        Ok(Self {
            name: name.to_string(),
            shop,
            category,
        })
    }
}

impl Product {
    /// Builds a product the way the repository stores it (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        shop: ShopId,
        category: CategoryId,
        is_bought: bool,
    ) -> Self {
        Self {
            id,
            name,
            shop,
            category,
            is_bought,
        }
    }

    /// Returns a copy with the bought flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            is_bought: !self.is_bought,
            ..self.clone()
        }
    }
}

/// True when the list is non-empty and every product in it is bought.
pub fn is_shopping_complete(products: &[Product]) -> bool {
    !products.is_empty() && products.iter().all(|p| p.is_bought)
}
