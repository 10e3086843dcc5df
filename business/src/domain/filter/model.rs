use serde::{Deserialize, Serialize};

use super::matcher::NameMatcher;
use super::value_objects::{Criterion, StatusFilter};
use crate::domain::catalog::value_objects::{CategoryId, ShopId};
use crate::domain::product::model::Product;

/// The four independent conditions narrowing the product view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub shop: Criterion<ShopId>,
    pub category: Criterion<CategoryId>,
    pub status: StatusFilter,
    pub name: String,
}

/// A change to exactly one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Shop(Criterion<ShopId>),
    Category(Criterion<CategoryId>),
    Status(StatusFilter),
    Name(String),
}

impl FilterCriteria {
    pub fn apply_update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Shop(shop) => self.shop = shop,
            FilterUpdate::Category(category) => self.category = category,
            FilterUpdate::Status(status) => self.status = status,
            FilterUpdate::Name(name) => self.name = name,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn accepts_shop(&self, product: &Product) -> bool {
        self.shop.accepts(&product.shop)
    }

    pub fn accepts_category(&self, product: &Product) -> bool {
        self.category.accepts(&product.category)
    }

    pub fn accepts_status(&self, product: &Product) -> bool {
        self.status.accepts(product.is_bought)
    }

    pub fn accepts_name(&self, product: &Product, matcher: &dyn NameMatcher) -> bool {
        matcher.matches(&product.name, &self.name)
    }

    /// Conjunction of the four predicates. The name check runs last since it
    /// is the only one that is not a plain comparison.
    pub fn matches(&self, product: &Product, matcher: &dyn NameMatcher) -> bool {
        self.accepts_shop(product)
            && self.accepts_category(product)
            && self.accepts_status(product)
            && self.accepts_name(product, matcher)
    }

    /// Products satisfying every criterion, in their original order.
    pub fn filter<'a, I>(&self, products: I, matcher: &dyn NameMatcher) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|p| self.matches(p, matcher))
            .cloned()
            .collect()
    }
}
