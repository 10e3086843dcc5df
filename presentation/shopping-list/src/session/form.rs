//! Raw form and filter-panel values coming from the rendering surface.
//!
//! Select boxes submit strings: an empty string for the unselected add-form
//! option and `"all"` for the unfiltered option. Those sentinels are turned
//! into typed values here and go no further.

use std::str::FromStr;

use business::domain::catalog::value_objects::{CategoryId, ShopId};
use business::domain::filter::model::FilterUpdate;
use business::domain::filter::value_objects::{Criterion, StatusFilter};
use business::domain::product::use_cases::add::AddProductParams;

use super::error::SessionError;

pub const ALL_OPTION: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub shop: String,
    pub category: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        shop: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shop: shop.into(),
            category: category.into(),
        }
    }

    pub fn into_params(self) -> Result<AddProductParams, SessionError> {
        Ok(AddProductParams {
            shop: parse_selection::<ShopId>(&self.shop)?,
            category: parse_selection::<CategoryId>(&self.category)?,
            name: self.name,
        })
    }
}

fn parse_selection<T: FromStr>(raw: &str) -> Result<Option<T>, SessionError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| SessionError::InvalidSelection(raw.to_string()))
}

fn parse_criterion<T: FromStr>(raw: &str) -> Result<Criterion<T>, SessionError> {
    if raw.trim() == ALL_OPTION {
        return Ok(Criterion::Any);
    }
    match parse_selection::<T>(raw)? {
        Some(value) => Ok(Criterion::Only(value)),
        None => Ok(Criterion::Any),
    }
}

pub fn shop_filter(raw: &str) -> Result<FilterUpdate, SessionError> {
    parse_criterion::<ShopId>(raw).map(FilterUpdate::Shop)
}

pub fn category_filter(raw: &str) -> Result<FilterUpdate, SessionError> {
    parse_criterion::<CategoryId>(raw).map(FilterUpdate::Category)
}

pub fn status_filter(raw: &str) -> Result<FilterUpdate, SessionError> {
    raw.trim()
        .parse::<StatusFilter>()
        .map(FilterUpdate::Status)
        .map_err(|_| SessionError::InvalidSelection(raw.to_string()))
}

pub fn name_filter(raw: &str) -> FilterUpdate {
    FilterUpdate::Name(raw.to_string())
}
