use async_trait::async_trait;

use crate::domain::catalog::value_objects::{CategoryId, ShopId};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct AddProductParams {
    pub name: String,
    pub shop: Option<ShopId>,
    pub category: Option<CategoryId>,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Result<Product, ProductError>;
}
