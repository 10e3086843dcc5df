use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

pub struct ToggleBoughtParams {
    pub id: ProductId,
}

#[async_trait]
pub trait ToggleBoughtUseCase: Send + Sync {
    /// Returns the updated product, or `None` when no product has the id.
    async fn execute(&self, params: ToggleBoughtParams) -> Result<Option<Product>, ProductError>;
}
