use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed { shopping_complete: bool },
    NotFound,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<DeleteOutcome, ProductError>;
}
