use async_trait::async_trait;

use crate::domain::filter::model::FilterCriteria;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct ComputeViewParams {
    pub criteria: FilterCriteria,
}

#[async_trait]
pub trait ComputeFilteredViewUseCase: Send + Sync {
    async fn execute(&self, params: ComputeViewParams) -> Result<Vec<Product>, ProductError>;
}
