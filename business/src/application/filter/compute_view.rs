use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::filter::matcher::NameMatcher;
use crate::domain::filter::use_cases::compute_view::{
    ComputeFilteredViewUseCase, ComputeViewParams,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

pub struct ComputeFilteredViewUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub matcher: Arc<dyn NameMatcher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComputeFilteredViewUseCase for ComputeFilteredViewUseCaseImpl {
    async fn execute(&self, params: ComputeViewParams) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_all().await?;
        let view = params.criteria.filter(&products, self.matcher.as_ref());

        self.logger.debug(&format!(
            "Filtered view: {} of {} products",
            view.len(),
            products.len()
        ));
        Ok(view)
    }
}
