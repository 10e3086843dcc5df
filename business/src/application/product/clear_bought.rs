use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::clear_bought::ClearBoughtProductsUseCase;

pub struct ClearBoughtProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearBoughtProductsUseCase for ClearBoughtProductsUseCaseImpl {
    async fn execute(&self) -> Result<u64, ProductError> {
        self.logger.info("Clearing bought products");

        let count = self.repository.delete_bought().await?;

        self.logger
            .info(&format!("Cleared {} bought products", count));
        Ok(count)
    }
}
