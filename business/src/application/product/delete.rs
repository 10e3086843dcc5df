use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::CompletionNotifier;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::is_shopping_complete;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{
    DeleteOutcome, DeleteProductParams, DeleteProductUseCase,
};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub notifier: Arc<dyn CompletionNotifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<DeleteOutcome, ProductError> {
        self.logger.info(&format!("Deleting product: {}", params.id));

        // The completion check looks at the list as it was before removal.
        let products = self.repository.get_all().await?;
        if !products.iter().any(|p| p.id == params.id) {
            self.logger
                .warn(&format!("Delete ignored, unknown product: {}", params.id));
            return Ok(DeleteOutcome::NotFound);
        }

        let shopping_complete = is_shopping_complete(&products);

        self.repository.delete(params.id).await?;
        self.logger.info(&format!("Product deleted: {}", params.id));

        if shopping_complete {
            self.logger.info("Shopping complete");
            self.notifier.shopping_complete(products.len());
        }
        Ok(DeleteOutcome::Removed { shopping_complete })
    }
}
