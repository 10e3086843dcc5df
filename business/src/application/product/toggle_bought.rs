use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_bought::{ToggleBoughtParams, ToggleBoughtUseCase};

pub struct ToggleBoughtUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleBoughtUseCase for ToggleBoughtUseCaseImpl {
    async fn execute(&self, params: ToggleBoughtParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .debug(&format!("Toggling bought flag: {}", params.id));

        let existing = match self.repository.get_by_id(params.id).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Toggle ignored, unknown product: {}", params.id));
                return Ok(None);
            }
            Err(other) => return Err(other.into()),
        };

        let updated = existing.toggled();
        self.repository.save(&updated).await?;

        self.logger.info(&format!(
            "Product {} marked {}",
            updated.id,
            if updated.is_bought { "bought" } else { "not bought" }
        ));
        Ok(Some(updated))
    }
}
