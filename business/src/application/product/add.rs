use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Catalog;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub catalog: Arc<Catalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Adding product: {}", params.name));

        let new_product = NewProduct::new(
            NewProductProps {
                name: params.name,
                shop: params.shop,
                category: params.category,
            },
            &self.catalog,
        )
        .inspect_err(|e| self.logger.warn(&format!("Product rejected: {}", e)))?;

        let product = self.repository.insert(new_product).await?;

        self.logger.info(&format!("Product added: {}", product.id));
        Ok(product)
    }
}
