use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

#[derive(Default)]
struct Collection {
    products: Vec<Product>,
    last_id: u64,
}

/// Session-scoped product store. Nothing outlives the process.
#[derive(Default)]
pub struct ProductRepositoryInMemory {
    state: RwLock<Collection>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.products.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let state = self.state.read().await;
        state
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or(RepositoryError::Persistence)?;
        state.last_id = next;

        // Products always enter the list as not bought.
        let product = Product::from_repository(
            ProductId::new(next),
            product.name,
            product.shop,
            product.category,
            false,
        );
        state.products.push(product.clone());
        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let slot = state
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        state.products.retain(|p| p.id != id);
        Ok(())
    }

    async fn delete_bought(&self) -> Result<u64, RepositoryError> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| !p.is_bought);
        Ok((before - state.products.len()) as u64)
    }
}
