use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

/// Ordered product collection for one session.
///
/// `get_all` returns products in insertion order. `insert` assigns the next
/// id from a counter that is never rewound.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    async fn delete_bought(&self) -> Result<u64, RepositoryError>;
}
