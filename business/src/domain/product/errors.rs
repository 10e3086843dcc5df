#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.shop_not_selected")]
    ShopNotSelected,
    #[error("product.category_not_selected")]
    CategoryNotSelected,
    #[error("product.unknown_shop")]
    UnknownShop,
    #[error("product.unknown_category")]
    UnknownCategory,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
