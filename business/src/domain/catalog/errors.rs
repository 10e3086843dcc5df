#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog.duplicate_shop")]
    DuplicateShop(u32),
    #[error("catalog.duplicate_category")]
    DuplicateCategory(u32),
    #[error("catalog.name_empty")]
    NameEmpty,
}
