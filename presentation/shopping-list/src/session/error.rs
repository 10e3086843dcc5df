use serde::Serialize;

use business::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("session.invalid_selection")]
    InvalidSelection(String),
}

/// What the presentation layer shows the user when a command is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub name: String,
    pub message: String,
}

pub trait IntoValidationMessage {
    fn into_validation_message(self) -> ValidationMessage;
}

impl IntoValidationMessage for SessionError {
    fn into_validation_message(self) -> ValidationMessage {
        let (name, message) = match &self {
            SessionError::Product(ProductError::NameEmpty) => {
                ("ValidationError", "product.name_empty")
            }
            SessionError::Product(ProductError::ShopNotSelected) => {
                ("ValidationError", "product.shop_not_selected")
            }
            SessionError::Product(ProductError::CategoryNotSelected) => {
                ("ValidationError", "product.category_not_selected")
            }
            SessionError::Product(ProductError::UnknownShop) => {
                ("ValidationError", "product.unknown_shop")
            }
            SessionError::Product(ProductError::UnknownCategory) => {
                ("ValidationError", "product.unknown_category")
            }
            SessionError::InvalidSelection(_) => ("ValidationError", "session.invalid_selection"),
            SessionError::Product(ProductError::Repository(_)) => {
                ("InternalError", "repository.persistence")
            }
        };

        ValidationMessage {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}
