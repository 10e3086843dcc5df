pub mod dto;
pub mod error;
pub mod form;
pub mod notifier;

use std::sync::Arc;

use business::domain::catalog::model::Catalog;
use business::domain::filter::model::{FilterCriteria, FilterUpdate};
use business::domain::filter::use_cases::compute_view::{
    ComputeFilteredViewUseCase, ComputeViewParams,
};
use business::domain::product::model::Product;
use business::domain::product::use_cases::add::AddProductUseCase;
use business::domain::product::use_cases::clear_bought::ClearBoughtProductsUseCase;
use business::domain::product::use_cases::delete::{
    DeleteOutcome, DeleteProductParams, DeleteProductUseCase,
};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::toggle_bought::{
    ToggleBoughtParams, ToggleBoughtUseCase,
};
use business::domain::product::value_objects::ProductId;

use dto::{ProductRow, SelectOption};
use error::SessionError;
use form::ProductForm;
use notifier::SessionNotifier;

pub struct SessionUseCases {
    pub add: Arc<dyn AddProductUseCase>,
    pub toggle_bought: Arc<dyn ToggleBoughtUseCase>,
    pub delete: Arc<dyn DeleteProductUseCase>,
    pub clear_bought: Arc<dyn ClearBoughtProductsUseCase>,
    pub get_all: Arc<dyn GetAllProductsUseCase>,
    pub compute_view: Arc<dyn ComputeFilteredViewUseCase>,
}

/// The shopping list as the rendering surface sees it.
///
/// Accepts one command at a time. Every command that changes the collection
/// or a filter criterion recomputes the cached view before returning, so
/// `view()` never lags behind the last command.
pub struct ShoppingListSession {
    use_cases: SessionUseCases,
    catalog: Arc<Catalog>,
    notifier: Arc<SessionNotifier>,
    criteria: FilterCriteria,
    view: Vec<Product>,
}

impl ShoppingListSession {
    pub async fn start(
        use_cases: SessionUseCases,
        catalog: Arc<Catalog>,
        notifier: Arc<SessionNotifier>,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            use_cases,
            catalog,
            notifier,
            criteria: FilterCriteria::default(),
            view: Vec::new(),
        };
        session.refresh().await?;
        Ok(session)
    }

    pub async fn add(&mut self, form: ProductForm) -> Result<Product, SessionError> {
        let params = form.into_params()?;
        let product = self.use_cases.add.execute(params).await?;
        self.refresh().await?;
        Ok(product)
    }

    pub async fn toggle_bought(&mut self, id: ProductId) -> Result<Option<Product>, SessionError> {
        let product = self
            .use_cases
            .toggle_bought
            .execute(ToggleBoughtParams { id })
            .await?;
        self.refresh().await?;
        Ok(product)
    }

    pub async fn delete(&mut self, id: ProductId) -> Result<DeleteOutcome, SessionError> {
        let outcome = self
            .use_cases
            .delete
            .execute(DeleteProductParams { id })
            .await?;
        self.refresh().await?;
        Ok(outcome)
    }

    pub async fn clear_bought(&mut self) -> Result<u64, SessionError> {
        let count = self.use_cases.clear_bought.execute().await?;
        self.refresh().await?;
        Ok(count)
    }

    pub async fn set_filter(&mut self, update: FilterUpdate) -> Result<(), SessionError> {
        self.criteria.apply_update(update);
        self.refresh().await
    }

    pub async fn reset_filters(&mut self) -> Result<(), SessionError> {
        self.criteria.reset();
        self.refresh().await
    }

    /// Recomputes the filtered view from the current collection and criteria.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        self.view = self
            .use_cases
            .compute_view
            .execute(ComputeViewParams {
                criteria: self.criteria.clone(),
            })
            .await?;
        Ok(())
    }

    /// The whole collection, ignoring filters.
    pub async fn products(&self) -> Result<Vec<Product>, SessionError> {
        Ok(self.use_cases.get_all.execute().await?)
    }

    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.view
            .iter()
            .map(|p| ProductRow::from_product(p, &self.catalog))
            .collect()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn shop_options(&self) -> Vec<SelectOption> {
        SelectOption::shops(&self.catalog)
    }

    pub fn category_options(&self) -> Vec<SelectOption> {
        SelectOption::categories(&self.catalog)
    }

    /// Completion signals raised since the last call.
    pub fn take_completions(&self) -> usize {
        self.notifier.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app_config::AppConfig;
    use crate::config::catalog_config::CatalogConfig;
    use crate::setup::dependency_injection::DependencyContainer;
    use business::domain::filter::value_objects::{Criterion, StatusFilter};
    use business::domain::product::errors::ProductError;

    // Ids 1 and 2 for shops and categories.
    fn test_config() -> AppConfig {
        AppConfig {
            catalog: CatalogConfig {
                shops: vec!["Migros".to_string(), "BİM".to_string()],
                categories: vec!["Dairy".to_string(), "Bakery".to_string()],
            },
            ..AppConfig::default()
        }
    }

    async fn new_session() -> ShoppingListSession {
        DependencyContainer::new(&test_config())
            .unwrap()
            .into_session()
            .await
            .unwrap()
    }

    fn names(session: &ShoppingListSession) -> Vec<String> {
        session.view().iter().map(|p| p.name.clone()).collect()
    }

    #[tokio::test]
    async fn should_start_with_empty_view_and_default_filters() {
        let session = new_session().await;

        assert!(session.view().is_empty());
        assert!(session.criteria().is_default());
        assert_eq!(session.take_completions(), 0);
    }

    #[tokio::test]
    async fn should_run_milk_and_bread_scenario() {
        let mut session = new_session().await;

        let milk = session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();
        let bread = session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();

        session
            .set_filter(FilterUpdate::Status(StatusFilter::All))
            .await
            .unwrap();
        assert_eq!(names(&session), vec!["Milk", "Bread"]);

        session.toggle_bought(milk.id).await.unwrap();
        session
            .set_filter(FilterUpdate::Status(StatusFilter::Bought))
            .await
            .unwrap();
        assert_eq!(names(&session), vec!["Milk"]);

        let outcome = session.delete(bread.id).await.unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Removed {
                shopping_complete: false
            }
        );
        assert_eq!(session.products().await.unwrap().len(), 1);
        assert_eq!(session.take_completions(), 0);
    }

    #[tokio::test]
    async fn should_signal_once_when_deleting_from_fully_bought_list() {
        let mut session = new_session().await;
        let milk = session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();
        let bread = session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();
        session.toggle_bought(milk.id).await.unwrap();
        session.toggle_bought(bread.id).await.unwrap();

        session.delete(bread.id).await.unwrap();

        assert_eq!(session.take_completions(), 1);
        assert_eq!(names(&session), vec!["Milk"]);
    }

    #[tokio::test]
    async fn should_increase_length_by_one_on_add() {
        let mut session = new_session().await;
        session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();

        let added = session
            .add(ProductForm::new("Cheese", "1", "1"))
            .await
            .unwrap();

        assert!(!added.is_bought);
        assert_eq!(session.products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_restore_flag_after_double_toggle() {
        let mut session = new_session().await;
        let milk = session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();

        session.toggle_bought(milk.id).await.unwrap();
        let twice = session.toggle_bought(milk.id).await.unwrap().unwrap();

        assert!(!twice.is_bought);
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let mut session = new_session().await;
        session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();
        let bread = session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();
        session.delete(bread.id).await.unwrap();

        let eggs = session
            .add(ProductForm::new("Eggs", "1", "1"))
            .await
            .unwrap();

        assert_eq!(eggs.id, ProductId::new(3));
    }

    #[tokio::test]
    async fn should_ignore_commands_for_unknown_ids() {
        let mut session = new_session().await;
        session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();

        let toggled = session.toggle_bought(ProductId::new(99)).await.unwrap();
        let deleted = session.delete(ProductId::new(99)).await.unwrap();

        assert!(toggled.is_none());
        assert_eq!(deleted, DeleteOutcome::NotFound);
        assert_eq!(session.view().len(), 1);
    }

    #[tokio::test]
    async fn should_refuse_incomplete_form_without_changing_list() {
        let mut session = new_session().await;

        let result = session.add(ProductForm::new("Milk", "", "1")).await;

        assert!(matches!(
            result,
            Err(SessionError::Product(ProductError::ShopNotSelected))
        ));
        assert!(session.products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_filter_by_fuzzy_name_and_reset() {
        let mut session = new_session().await;
        session
            .add(ProductForm::new("Chocolate", "1", "2"))
            .await
            .unwrap();
        session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();

        session
            .set_filter(form::name_filter("choclate"))
            .await
            .unwrap();
        assert_eq!(names(&session), vec!["Chocolate"]);

        session
            .set_filter(FilterUpdate::Shop(Criterion::Only(
                business::domain::catalog::value_objects::ShopId::new(2),
            )))
            .await
            .unwrap();
        assert!(session.view().is_empty());

        session.reset_filters().await.unwrap();
        assert_eq!(names(&session), vec!["Chocolate", "Bread"]);
    }

    #[tokio::test]
    async fn should_clear_bought_products_without_signal() {
        let mut session = new_session().await;
        let milk = session
            .add(ProductForm::new("Milk", "1", "1"))
            .await
            .unwrap();
        session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();
        session.toggle_bought(milk.id).await.unwrap();

        let cleared = session.clear_bought().await.unwrap();

        assert_eq!(cleared, 1);
        assert_eq!(names(&session), vec!["Bread"]);
        assert_eq!(session.take_completions(), 0);
    }

    #[tokio::test]
    async fn should_render_rows_with_reference_names() {
        let mut session = new_session().await;
        session
            .add(ProductForm::new("Bread", "2", "2"))
            .await
            .unwrap();

        let rows = session.rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].shop, "BİM");
        assert_eq!(rows[0].category, "Bakery");
        assert_eq!(session.shop_options().len(), 2);
        assert_eq!(session.category_options()[1].label, "Bakery");
    }
}
