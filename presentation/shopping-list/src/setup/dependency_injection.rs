use std::sync::Arc;

use logger::TracingLogger;
use memory::product::repository::ProductRepositoryInMemory;

use business::application::filter::compute_view::ComputeFilteredViewUseCaseImpl;
use business::application::product::add::AddProductUseCaseImpl;
use business::application::product::clear_bought::ClearBoughtProductsUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::toggle_bought::ToggleBoughtUseCaseImpl;
use business::domain::catalog::model::Catalog;

use crate::config::app_config::AppConfig;
use crate::session::error::SessionError;
use crate::session::notifier::SessionNotifier;
use crate::session::{SessionUseCases, ShoppingListSession};

pub struct DependencyContainer {
    pub use_cases: SessionUseCases,
    pub catalog: Arc<Catalog>,
    pub notifier: Arc<SessionNotifier>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let catalog = Arc::new(config.catalog.build()?);
        let matcher = Arc::new(config.matcher.build());
        let notifier = Arc::new(SessionNotifier::new());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new());

        // Product use cases
        let add_use_case = Arc::new(AddProductUseCaseImpl {
            repository: product_repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let toggle_bought_use_case = Arc::new(ToggleBoughtUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let clear_bought_use_case = Arc::new(ClearBoughtProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Filter use cases
        let compute_view_use_case = Arc::new(ComputeFilteredViewUseCaseImpl {
            repository: product_repository,
            matcher,
            logger,
        });

        Ok(Self {
            use_cases: SessionUseCases {
                add: add_use_case,
                toggle_bought: toggle_bought_use_case,
                delete: delete_use_case,
                clear_bought: clear_bought_use_case,
                get_all: get_all_use_case,
                compute_view: compute_view_use_case,
            },
            catalog,
            notifier,
        })
    }

    pub async fn into_session(self) -> Result<ShoppingListSession, SessionError> {
        ShoppingListSession::start(self.use_cases, self.catalog, self.notifier).await
    }
}
