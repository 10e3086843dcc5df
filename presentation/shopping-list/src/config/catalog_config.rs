use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Catalog;

const DEFAULT_SHOPS: [&str; 3] = ["Migros", "Teknosa", "BİM"];
const DEFAULT_CATEGORIES: [&str; 5] = ["Elektronik", "Şarküteri", "Oyuncak", "Bakliyat", "Fırın"];

/// Reference lists offered by the add form and the filter panel.
///
/// Ids are assigned from 1 in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub shops: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            shops: DEFAULT_SHOPS.iter().map(|s| s.to_string()).collect(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    pub fn build(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_names(self.shops.iter().cloned(), self.categories.iter().cloned())
    }
}
