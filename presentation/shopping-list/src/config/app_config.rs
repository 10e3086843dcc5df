use super::{catalog_config::CatalogConfig, matcher_config::MatcherConfig};

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub matcher: MatcherConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            matcher: MatcherConfig::from_env(),
            catalog: CatalogConfig::default(),
        }
    }
}
