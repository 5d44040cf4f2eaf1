// web_app/config.rs - Server configuration from the environment
//
// Leptos-specific settings (address, site root) come from leptos_config and
// the [package.metadata.leptos] table. This only covers what is ours:
// where the product catalog comes from and how verbose logging is.

use std::path::{Path, PathBuf};

use crate::fixtures::{ProduceFixture, ProductFixture};
use crate::web_app::catalog::{self, CatalogError};
use crate::web_app::model::Product;

/// Environment variable naming a catalog JSON file
pub const CATALOG_ENV_VAR: &str = "PRODUCT_CATALOG";

/// Environment variable holding the tracing filter directives
pub const LOG_ENV_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Catalog file to serve; the built-in fixture when `None`
    pub catalog_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment, after loading `.env`
    /// if there is one. Call this before installing the log subscriber so
    /// `RUST_LOG` from `.env` is honoured.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let log_filter = lookup(LOG_ENV_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            catalog_path,
            log_filter,
        }
    }

    /// Human-readable name of the catalog source, for logs
    pub fn catalog_source(&self) -> String {
        match &self.catalog_path {
            Some(path) => path.display().to_string(),
            None => format!("built-in '{}' fixture", ProduceFixture::name()),
        }
    }

    /// Load the configured catalog.
    ///
    /// A configured file that cannot be read or parsed is an error; there is
    /// no silent fallback to the fixture in that case.
    pub fn load_products(&self) -> Result<Vec<Product>, CatalogError> {
        match &self.catalog_path {
            Some(path) => load_from(path),
            None => Ok(ProduceFixture::products()),
        }
    }
}

fn load_from(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let products = catalog::load_catalog(path)?;
    for name in catalog::duplicate_names(&products) {
        tracing::warn!("Duplicate product name '{}' in {}: rows will share a render key", name, path.display());
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_catalog_uses_fixture() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.load_products().unwrap(), ProduceFixture::products());
        assert!(config.catalog_source().contains("produce"));
    }

    #[test]
    fn test_blank_catalog_var_is_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_catalog_var_sets_path() {
        let config = ServerConfig::from_lookup(|key| {
            (key == CATALOG_ENV_VAR).then(|| "data/products.json".to_string())
        });
        assert_eq!(config.catalog_path, Some(PathBuf::from("data/products.json")));
        assert_eq!(config.catalog_source(), "data/products.json");
    }

    #[test]
    fn test_log_filter_from_env() {
        let config = ServerConfig::from_lookup(|key| {
            (key == LOG_ENV_VAR).then(|| "filterable_product_table=debug".to_string())
        });
        assert_eq!(config.log_filter, "filterable_product_table=debug");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_dotenv_values_reach_config() {
        let dir = std::env::temp_dir().join(format!("fpt-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let env_file = dir.join(".env");
        std::fs::write(&env_file, "FPT_TEST_LOG_FILTER=warn\n").unwrap();

        dotenv::from_path(&env_file).unwrap();
        let config = ServerConfig::from_lookup(|key| {
            let key = if key == LOG_ENV_VAR { "FPT_TEST_LOG_FILTER" } else { key };
            std::env::var(key).ok()
        });

        assert_eq!(config.log_filter, "warn");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unreadable_catalog_is_an_error() {
        let config = ServerConfig {
            catalog_path: Some(PathBuf::from("missing/catalog.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(config.load_products(), Err(CatalogError::Io { .. })));
    }
}
