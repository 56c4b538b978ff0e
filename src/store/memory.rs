use log::info;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Api, Catalog};
use crate::store::traits::CatalogStore;

/// Catalog held entirely in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogStore {
    catalog: Catalog,
    default_position: usize,
}

impl InMemoryCatalogStore {
    /// Validate `apis` and designate `default_api` as the starting API for new
    /// sessions. The default must be one of the given APIs.
    pub fn new(apis: Vec<Api>, default_api: &str) -> CatalogResult<Self> {
        let catalog = Catalog::new(apis)?;
        let default_position = catalog
            .iter()
            .position(|api| api.key.as_str() == default_api)
            .ok_or_else(|| {
                CatalogError::InvalidCatalog(format!(
                    "default api '{}' is not in the catalog",
                    default_api
                ))
            })?;
        info!(
            "catalog ready: {} apis, {} endpoints (default api {})",
            catalog.len(),
            catalog.endpoint_count(),
            default_api
        );
        Ok(Self {
            catalog,
            default_position,
        })
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn get_all(&self) -> &Catalog {
        &self.catalog
    }

    fn default_api(&self) -> &Api {
        &self.catalog.apis()[self.default_position]
    }
}
