use crate::error::{CatalogError, CatalogResult};
use crate::model::{Api, Catalog, Endpoint};

/// Read-only access to the API catalog.
///
/// Implementations are built once at startup and never mutated afterwards,
/// so they can be shared across sessions without locking.
pub trait CatalogStore: Send + Sync {
    /// The full catalog in registration order.
    fn get_all(&self) -> &Catalog;

    /// The API new sessions start on.
    fn default_api(&self) -> &Api;

    /// Look up an API by its stable key.
    fn get_by_key(&self, key: &str) -> CatalogResult<&Api> {
        self.get_all()
            .get(key)
            .ok_or_else(|| CatalogError::api_not_found(key))
    }

    /// Look up an endpoint within an API.
    fn get_endpoint(&self, key: &str, endpoint_id: &str) -> CatalogResult<&Endpoint> {
        let api = self.get_by_key(key)?;
        api.endpoint(endpoint_id).ok_or_else(|| CatalogError::NotFound {
            entity: "endpoint",
            key: format!("{}/{}", key, endpoint_id),
        })
    }
}
