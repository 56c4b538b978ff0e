//! The immutable registry of API definitions.
//!
//! APIs are kept in registration order with a derived index keyed by
//! [`ApiKey`]. Construction is strict about empty titles and duplicate keys or
//! endpoint ids so nothing downstream has to second-guess identity.

use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{Api, ApiKey, Endpoint};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apis: Vec<Api>,
    by_key: HashMap<ApiKey, usize>,
}

impl Catalog {
    /// Validate and index the given APIs, keeping their order.
    pub fn new(apis: Vec<Api>) -> CatalogResult<Self> {
        let mut by_key = HashMap::with_capacity(apis.len());
        for (position, api) in apis.iter().enumerate() {
            validate_api(api)?;
            if by_key.insert(api.key.clone(), position).is_some() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate api key {}",
                    api.key
                )));
            }
        }
        Ok(Self { apis, by_key })
    }

    pub fn get(&self, key: &str) -> Option<&Api> {
        self.by_key.get(key).map(|&position| &self.apis[position])
    }

    /// Iterates APIs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Api> {
        self.apis.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ApiKey> {
        self.apis.iter().map(|api| &api.key)
    }

    pub fn apis(&self) -> &[Api] {
        &self.apis
    }

    pub fn len(&self) -> usize {
        self.apis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }

    pub fn endpoint_count(&self) -> usize {
        self.apis.iter().map(|api| api.endpoints.len()).sum()
    }

    /// Resolve an endpoint within a specific API.
    pub fn endpoint(&self, key: &str, endpoint_id: &str) -> Option<&Endpoint> {
        self.get(key).and_then(|api| api.endpoint(endpoint_id))
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.apis.serialize(serializer)
    }
}

fn validate_api(api: &Api) -> CatalogResult<()> {
    if api.key.as_str().trim().is_empty() {
        return Err(CatalogError::InvalidCatalog(
            "encountered api with no key".to_string(),
        ));
    }
    if !api
        .key
        .as_str()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(CatalogError::InvalidCatalog(format!(
            "api key must match ^[A-Za-z0-9_.-]+$, got {}",
            api.key
        )));
    }
    if api.title.trim().is_empty() {
        return Err(CatalogError::InvalidCatalog(format!(
            "api {} has an empty title",
            api.key
        )));
    }
    if api
        .endpoints
        .iter()
        .any(|endpoint| endpoint.id.as_str().trim().is_empty())
    {
        return Err(CatalogError::InvalidCatalog(format!(
            "api {} has an endpoint with no id",
            api.key
        )));
    }
    if let Some(duplicate) = api
        .endpoints
        .iter()
        .map(|endpoint| endpoint.id.as_str())
        .duplicates()
        .next()
    {
        return Err(CatalogError::InvalidCatalog(format!(
            "api {} has duplicate endpoint id {}",
            api.key, duplicate
        )));
    }
    Ok(())
}
