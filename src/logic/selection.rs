//! Selection changes and the rules that keep a selection consistent.
//!
//! Every operation validates against the catalog before touching state, so a
//! rejected change leaves the selection untouched.

use log::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::logic::projection::resolve_language;
use crate::model::{Api, ApiKey, Catalog, Endpoint, EndpointId, Selection, Session};

impl Selection {
    /// A fresh selection on `api` with no endpoint.
    pub fn new(catalog: &Catalog, api: &str) -> CatalogResult<Self> {
        let api = lookup_api(catalog, api)?;
        Ok(Self {
            api: api.key.clone(),
            endpoint: None,
        })
    }

    /// Switch to `api`. The endpoint is always cleared, also when `api` is
    /// already the selected one.
    pub fn select_api(&mut self, catalog: &Catalog, api: &str) -> CatalogResult<()> {
        let api = lookup_api(catalog, api)?;
        self.api = api.key.clone();
        self.endpoint = None;
        Ok(())
    }

    /// Select an endpoint of the currently selected API.
    pub fn select_endpoint(&mut self, catalog: &Catalog, endpoint: &str) -> CatalogResult<()> {
        let found = catalog
            .endpoint(self.api.as_str(), endpoint)
            .ok_or_else(|| {
                CatalogError::InvalidReference(format!(
                    "endpoint '{}' does not belong to api '{}'",
                    endpoint, self.api
                ))
            })?;
        self.endpoint = Some(found.id.clone());
        Ok(())
    }

    pub fn clear_endpoint(&mut self) {
        self.endpoint = None;
    }

    /// Current `(api, endpoint)` pair.
    pub fn current(&self) -> (&ApiKey, Option<&EndpointId>) {
        (&self.api, self.endpoint.as_ref())
    }

    /// Resolve the selection against the catalog it was built from.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<(&'a Api, Option<&'a Endpoint>)> {
        let api = catalog.get(self.api.as_str())?;
        let endpoint = self
            .endpoint
            .as_ref()
            .and_then(|id| api.endpoint(id.as_str()));
        Some((api, endpoint))
    }
}

fn lookup_api<'a>(catalog: &'a Catalog, key: &str) -> CatalogResult<&'a Api> {
    catalog.get(key).ok_or_else(|| {
        CatalogError::InvalidReference(format!("api '{}' is not in the catalog", key))
    })
}

impl Session {
    /// New session on `default_api` with no endpoint and no language yet.
    pub fn new(catalog: &Catalog, default_api: &str) -> CatalogResult<Self> {
        Ok(Session::with_selection(Selection::new(catalog, default_api)?))
    }

    pub fn select_api(&mut self, catalog: &Catalog, api: &str) -> CatalogResult<()> {
        self.selection.select_api(catalog, api)?;
        debug!("session {} switched to api {}", self.id, api);
        Ok(())
    }

    /// Select an endpoint and re-settle the sticky language against the
    /// languages the new endpoint offers.
    pub fn select_endpoint(&mut self, catalog: &Catalog, endpoint: &str) -> CatalogResult<()> {
        self.selection.select_endpoint(catalog, endpoint)?;
        // An endpoint without examples has nothing to reconcile against.
        if let Some((_, Some(selected))) = self.selection.resolve(catalog) {
            let languages = selected.languages();
            if !languages.is_empty() {
                self.language =
                    resolve_language(&languages, self.language.as_deref()).map(str::to_string);
            }
        }
        debug!(
            "session {} selected endpoint {} (language {:?})",
            self.id, endpoint, self.language
        );
        Ok(())
    }

    pub fn clear_endpoint(&mut self) {
        self.selection.clear_endpoint();
    }

    /// Record an explicit language pick for the selected endpoint.
    pub fn choose_language(&mut self, catalog: &Catalog, language: &str) -> CatalogResult<()> {
        let endpoint = match self.selection.resolve(catalog) {
            Some((_, Some(endpoint))) => endpoint,
            _ => {
                return Err(CatalogError::InvalidReference(
                    "no endpoint selected".to_string(),
                ))
            }
        };
        if endpoint.code_example(language).is_none() {
            return Err(CatalogError::InvalidReference(format!(
                "endpoint '{}' has no '{}' example",
                endpoint.id, language
            )));
        }
        self.language = Some(language.to_string());
        Ok(())
    }
}
