//! Domain errors for catalog lookups and selection changes.
//!
//! Every variant is recoverable: a rejected selection change leaves the
//! session exactly as it was.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Unknown catalog key or session id.
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    /// API not in the catalog, endpoint not in the selected API, or a code
    /// sample language the selected endpoint does not offer.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// Catalog definitions violate a construction invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl CatalogError {
    pub fn api_not_found(key: &str) -> Self {
        Self::NotFound {
            entity: "api",
            key: key.to_string(),
        }
    }

    pub fn session_not_found(id: &str) -> Self {
        Self::NotFound {
            entity: "session",
            key: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
