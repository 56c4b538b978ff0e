use serde::Serialize;

use crate::model::{generate_id, ApiKey, EndpointId, Id};

/// Which API and endpoint a session is currently viewing.
///
/// The endpoint, when present, always belongs to `api`. Mutations go through
/// the operations in `logic::selection`, which enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub(crate) api: ApiKey,
    pub(crate) endpoint: Option<EndpointId>,
}

impl Selection {
    pub fn api(&self) -> &ApiKey {
        &self.api
    }

    pub fn endpoint(&self) -> Option<&EndpointId> {
        self.endpoint.as_ref()
    }
}

/// One viewer tab: its selection plus the code-sample language it last
/// settled on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: Id,
    pub(crate) selection: Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) language: Option<String>,
    pub created_at: String, // ISO 8601 timestamp
}

impl Session {
    pub(crate) fn with_selection(selection: Selection) -> Self {
        Self {
            id: generate_id(),
            selection,
            language: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The code-sample language this session last settled on, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}
