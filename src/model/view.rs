//! Read-only views handed to presentation collaborators.
//!
//! Views borrow from the catalog; they are recomputed on every request and
//! never stored.

use serde::Serialize;

use crate::model::{
    Api, ApiKey, Authentication, Endpoint, EndpointId, HttpMethod, MethodBadge, Permission,
};

/// Placeholder shown when an endpoint has no sample for the chosen language.
pub const CODE_EXAMPLE_NOT_AVAILABLE: &str = "Code example not available";
/// Placeholder shown when an endpoint documents no suitable response.
pub const RESPONSE_EXAMPLE_NOT_AVAILABLE: &str = "Response example not available";

/// APIs sharing one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub icon: &'static str,
    pub apis: Vec<&'a Api>,
}

impl CategoryGroup<'_> {
    pub fn api_count(&self) -> usize {
        self.apis.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationView<'a> {
    pub categories: Vec<NavigationCategory<'a>>,
}

impl<'a> NavigationView<'a> {
    pub fn category(&self, name: &str) -> Option<&NavigationCategory<'a>> {
        self.categories.iter().find(|group| group.category == name)
    }

    pub fn api(&self, key: &str) -> Option<&NavigationApi<'a>> {
        self.categories
            .iter()
            .flat_map(|group| group.apis.iter())
            .find(|api| api.key.as_str() == key)
    }

    pub fn selected_api(&self) -> Option<&NavigationApi<'a>> {
        self.categories
            .iter()
            .flat_map(|group| group.apis.iter())
            .find(|api| api.is_selected)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationCategory<'a> {
    pub category: &'a str,
    pub icon: &'static str,
    pub api_count: usize,
    pub apis: Vec<NavigationApi<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationApi<'a> {
    pub key: &'a ApiKey,
    pub title: &'a str,
    pub is_selected: bool,
    pub endpoint_count: usize,
    /// Only populated for the selected API.
    pub endpoints: Vec<NavigationEndpoint<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationEndpoint<'a> {
    pub id: &'a EndpointId,
    pub name: &'a str,
    pub method: &'a HttpMethod,
    pub badge: MethodBadge,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DocumentationView<'a> {
    /// No endpoint selected; the body shows a "select an endpoint" prompt.
    Empty,
    Endpoint(EndpointDocumentation<'a>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDocumentation<'a> {
    pub api_key: &'a ApiKey,
    pub api_title: &'a str,
    pub endpoint: &'a Endpoint,
    pub authentication: &'a Authentication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<&'a [Permission]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_auth_types: Option<&'a [String]>,
    pub path_parameters: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CodeSampleView<'a> {
    Empty,
    Samples(CodeSamples<'a>),
}

impl<'a> CodeSampleView<'a> {
    pub fn samples(&self) -> Option<&CodeSamples<'a>> {
        match self {
            CodeSampleView::Empty => None,
            CodeSampleView::Samples(samples) => Some(samples),
        }
    }
}

/// Code panel content for the selected endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeSamples<'a> {
    pub method: &'a HttpMethod,
    pub path: &'a str,
    pub available_languages: Vec<&'a str>,
    /// `None` only when the endpoint has no code examples at all.
    pub default_language: Option<&'a str>,
    pub available_statuses: Vec<&'a str>,
    pub request_sample: &'a str,
    pub response_sample: &'a str,
    #[serde(skip)]
    pub(crate) endpoint: &'a Endpoint,
}

impl<'a> CodeSamples<'a> {
    /// Request sample for `language`, or `None` when the endpoint has none.
    pub fn request_sample_for(&self, language: &str) -> Option<&'a str> {
        self.endpoint.code_example(language)
    }

    /// The "200" example, else "201", else the not-available placeholder.
    pub fn response_sample(&self) -> &'a str {
        let endpoint: &'a Endpoint = self.endpoint;
        endpoint
            .response("200")
            .or_else(|| endpoint.response("201"))
            .map(|response| response.example.as_str())
            .unwrap_or(RESPONSE_EXAMPLE_NOT_AVAILABLE)
    }

    /// Example for a specific status, or the not-available placeholder.
    pub fn response_sample_for(&self, status: &str) -> &'a str {
        self.endpoint
            .response(status)
            .map(|response| response.example.as_str())
            .unwrap_or(RESPONSE_EXAMPLE_NOT_AVAILABLE)
    }
}

/// Totals shown under the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub api_count: usize,
    pub endpoint_count: usize,
    pub category_count: usize,
}
