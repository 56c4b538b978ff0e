use serde::{Deserialize, Serialize};

use crate::model::{ApiKey, Endpoint};

/// Category used when an API declares none.
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Authentication {
    #[serde(rename = "type")]
    pub scheme: String,
    /// Header template, e.g. `Authorization: Bearer <company_token>`
    pub header: String,
    /// Secondary key header, e.g. `X-API-Key: <api_key>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub action: String,
    pub description: String,
}

/// One documented API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    pub key: ApiKey,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub authentication: Authentication,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_auth_types: Option<Vec<String>>,
    pub endpoints: Vec<Endpoint>,
}

impl Api {
    /// Category used for grouping; missing or blank resolves to `Other`.
    /// Other names are used exactly as declared.
    pub fn category_name(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }

    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_api(category: Option<&str>) -> Api {
        Api {
            key: ApiKey::from("payments"),
            title: "Payments".to_string(),
            description: "Payments API".to_string(),
            category: category.map(str::to_string),
            authentication: Authentication {
                scheme: "Bearer Token".to_string(),
                header: "Authorization: Bearer <token>".to_string(),
                api_key: None,
                content_type: "application/json".to_string(),
            },
            permissions: None,
            webhook_auth_types: None,
            endpoints: Vec::new(),
        }
    }

    #[test]
    fn test_category_defaults_to_other() {
        assert_eq!(bare_api(None).category_name(), "Other");
        assert_eq!(bare_api(Some("   ")).category_name(), "Other");
        assert_eq!(bare_api(Some("Core")).category_name(), "Core");
    }

    #[test]
    fn test_category_names_are_not_normalised() {
        assert_eq!(bare_api(Some(" Core ")).category_name(), " Core ");
        assert_ne!(
            bare_api(Some(" Core ")).category_name(),
            bare_api(Some("Core")).category_name()
        );
    }

    #[test]
    fn test_optional_api_sections_are_omitted() {
        let json = serde_json::to_string(&bare_api(None)).unwrap();
        assert!(!json.contains("\"permissions\""));
        assert!(!json.contains("\"webhook_auth_types\""));
        assert!(!json.contains("\"api_key\""));
        assert!(json.contains("\"type\":\"Bearer Token\""));
    }
}
