use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{EndpointId, HttpMethod};

/// A path or query parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    /// Where the parameter goes: `path`, `query`, `header`... (open set)
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// A field of the request body schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub required: bool,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// Literal sample source for one language (`curl`, `javascript`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeExample {
    pub language: String,
    pub source: String,
}

/// Documented response for one status code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseExample {
    pub status: String,
    pub description: String,
    pub example: String,
}

/// One documented operation of an API.
///
/// Every keyed collection is stored in definition order; the order is what
/// the navigator and the language/status selectors display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: EndpointId,
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub request_body: Vec<BodyField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responses: Vec<ResponseExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Endpoint {
    pub fn new(
        id: impl Into<EndpointId>,
        name: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            method,
            path: path.into(),
            description: description.into(),
            parameters: Vec::new(),
            request_body: Vec::new(),
            code_examples: Vec::new(),
            responses: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_code_example(mut self, language: &str, source: &str) -> Self {
        self.code_examples.push(CodeExample {
            language: language.to_string(),
            source: source.to_string(),
        });
        self
    }

    pub fn with_response(mut self, status: &str, description: &str, example: &str) -> Self {
        self.responses.push(ResponseExample {
            status: status.to_string(),
            description: description.to_string(),
            example: example.to_string(),
        });
        self
    }

    /// Languages with a code example, in definition order.
    pub fn languages(&self) -> Vec<&str> {
        self.code_examples
            .iter()
            .map(|example| example.language.as_str())
            .collect()
    }

    pub fn code_example(&self, language: &str) -> Option<&str> {
        self.code_examples
            .iter()
            .find(|example| example.language == language)
            .map(|example| example.source.as_str())
    }

    /// Status codes with a documented response, in definition order.
    pub fn statuses(&self) -> Vec<&str> {
        self.responses
            .iter()
            .map(|response| response.status.as_str())
            .collect()
    }

    pub fn response(&self, status: &str) -> Option<&ResponseExample> {
        self.responses.iter().find(|response| response.status == status)
    }

    /// Names of the `{param}` placeholders in the path template, in order.
    pub fn path_placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    let name = after[..end].trim();
                    if !name.is_empty() {
                        names.push(name);
                    }
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revoke_endpoint() -> Endpoint {
        Endpoint::new(
            "revoke-access-token",
            "Revoke Access Token",
            HttpMethod::Delete,
            "/api/company/access-tokens/{tokenId}",
            "Revokes an existing access token",
        )
        .with_code_example("curl", "curl -X DELETE ...")
        .with_code_example("javascript", "await fetch(...)")
        .with_response("200", "Success", "{\"success\": true}")
    }

    #[test]
    fn test_languages_keep_definition_order() {
        let endpoint = revoke_endpoint();
        assert_eq!(endpoint.languages(), vec!["curl", "javascript"]);
        assert_eq!(endpoint.code_example("curl"), Some("curl -X DELETE ..."));
        assert_eq!(endpoint.code_example("ruby"), None);
    }

    #[test]
    fn test_path_placeholders() {
        let endpoint = revoke_endpoint();
        assert_eq!(endpoint.path_placeholders(), vec!["tokenId"]);

        let mut nested = revoke_endpoint();
        nested.path = "/api/accounts/{accountNumber}/statement/{ year }".to_string();
        assert_eq!(nested.path_placeholders(), vec!["accountNumber", "year"]);

        let mut broken = revoke_endpoint();
        broken.path = "/api/{unterminated".to_string();
        assert!(broken.path_placeholders().is_empty());
    }

    #[test]
    fn test_optional_collections_default_when_missing() {
        let json = r#"{
            "id": "list-banks",
            "name": "List Banks",
            "method": "GET",
            "path": "/api/banks",
            "description": "Lists supported banks"
        }"#;
        let endpoint: Endpoint = serde_json::from_str(json).unwrap();
        assert!(endpoint.parameters.is_empty());
        assert!(endpoint.code_examples.is_empty());
        assert!(endpoint.responses.is_empty());

        let serialized = serde_json::to_string(&endpoint).unwrap();
        assert!(!serialized.contains("\"notes\""));
    }
}
