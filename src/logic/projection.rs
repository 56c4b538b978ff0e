//! Views derived from the catalog and a selection.
//!
//! Everything here is a pure function of its inputs; presentation
//! collaborators hold no derived state of their own.

use crate::logic::category_index::group_by_category;
use crate::model::{
    Catalog, CatalogStats, CodeSampleView, CodeSamples, DocumentationView, EndpointDocumentation,
    NavigationApi, NavigationCategory, NavigationEndpoint, NavigationView, Selection,
    CODE_EXAMPLE_NOT_AVAILABLE,
};

/// Sticky language rule: keep `previous` if the endpoint still offers it,
/// otherwise fall back to the first offered language.
pub fn resolve_language<'a>(available: &[&'a str], previous: Option<&str>) -> Option<&'a str> {
    previous
        .and_then(|previous| available.iter().copied().find(|lang| *lang == previous))
        .or_else(|| available.first().copied())
}

/// Category tree with selection flags. Endpoints are listed only under the
/// selected API.
pub fn navigation_view<'a>(catalog: &'a Catalog, selection: &Selection) -> NavigationView<'a> {
    let (selected_api, selected_endpoint) = selection.current();
    let categories = group_by_category(catalog)
        .into_iter()
        .map(|group| {
            let apis = group
                .apis
                .iter()
                .map(|&api| {
                    let is_selected = api.key == *selected_api;
                    let endpoints = if is_selected {
                        api.endpoints
                            .iter()
                            .map(|endpoint| NavigationEndpoint {
                                id: &endpoint.id,
                                name: &endpoint.name,
                                method: &endpoint.method,
                                badge: endpoint.method.badge(),
                                is_selected: selected_endpoint == Some(&endpoint.id),
                            })
                            .collect()
                    } else {
                        Vec::new()
                    };
                    NavigationApi {
                        key: &api.key,
                        title: &api.title,
                        is_selected,
                        endpoint_count: api.endpoints.len(),
                        endpoints,
                    }
                })
                .collect();
            NavigationCategory {
                category: group.category,
                icon: group.icon,
                api_count: group.api_count(),
                apis,
            }
        })
        .collect();
    NavigationView { categories }
}

/// Documentation body for the selected endpoint, bundled with the API-level
/// auth, permissions and webhook auth types.
pub fn documentation_view<'a>(catalog: &'a Catalog, selection: &Selection) -> DocumentationView<'a> {
    match selection.resolve(catalog) {
        Some((api, Some(endpoint))) => DocumentationView::Endpoint(EndpointDocumentation {
            api_key: &api.key,
            api_title: &api.title,
            endpoint,
            authentication: &api.authentication,
            permissions: api.permissions.as_deref(),
            webhook_auth_types: api.webhook_auth_types.as_deref(),
            path_parameters: endpoint.path_placeholders(),
        }),
        _ => DocumentationView::Empty,
    }
}

/// Code panel for the selected endpoint, with the language resolved against
/// the session's previous choice.
pub fn code_sample_view<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    previous_language: Option<&str>,
) -> CodeSampleView<'a> {
    let endpoint = match selection.resolve(catalog) {
        Some((_, Some(endpoint))) => endpoint,
        _ => return CodeSampleView::Empty,
    };

    let available_languages = endpoint.languages();
    let default_language = resolve_language(&available_languages, previous_language);
    let mut samples = CodeSamples {
        method: &endpoint.method,
        path: &endpoint.path,
        available_statuses: endpoint.statuses(),
        request_sample: default_language
            .and_then(|language| endpoint.code_example(language))
            .unwrap_or(CODE_EXAMPLE_NOT_AVAILABLE),
        response_sample: "",
        available_languages,
        default_language,
        endpoint,
    };
    samples.response_sample = samples.response_sample();
    CodeSampleView::Samples(samples)
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    CatalogStats {
        api_count: catalog.len(),
        endpoint_count: catalog.endpoint_count(),
        category_count: group_by_category(catalog).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Api, ApiKey, Authentication, Endpoint, HttpMethod, MethodBadge, Permission,
        RESPONSE_EXAMPLE_NOT_AVAILABLE,
    };

    fn api(key: &str, title: &str, category: &str, endpoints: Vec<Endpoint>) -> Api {
        Api {
            key: ApiKey::from(key),
            title: title.to_string(),
            description: String::new(),
            category: Some(category.to_string()),
            authentication: Authentication {
                scheme: "Bearer Token".to_string(),
                header: "Authorization: Bearer <token>".to_string(),
                api_key: None,
                content_type: "application/json".to_string(),
            },
            permissions: None,
            webhook_auth_types: None,
            endpoints,
        }
    }

    /// Payments (Core: E1 GET, E2 POST) and Webhooks (Integration: E3 POST).
    fn scenario_catalog() -> Catalog {
        let mut payments = api(
            "payments",
            "Payments",
            "Core",
            vec![
                Endpoint::new("E1", "List payments", HttpMethod::Get, "/payments", "")
                    .with_code_example("curl", "curl $BASE_URL/payments")
                    .with_code_example("javascript", "await fetch('/payments')")
                    .with_response("200", "OK", "{\"data\": []}"),
                Endpoint::new("E2", "Create payment", HttpMethod::Post, "/payments/{id}", "")
                    .with_code_example("curl", "curl -X POST $BASE_URL/payments")
                    .with_code_example("python", "requests.post(...)")
                    .with_response("201", "Created", "{\"id\": 1}"),
            ],
        );
        payments.permissions = Some(vec![Permission {
            action: "payments.view".to_string(),
            description: "List payments".to_string(),
        }]);

        let mut webhooks = api(
            "webhooks",
            "Webhooks",
            "Integration",
            vec![
                Endpoint::new("E3", "Create webhook", HttpMethod::Post, "/webhooks", "")
                    .with_code_example("python", "requests.post(...)")
                    .with_code_example("javascript", "await fetch('/webhooks')")
                    .with_response("200", "OK", "{\"ok\": true}")
                    .with_response("201", "Created", "{\"created\": true}"),
                Endpoint::new("E4", "Ping", HttpMethod::from("PURGE"), "/webhooks/ping", ""),
            ],
        );
        webhooks.webhook_auth_types = Some(vec!["hmac-sha256".to_string()]);

        Catalog::new(vec![payments, webhooks]).unwrap()
    }

    #[test]
    fn test_end_to_end_navigation_scenario() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "payments").unwrap();

        let view = navigation_view(&catalog, &selection);
        let names: Vec<&str> = view.categories.iter().map(|group| group.category).collect();
        assert_eq!(names, vec!["Core", "Integration"]);

        let payments = view.api("payments").unwrap();
        assert!(payments.is_selected);
        assert_eq!(payments.endpoints.len(), 2);
        assert!(payments.endpoints.iter().all(|endpoint| !endpoint.is_selected));
        assert!(!view.api("webhooks").unwrap().is_selected);
        assert!(view.api("webhooks").unwrap().endpoints.is_empty());

        selection.select_endpoint(&catalog, "E1").unwrap();
        let view = navigation_view(&catalog, &selection);
        let payments = view.api("payments").unwrap();
        assert!(payments.endpoints[0].is_selected);
        assert!(!payments.endpoints[1].is_selected);

        selection.select_api(&catalog, "webhooks").unwrap();
        assert!(selection.endpoint().is_none());
        let view = navigation_view(&catalog, &selection);
        assert_eq!(view.selected_api().unwrap().key.as_str(), "webhooks");
        assert!(!view.api("payments").unwrap().is_selected);
        assert_eq!(view.api("webhooks").unwrap().endpoints.len(), 2);
    }

    #[test]
    fn test_navigation_badges_and_counts() {
        let catalog = scenario_catalog();
        let selection = Selection::new(&catalog, "webhooks").unwrap();
        let view = navigation_view(&catalog, &selection);
        let webhooks = view.api("webhooks").unwrap();
        assert_eq!(webhooks.endpoint_count, 2);
        assert_eq!(webhooks.endpoints[0].badge, MethodBadge::Post);
        assert_eq!(webhooks.endpoints[1].badge, MethodBadge::Neutral);
        assert_eq!(view.category("Core").unwrap().api_count, 1);
        assert_eq!(view.api("payments").unwrap().endpoint_count, 2);
    }

    #[test]
    fn test_documentation_view() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "payments").unwrap();
        assert_eq!(documentation_view(&catalog, &selection), DocumentationView::Empty);

        selection.select_endpoint(&catalog, "E2").unwrap();
        match documentation_view(&catalog, &selection) {
            DocumentationView::Endpoint(doc) => {
                assert_eq!(doc.endpoint.id.as_str(), "E2");
                assert_eq!(doc.api_title, "Payments");
                assert_eq!(doc.authentication.scheme, "Bearer Token");
                assert_eq!(doc.permissions.unwrap().len(), 1);
                assert!(doc.webhook_auth_types.is_none());
                assert_eq!(doc.path_parameters, vec!["id"]);
            }
            DocumentationView::Empty => panic!("expected endpoint documentation"),
        }

        selection.select_api(&catalog, "webhooks").unwrap();
        selection.select_endpoint(&catalog, "E3").unwrap();
        match documentation_view(&catalog, &selection) {
            DocumentationView::Endpoint(doc) => {
                assert!(doc.permissions.is_none());
                assert_eq!(doc.webhook_auth_types.unwrap(), ["hmac-sha256".to_string()]);
            }
            DocumentationView::Empty => panic!("expected endpoint documentation"),
        }
    }

    #[test]
    fn test_sticky_language_rule() {
        assert_eq!(
            resolve_language(&["curl", "python"], Some("javascript")),
            Some("curl")
        );
        assert_eq!(
            resolve_language(&["python", "javascript"], Some("javascript")),
            Some("javascript")
        );
        assert_eq!(resolve_language(&["python", "curl"], None), Some("python"));
        assert_eq!(resolve_language(&[], Some("curl")), None);
    }

    #[test]
    fn test_code_sample_view_language_fallback() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "payments").unwrap();
        assert_eq!(code_sample_view(&catalog, &selection, None), CodeSampleView::Empty);

        selection.select_endpoint(&catalog, "E2").unwrap();
        let view = code_sample_view(&catalog, &selection, Some("javascript"));
        let samples = view.samples().unwrap();
        assert_eq!(samples.available_languages, vec!["curl", "python"]);
        assert_eq!(samples.default_language, Some("curl"));
        assert_eq!(samples.request_sample, "curl -X POST $BASE_URL/payments");
        assert_eq!(samples.request_sample_for("python"), Some("requests.post(...)"));
        assert_eq!(samples.request_sample_for("ruby"), None);

        selection.select_api(&catalog, "webhooks").unwrap();
        selection.select_endpoint(&catalog, "E3").unwrap();
        let view = code_sample_view(&catalog, &selection, Some("javascript"));
        assert_eq!(view.samples().unwrap().default_language, Some("javascript"));
    }

    #[test]
    fn test_response_sample_prefers_200_then_201() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "payments").unwrap();

        selection.select_endpoint(&catalog, "E2").unwrap();
        let view = code_sample_view(&catalog, &selection, None);
        assert_eq!(view.samples().unwrap().response_sample(), "{\"id\": 1}");

        selection.select_api(&catalog, "webhooks").unwrap();
        selection.select_endpoint(&catalog, "E3").unwrap();
        let view = code_sample_view(&catalog, &selection, None);
        let samples = view.samples().unwrap();
        assert_eq!(samples.response_sample(), "{\"ok\": true}");
        assert_eq!(samples.response_sample_for("201"), "{\"created\": true}");
        assert_eq!(samples.response_sample_for("404"), RESPONSE_EXAMPLE_NOT_AVAILABLE);
        assert_eq!(samples.available_statuses, vec!["200", "201"]);
    }

    #[test]
    fn test_endpoint_without_examples_renders_placeholders() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "webhooks").unwrap();
        selection.select_endpoint(&catalog, "E4").unwrap();

        let view = code_sample_view(&catalog, &selection, Some("curl"));
        let samples = view.samples().unwrap();
        assert!(samples.available_languages.is_empty());
        assert_eq!(samples.default_language, None);
        assert_eq!(samples.request_sample, CODE_EXAMPLE_NOT_AVAILABLE);
        assert_eq!(samples.response_sample, RESPONSE_EXAMPLE_NOT_AVAILABLE);
        assert_eq!(samples.response_sample(), RESPONSE_EXAMPLE_NOT_AVAILABLE);
    }

    #[test]
    fn test_catalog_stats() {
        let stats = catalog_stats(&scenario_catalog());
        assert_eq!(stats.api_count, 2);
        assert_eq!(stats.endpoint_count, 4);
        assert_eq!(stats.category_count, 2);
    }

    #[test]
    fn test_views_serialize_with_state_tag() {
        let catalog = scenario_catalog();
        let mut selection = Selection::new(&catalog, "payments").unwrap();
        let empty = serde_json::to_value(documentation_view(&catalog, &selection)).unwrap();
        assert_eq!(empty, serde_json::json!({"state": "empty"}));

        selection.select_endpoint(&catalog, "E1").unwrap();
        let samples = serde_json::to_value(code_sample_view(&catalog, &selection, None)).unwrap();
        assert_eq!(samples["state"], "samples");
        assert_eq!(samples["default_language"], "curl");
        assert_eq!(samples["method"], "GET");
        assert!(samples.get("endpoint").is_none());
    }
}
