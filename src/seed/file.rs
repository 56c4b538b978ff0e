use anyhow::Context;
use log::info;
use std::path::Path;

use crate::model::Api;

/// Read a catalog file: a JSON array of API definitions in navigator order.
///
/// Only parsing happens here; invariants are checked when the catalog is built.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> anyhow::Result<Vec<Api>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let apis: Vec<Api> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
    info!("loaded {} apis from {}", apis.len(), path.display());
    Ok(apis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::bundled_apis;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_bundled_catalog_survives_file_format() {
        let path = temp_path("catalog");
        let json = serde_json::to_string_pretty(&bundled_apis()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_catalog_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, bundled_apis());
    }

    #[test]
    fn test_minimal_definition() {
        let path = temp_path("minimal");
        std::fs::write(
            &path,
            r#"[{
                "key": "payments",
                "title": "Payments",
                "description": "",
                "authentication": {
                    "type": "Bearer Token",
                    "header": "Authorization: Bearer <token>",
                    "content_type": "application/json"
                },
                "endpoints": [
                    {"id": "refund", "name": "Refund", "method": "PATCH",
                     "path": "/refunds/{id}", "description": ""}
                ]
            }]"#,
        )
        .unwrap();

        let loaded = load_catalog_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category_name(), "Other");
        assert!(loaded[0].endpoints[0].code_examples.is_empty());
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let missing = load_catalog_from_path(temp_path("missing")).unwrap_err();
        assert!(missing.to_string().contains("failed to read"));

        let path = temp_path("broken");
        std::fs::write(&path, "{ not json").unwrap();
        let broken = load_catalog_from_path(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(broken.to_string().contains("failed to parse"));
    }
}
