//! Loading locale bundles from a directory of JSON files.
//!
//! Each `<code>.json` file directly under the bundle root holds one
//! locale's templates. The file stem is resolved against the locale
//! catalog, so `pt-BR.json` and `pt_BR.json` land under the same bundle
//! key. Nested objects flatten into dot-separated keys; only string leaves
//! become templates.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::locales;
use crate::messages::{LocaleBundle, MessageCatalog};

/// A warning raised while scanning the bundle directory.
#[derive(Debug, Clone)]
pub struct BundleScanWarning {
    pub file_path: String,
    pub reason: String,
}

/// Result of loading a bundle directory.
#[derive(Debug, Default)]
pub struct CatalogLoadResult {
    pub catalog: MessageCatalog,
    /// Files that were skipped, with the reason.
    pub warnings: Vec<BundleScanWarning>,
}

/// Load every `<code>.json` bundle directly under `root`.
///
/// Files whose stem doesn't resolve to a known locale, and files that
/// fail to parse, are skipped with a collected warning rather than failing
/// the whole load.
pub fn load_dir(root: &Path) -> Result<CatalogLoadResult> {
    let mut result = CatalogLoadResult::default();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to scan bundle directory: {:?}", root))?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some("json")
        {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let locale = match locales::resolve(stem) {
            Ok(locale) => locale,
            Err(err) => {
                warn!(file = %path.display(), %err, "skipping bundle with unresolvable locale stem");
                result.warnings.push(BundleScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match parse_bundle_file(path, locale.key()) {
            Ok(bundle) => {
                debug!(file = %path.display(), locale = locale.key(), templates = bundle.len(), "loaded locale bundle");
                result.catalog.insert(bundle);
            }
            Err(err) => {
                warn!(file = %path.display(), "skipping unparsable bundle file");
                result.warnings.push(BundleScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(result)
}

/// Parse one bundle file into a flat key → template map.
pub fn parse_bundle_file(path: &Path, locale_key: &str) -> Result<LocaleBundle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bundle file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse bundle file: {:?}", path))?;

    let mut bundle = LocaleBundle::new(locale_key);
    bundle.file_path = Some(path.to_string_lossy().to_string());
    flatten_json(&json, String::new(), &mut bundle);
    Ok(bundle)
}

/// Flatten nested objects into dot-separated keys.
///
/// Non-string leaves (numbers, arrays, booleans, nulls) aren't templates
/// and are ignored.
fn flatten_json(value: &Value, prefix: String, bundle: &mut LocaleBundle) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(child, child_key, bundle);
            }
        }
        Value::String(template) => {
            if !prefix.is_empty() {
                bundle.insert(prefix, template.clone());
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::messages::loader::*;

    #[test]
    fn test_load_dir_resolves_stems_to_canonical_keys() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en_US.json"), r#"{ "fruit": "Apple" }"#).unwrap();
        // Delimiter intentionally mixed: the stem goes through the resolver.
        fs::write(dir.path().join("pt-BR.json"), r#"{ "fruit": "Maçã" }"#).unwrap();

        let result = load_dir(dir.path()).unwrap();
        assert!(result.warnings.is_empty());
        assert_eq!(result.catalog.len(), 2);
        assert_eq!(result.catalog.bundle("en_US").unwrap().get("fruit"), Some("Apple"));
        assert_eq!(result.catalog.bundle("pt_BR").unwrap().get("fruit"), Some("Maçã"));

        let from_file = result.catalog.bundle("pt_BR").unwrap().file_path.as_deref();
        assert!(from_file.is_some_and(|path| path.contains("pt-BR.json")));
    }

    #[test]
    fn test_load_dir_flattens_nested_objects() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("en_US.json"),
            r#"{ "common": { "submit": "Submit", "deep": { "cancel": "Cancel" } }, "fruit": "Apple" }"#,
        )
        .unwrap();

        let result = load_dir(dir.path()).unwrap();
        let bundle = result.catalog.bundle("en_US").unwrap();
        assert_eq!(bundle.get("common.submit"), Some("Submit"));
        assert_eq!(bundle.get("common.deep.cancel"), Some("Cancel"));
        assert_eq!(bundle.get("fruit"), Some("Apple"));
    }

    #[test]
    fn test_load_dir_skips_non_string_leaves() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("en_US.json"),
            r#"{ "count": 3, "flags": [true], "fruit": "Apple" }"#,
        )
        .unwrap();

        let result = load_dir(dir.path()).unwrap();
        let bundle = result.catalog.bundle("en_US").unwrap();
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.get("fruit"), Some("Apple"));
    }

    #[test]
    fn test_load_dir_warns_on_unresolvable_stem() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("xx.json"), r#"{ "fruit": "???" }"#).unwrap();
        fs::write(dir.path().join("en_US.json"), r#"{ "fruit": "Apple" }"#).unwrap();

        let result = load_dir(dir.path()).unwrap();
        assert_eq!(result.catalog.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].file_path.contains("xx.json"));
    }

    #[test]
    fn test_load_dir_warns_on_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en_US.json"), "not json at all").unwrap();

        let result = load_dir(dir.path()).unwrap();
        assert!(result.catalog.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_load_dir_ignores_other_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "# bundles").unwrap();
        fs::create_dir(dir.path().join("en_US.json.d")).unwrap();

        let result = load_dir(dir.path()).unwrap();
        assert!(result.catalog.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_load_dir_missing_root_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(load_dir(&missing).is_err());
    }
}
