//! Catalog loading from the JSON source file.
//!
//! The source is a three-level object: package name → module name → module
//! fields. Parsing happens in two passes: serde builds a raw tree with icons
//! kept as their source text, then every icon goes through
//! [`IconField::decode_str`].
//! That split lets an icon failure name its package and module instead of
//! surfacing as a generic parse error.

use super::icon::IconField;
use super::model::{Library, Module, Package};
use crate::error::LoadError;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw form of the file. BTreeMaps keep icon error reporting deterministic.
type RawLibrary = BTreeMap<String, BTreeMap<String, RawModule>>;

#[derive(Debug, Deserialize)]
struct RawModule {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    markdown: Option<String>,
    #[serde(default)]
    tester: Option<String>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    icon: RawIcon,
}

/// Distinguishes a missing `icon` key from an explicit `null`.
#[derive(Debug, Default)]
enum RawIcon {
    #[default]
    Missing,
    Present(Box<RawValue>),
}

impl<'de> Deserialize<'de> for RawIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(RawIcon::Present)
    }
}

/// Build a fresh library from raw JSON bytes.
///
/// Either the whole library is returned or an error; nothing partial.
pub fn load(bytes: &[u8]) -> Result<Library, LoadError> {
    let raw: RawLibrary = serde_json::from_slice(bytes).map_err(LoadError::Parse)?;

    let mut library = Library::new();
    for (package_name, raw_modules) in raw {
        let mut package = Package::new();
        for (key, raw_module) in raw_modules {
            let module = build_module(&package_name, &key, raw_module)?;
            package.insert_as(key, module);
        }
        library.insert(package_name, package);
    }
    Ok(library)
}

/// Read and load a source file synchronously.
pub fn load_path(path: &Path) -> Result<Library, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&bytes)
}

/// Async variant of [`load_path`], used by the reload task.
pub async fn load_file(path: &Path) -> Result<Library, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&bytes)
}

fn build_module(package: &str, key: &str, raw: RawModule) -> Result<Module, LoadError> {
    let icon = match &raw.icon {
        RawIcon::Missing => IconField::Absent,
        RawIcon::Present(raw) => {
            IconField::decode_str(raw.get()).map_err(|source| LoadError::Icon {
                package: package.to_string(),
                module: key.to_string(),
                source,
            })?
        }
    };

    // The display/sort name falls back to the key the module was filed under.
    let name = raw
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| key.to_string());

    Ok(Module {
        name,
        description: raw.description.unwrap_or_default(),
        path: raw.path.unwrap_or_default(),
        markdown: raw.markdown.unwrap_or_default(),
        tester: raw.tester.unwrap_or_default(),
        example: raw.example.unwrap_or_default(),
        icon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCENARIO: &str =
        r#"{"core":{"mod1":{"name":"mod1","description":"d","path":"/p","icon":"icon.png"}}}"#;

    #[test]
    fn test_load_scenario_source() {
        let library = load(SCENARIO.as_bytes()).unwrap();
        let module = library.package("core").unwrap().get("mod1").unwrap();
        assert_eq!(module.name, "mod1");
        assert_eq!(module.description, "d");
        assert_eq!(module.path, "/p");
        assert_eq!(module.markdown, "");
        assert_eq!(module.icon, IconField::Single("icon.png".to_string()));
    }

    #[test]
    fn test_missing_icon_is_absent() {
        let library = load(br#"{"p":{"m":{"name":"m"}}}"#).unwrap();
        let module = library.package("p").unwrap().get("m").unwrap();
        assert_eq!(module.icon, IconField::Absent);
    }

    #[test]
    fn test_null_icon_is_malformed() {
        let err = load(br#"{"p":{"m":{"name":"m","icon":null}}}"#).unwrap_err();
        match err {
            LoadError::Icon {
                package,
                module,
                source,
            } => {
                assert_eq!(package, "p");
                assert_eq!(module, "m");
                assert_eq!(source.raw, "null");
            }
            other => panic!("expected icon error, got {other:?}"),
        }
    }

    #[test]
    fn test_array_icon_is_malformed() {
        let err = load(br#"{"p":{"m":{"icon":["a.png"]}}}"#).unwrap_err();
        assert!(matches!(err, LoadError::Icon { .. }));
    }

    #[test]
    fn test_malformed_icon_keeps_source_text() {
        let err = load(br#"{"p":{"m":{"icon":[ "a.png" , 1.50 ]}}}"#).unwrap_err();
        match err {
            LoadError::Icon { source, .. } => assert_eq!(source.raw, r#"[ "a.png" , 1.50 ]"#),
            other => panic!("expected icon error, got {other:?}"),
        }

        let err = load(br#"{"p":{"m":{"icon":{ "dark" : 1e0 }}}}"#).unwrap_err();
        match err {
            LoadError::Icon { source, .. } => assert_eq!(source.raw, r#"{ "dark" : 1e0 }"#),
            other => panic!("expected icon error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(load(b"{\"p\": "), Err(LoadError::Parse(_))));
        assert!(matches!(load(b"[1, 2]"), Err(LoadError::Parse(_))));
        assert!(matches!(
            load(br#"{"p":{"m":{"name":7}}}"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_name_falls_back_to_key() {
        let library = load(br#"{"p":{"keyed":{"description":"x"},"blank":{"name":""}}}"#).unwrap();
        let package = library.package("p").unwrap();
        assert_eq!(package.get("keyed").unwrap().name, "keyed");
        assert_eq!(package.get("blank").unwrap().name, "blank");
    }

    #[test]
    fn test_null_string_fields_become_empty() {
        let library = load(br#"{"p":{"m":{"name":"m","tester":null}}}"#).unwrap();
        assert_eq!(library.package("p").unwrap().get("m").unwrap().tester, "");
    }

    #[test]
    fn test_load_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("g.json");
        match load_path(&missing) {
            Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();
        let library = load_path(file.path()).unwrap();
        assert_eq!(library.module_count(), 1);
    }
}
