#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    use crate::errors::ExpressionError;
    use crate::implementations::resource_catalog::ResourceCatalog;
    use crate::traits::name_resolver::NameResolver;

    const CATALOG_YAML: &str = r#"
default_locale: en
entries:
  en:
    firstName: First Name
    address_city: City
    birth: ""
  fr:
    firstName: Prénom
"#;

    #[test]
    fn resolves_from_default_locale() {
        let catalog = ResourceCatalog::from_yaml_str(CATALOG_YAML).unwrap();

        assert_eq!(catalog.resolve("firstName"), Some("First Name".to_string()));
        assert_eq!(catalog.resolve("address_city"), Some("City".to_string()));
        assert_eq!(catalog.resolve("unknown"), None);
    }

    #[test]
    fn active_locale_falls_back_to_default() {
        let catalog = ResourceCatalog::from_yaml_str(CATALOG_YAML).unwrap().with_locale("fr");

        assert_eq!(catalog.resolve("firstName"), Some("Prénom".to_string()));
        assert_eq!(catalog.resolve("address_city"), Some("City".to_string()));
    }

    #[test]
    fn unknown_locale_uses_default() {
        let catalog = ResourceCatalog::from_yaml_str(CATALOG_YAML).unwrap().with_locale("de");
        assert_eq!(catalog.resolve("firstName"), Some("First Name".to_string()));
    }

    #[test]
    fn empty_text_counts_as_missing() {
        let catalog = ResourceCatalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.resolve("birth"), None);
    }

    #[test]
    fn lists_locales_sorted() {
        let catalog = ResourceCatalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.locales(), vec!["en", "fr"]);
    }

    #[test]
    fn default_locale_is_named_default() {
        let mut catalog = ResourceCatalog::new();
        catalog.insert("default", "age", "Age");

        assert_eq!(catalog.default_locale, "default");
        assert_eq!(catalog.resolve("age"), Some("Age".to_string()));
    }

    #[test]
    fn loads_json_and_yaml_files() {
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("catalog.json");
        fs::write(&json_path, r#"{"entries": {"default": {"age": "Age"}}}"#).unwrap();
        let catalog = ResourceCatalog::from_file(&json_path).unwrap();
        assert_eq!(catalog.resolve("age"), Some("Age".to_string()));

        let yaml_path = dir.path().join("catalog.yml");
        fs::write(&yaml_path, CATALOG_YAML).unwrap();
        let catalog = ResourceCatalog::from_file(&yaml_path).unwrap();
        assert_eq!(catalog.resolve("address_city"), Some("City".to_string()));
    }

    #[test]
    fn rejects_unknown_file_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        fs::write(&path, "firstName=First Name").unwrap();

        let result = ResourceCatalog::from_file(&path);
        assert!(matches!(result, Err(ExpressionError::ResourceError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = ResourceCatalog::from_file(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ExpressionError::Io(_))));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let result = ResourceCatalog::from_yaml_str("entries: [1, 2");
        assert!(matches!(result, Err(ExpressionError::Config(_))));
    }
}
