use tempfile::TempDir;
use termfields::provider::memory::{MemoryFields, MemoryTaxonomies};
use termfields::{ConfigError, DecoratorConfig, TaxonomyDescriptor, TaxonomySelector};

fn taxonomies() -> MemoryTaxonomies {
    MemoryTaxonomies::new()
        .taxonomy(TaxonomyDescriptor::new("genre", "Genres"))
        .taxonomy(TaxonomyDescriptor::new("mood", "Moods"))
}

#[test]
fn loads_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("termfields.toml");
    std::fs::write(&path, r#"taxonomies = ["genre", "mood"]"#).unwrap();

    let config = DecoratorConfig::load(&path).unwrap();
    assert_eq!(config.taxonomies, vec!["genre", "mood"]);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = DecoratorConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_file_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("termfields.toml");
    std::fs::write(&path, "taxonomies = genre").unwrap();

    assert!(matches!(
        DecoratorConfig::load(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn build_registers_configured_taxonomies() {
    let config = DecoratorConfig {
        taxonomies: vec!["genre".into(), "mood".into()],
    };
    let decorator = config.build(taxonomies(), MemoryFields::new());

    assert!(decorator.is_registered(&TaxonomySelector::from("genre")));
    assert!(decorator.is_registered(&TaxonomySelector::from("mood")));
}

#[test]
fn build_skips_unknown_taxonomies() {
    let config = DecoratorConfig {
        taxonomies: vec!["genre".into(), "bogus".into()],
    };
    let decorator = config.build(taxonomies(), MemoryFields::new());

    assert!(decorator.is_registered(&TaxonomySelector::from("genre")));
    assert!(!decorator.is_registered(&TaxonomySelector::from("bogus")));
}

#[test]
fn empty_config_builds_decorator_with_nothing_registered() {
    let decorator = DecoratorConfig::default().build(taxonomies(), MemoryFields::new());
    assert!(!decorator.has_registered_taxonomies());
}
