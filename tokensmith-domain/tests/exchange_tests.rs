// tokensmith-domain/tests/exchange_tests.rs

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tokensmith_core::config::ConfigLoader;
use tokensmith_domain::tokens::exchange::{
    export_tokens, import_json, import_json_file, notice_for, ExchangeOutcome, ExportArtifact, FileSystemSink,
    NoticeKind,
};
use tokensmith_domain::tokens::serializer::from_json;
use tokensmith_domain::{ExportFormat, TokenCategory, TokenStore};

#[test]
fn test_export_every_format_from_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[export]\nbase_name = \"brand\"\noutput_dir = {:?}\ndefault_format = \"scss\"\n",
            dir.path().join("exports").to_string_lossy()
        ),
    )
    .unwrap();
    let config = ConfigLoader::load_from_path(&config_path).unwrap();

    let mut sink = FileSystemSink::from_config(&config.export).unwrap();
    let store = TokenStore::new();

    let default = ExportArtifact::from_config(store.tokens(), &config.export, None).unwrap();
    assert_eq!(default.file_name, "brand.scss");

    for format in ExportFormat::ALL {
        let artifact = export_tokens(store.tokens(), &config.export.base_name, format, &mut sink).unwrap();
        let written = std::fs::read_to_string(sink.path_for(&artifact)).unwrap();
        assert_eq!(written, artifact.content);
    }
    assert!(dir.path().join("exports/brand.css").is_file());
    assert!(dir.path().join("exports/brand.scss").is_file());
    assert!(dir.path().join("exports/brand.json").is_file());
}

#[test]
fn test_exported_json_file_imports_back() {
    let dir = TempDir::new().unwrap();
    let mut sink = FileSystemSink::new(dir.path());

    let mut source = TokenStore::new();
    source.add(TokenCategory::Colors, "brand", "#ff5500");
    let artifact = export_tokens(source.tokens(), "design-tokens", ExportFormat::Json, &mut sink).unwrap();

    let text = std::fs::read_to_string(dir.path().join("design-tokens.json")).unwrap();
    let mut target = TokenStore::empty();
    let summary = import_json(&mut target, &text).unwrap();

    assert_eq!(summary.categories, TokenCategory::ALL.to_vec());
    assert_eq!(target, source);
    assert_eq!(
        notice_for(&Ok(ExchangeOutcome::from(&artifact))).kind,
        NoticeKind::Success
    );
}

#[test]
fn test_figma_document_is_not_canonical_json() {
    // Figma leaves are objects, so the document cannot be imported as tokens.
    let store = TokenStore::new();
    let figma = ExportArtifact::render(store.tokens(), "design-tokens", ExportFormat::Figma).unwrap();
    assert!(from_json(&figma.content).is_err());

    let mut target = TokenStore::new();
    let result = import_json(&mut target, &figma.content).map(ExchangeOutcome::Imported);
    assert_eq!(notice_for(&result).kind, NoticeKind::Error);
    assert_eq!(target, store);
}

#[test]
fn test_sink_into_unwritable_location_fails_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let mut sink = FileSystemSink::new(&blocker);
    let store = TokenStore::new();
    let before = store.clone();
    let err = export_tokens(store.tokens(), "design-tokens", ExportFormat::Css, &mut sink).unwrap_err();

    assert!(err.to_string().contains("design-tokens.css"));
    assert_eq!(store, before);
}

#[test]
fn test_import_from_file_merges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, r#"{"spacing":{"3xl":"4rem"}}"#).unwrap();

    let mut store = TokenStore::new();
    let summary = import_json_file(&mut store, &path).unwrap();
    assert_eq!(summary.categories, vec![TokenCategory::Spacing]);
    assert_eq!(store.get(TokenCategory::Spacing, "3xl"), Some("4rem"));
    assert_eq!(store.get(TokenCategory::Spacing, "m"), Some("1rem"));
}
