// tokensmith-domain/tests/token_roundtrip_tests.rs

use pretty_assertions::assert_eq;
use rstest::rstest;
use tokensmith_core::types::color::{compose_rgba, contrast_class, parse_hex, parse_rgb_channels};
use tokensmith_core::types::ContrastClass;
use tokensmith_domain::tokens::codec::{ShadowValue, TimingFunction, TransitionProperty, TransitionValue};
use tokensmith_domain::tokens::exchange::import_json;
use tokensmith_domain::tokens::serializer::{from_json, to_css, to_json};
use tokensmith_domain::{ParseError, TokenCategory, TokenError, TokenSet, TokenStore};

fn store_with(entries: &[(TokenCategory, &str, &str)]) -> TokenStore {
    let mut store = TokenStore::empty();
    for (category, name, value) in entries {
        store.add(*category, *name, *value);
    }
    store
}

#[rstest]
#[case("#2563eb")]
#[case("#FFFFFF")]
#[case("#0a0B0c")]
#[case("#000000")]
fn test_hex_survives_parse_and_render(#[case] hex: &str) {
    let rgb = parse_hex(hex).unwrap();
    assert_eq!(rgb.to_hex(), hex.to_lowercase());

    let (channels, alpha) = parse_rgb_channels(&compose_rgba(rgb, 0.4)).unwrap();
    assert_eq!(channels, rgb);
    assert_eq!(alpha, Some(0.4));
}

#[test]
fn test_json_export_reimports_into_empty_store() {
    let original = TokenStore::new();
    let json = to_json(original.tokens()).unwrap();

    let mut restored = TokenStore::empty();
    restored.import_merge(from_json(&json).unwrap());
    assert_eq!(restored.tokens(), original.tokens());
}

#[test]
fn test_json_export_of_customized_store_reimports() {
    let mut original = TokenStore::new();
    original.add(TokenCategory::Shadows, "focus", "0px 0px 0px 3px rgba(37, 99, 235, 0.40)");
    original.remove(TokenCategory::Radius, "none");
    original.update(TokenCategory::FontFamilies, "primary", "\"Fancy \\\"Quoted\\\" Sans\", serif");

    let mut restored = TokenStore::with_tokens(TokenSet::empty());
    restored.import_merge(from_json(&to_json(original.tokens()).unwrap()).unwrap());
    assert_eq!(restored, original);
}

#[test]
fn test_shadow_from_editor_fields_reads_back() {
    let value = ShadowValue {
        x: -3.0,
        y: 8.5,
        blur: 16.0,
        spread: -2.0,
        color: "#1f2937".to_string(),
        opacity: 25,
    };
    let encoded = value.encode().unwrap();
    assert_eq!(encoded, "-3px 8.5px 16px -2px rgba(31, 41, 55, 0.25)");
    assert_eq!(ShadowValue::decode(&encoded).unwrap(), value);
}

#[test]
fn test_transition_from_editor_fields_reads_back() {
    let preset = TransitionValue {
        property: TransitionProperty::Opacity,
        duration_ms: 150.0,
        timing: TimingFunction::EaseIn,
    };
    let custom = TransitionValue {
        property: TransitionProperty::Custom("filter".to_string()),
        duration_ms: 400.0,
        timing: TimingFunction::Custom("cubic-bezier(0.4, 0, 0.2, 1)".to_string()),
    };
    for value in [preset, custom] {
        assert_eq!(TransitionValue::decode(&value.encode().unwrap()).unwrap(), value);
    }
}

#[test]
fn test_default_transitions_decode_as_presets() {
    let store = TokenStore::new();
    for value in store.category(TokenCategory::Transitions).values() {
        let decoded = TransitionValue::decode(value).unwrap();
        assert_eq!(decoded.property, TransitionProperty::All);
        assert_eq!(decoded.timing, TimingFunction::EaseInOut);
    }
}

#[test]
fn test_css_of_two_tokens_is_exact() {
    let store = store_with(&[
        (TokenCategory::Colors, "primary", "#2563eb"),
        (TokenCategory::Spacing, "m", "1rem"),
    ]);
    assert_eq!(
        to_css(store.tokens()),
        ":root {\n  --color-primary: #2563eb;\n  --spacing-m: 1rem;\n}"
    );
}

#[test]
fn test_import_changes_only_the_imported_key() {
    let mut store = TokenStore::new();
    let mut expected = store.tokens().clone();
    expected.colors.insert("primary".to_string(), "#000000".to_string());

    import_json(&mut store, r##"{"colors":{"primary":"#000000"}}"##).unwrap();
    assert_eq!(store.tokens(), &expected);
}

#[test]
fn test_contrast_extremes() {
    assert_eq!(contrast_class("#000000"), ContrastClass::Light);
    assert_eq!(contrast_class("#ffffff"), ContrastClass::Dark);
}

#[rstest]
#[case("")]
#[case("{")]
#[case("colors: { primary: #000 }")]
#[case(r##"{"colors": ["#000000"]}"##)]
#[case("null")]
fn test_malformed_import_leaves_store_unchanged(#[case] text: &str) {
    let mut store = TokenStore::new();
    let before = store.clone();

    let err = import_json(&mut store, text).unwrap_err();
    assert!(matches!(err, TokenError::Parse(ParseError::InvalidJson(_) | ParseError::Grammar { .. })));
    assert_eq!(store, before);
}
