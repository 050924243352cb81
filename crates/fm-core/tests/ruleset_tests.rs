//! Ruleset loading and its fallbacks

use fm_core::{Pattern, load_ruleset};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
#[case("rules.json", r#"{"top_keys": ["title", "d*"], "bottom_keys": ["tags"]}"#)]
#[case("rules.toml", "top_keys = [\"title\", \"d*\"]\nbottom_keys = [\"tags\"]\n")]
#[case("rules.yaml", "top_keys:\n  - title\n  - d*\nbottom_keys:\n  - tags\n")]
fn test_loads_each_format(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();

    let load = load_ruleset(&path);

    assert_eq!(load.warning, None);
    assert_eq!(load.ruleset.top, vec![Pattern::new("title"), Pattern::new("d*")]);
    assert_eq!(load.ruleset.bottom, vec![Pattern::new("tags")]);
}

#[test]
fn test_missing_field_is_empty_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rules.json");
    fs::write(&path, r#"{"top_keys": ["title"]}"#).unwrap();

    let load = load_ruleset(&path);

    assert!(!load.is_degraded());
    assert!(load.ruleset.bottom.is_empty());
}

#[rstest]
#[case("rules.json", "{ not json")]
#[case("rules.json", r#"{"top_keys": "title"}"#)]
#[case("rules.json", r#"["title"]"#)]
#[case("rules.ini", "top_keys = title")]
fn test_malformed_config_degrades_to_empty(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();

    let load = load_ruleset(&path);

    assert!(load.ruleset.is_empty());
    assert!(load.is_degraded());
}
