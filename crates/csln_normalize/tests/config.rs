/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use csln_normalize::{Normalizer, NormalizeError, NormalizerConfig};
use std::fs;
use std::path::Path;

fn write_config(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml_file() {
    let path = write_config(
        "csln_normalize_test_config.yaml",
        "months:\n  juillet: 7\nsuffixes: [fils]\n",
    );
    let normalizer = Normalizer::from_config_path(&path).unwrap();
    assert_eq!(normalizer.vocabulary().month("Juillet"), Some(7));
    assert!(normalizer.vocabulary().is_suffix("fils"));
    fs::remove_file(path).ok();
}

#[test]
fn test_load_json_file() {
    let path = write_config(
        "csln_normalize_test_config.json",
        r#"{"months": {"juin": 6}, "elision-markers": ["et coll."]}"#,
    );
    let config = NormalizerConfig::from_path(&path).unwrap();
    assert_eq!(config.months.get("juin"), Some(&6));
    assert_eq!(config.elision_markers, vec!["et coll."]);
    fs::remove_file(path).ok();
}

#[test]
fn test_invalid_file_reports_path() {
    let path = write_config("csln_normalize_test_invalid.json", "{ not json");
    match NormalizerConfig::from_path(&path) {
        Err(NormalizeError::Parse { path: reported, .. }) => {
            assert!(reported.ends_with("csln_normalize_test_invalid.json"))
        }
        other => panic!("expected parse error, got {:?}", other),
    }
    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = NormalizerConfig::from_path(Path::new("/nonexistent/csln_normalize.yaml")).unwrap_err();
    assert!(matches!(err, NormalizeError::Io(_)));
}

#[test]
fn test_invalid_month_message() {
    let err = NormalizerConfig::from_yaml_str("months:\n  brumaire: 14\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "month token \"brumaire\" maps to 14, expected 1-12"
    );
}
