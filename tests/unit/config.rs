//! Settings layering through files and environment.

use std::fs;

use vitrine::{Error, Settings, Tuning};

#[test]
fn test_explicit_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shop.toml");
    fs::write(
        &path,
        "[tuning]\nbroad_min_score = 0.4\nmax_suggestions = 5\n[session]\nquick_categories = 3\n",
    )
    .expect("write config");

    let settings = Settings::load(Some(path.as_path())).expect("load");
    assert_eq!(settings.tuning.broad_min_score, 0.4);
    assert_eq!(settings.tuning.max_suggestions, 5);
    assert_eq!(settings.tuning.category_accept, Tuning::default().category_accept);
    assert_eq!(settings.session.quick_categories, 3);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[tuning\ncategory_accept = ").expect("write config");

    assert!(matches!(Settings::load(Some(path.as_path())), Err(Error::Config(_))));
}

#[test]
fn test_wrong_type_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("typed.toml");
    fs::write(&path, "[session]\nbatch_size = \"many\"\n").expect("write config");

    let err = Settings::load(Some(path.as_path())).expect_err("string batch size");
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn test_zero_limits_rejected() {
    let tuning = Tuning {
        candidates_per_kind: 0,
        ..Tuning::default()
    };
    match tuning.validate() {
        Err(Error::InvalidSetting { key, .. }) => assert_eq!(key, "tuning.candidates_per_kind"),
        other => panic!("expected InvalidSetting, got {:?}", other),
    }
}
