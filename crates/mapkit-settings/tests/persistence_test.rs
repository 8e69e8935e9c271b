use mapkit_settings::{ObjectType, Preferences, SettingsError};
use tempfile::tempdir;

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.toml");

    let mut prefs = Preferences::default();
    prefs.undo_limit = 25;
    prefs.add_object_type(ObjectType::new("Npc", "#336699")).unwrap();
    prefs.save_to_file(&path).unwrap();

    let loaded = Preferences::load_from_file(&path).unwrap();
    assert_eq!(loaded.undo_limit, 25);
    assert_eq!(loaded.object_type_names(), prefs.object_type_names());
    assert_eq!(loaded.dialog.decimals, prefs.dialog.decimals);
}

#[test]
fn test_json_missing_sections_use_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{ "undo_limit": 5 }"#).unwrap();

    let loaded = Preferences::load_from_file(&path).unwrap();
    assert_eq!(loaded.undo_limit, 5);
    assert_eq!(loaded.object_types, Preferences::default().object_types);
    assert_eq!(loaded.dialog.size.minimum, 0.0);
}

#[test]
fn test_invalid_file_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(
        &path,
        r##"{ "object_types": [ { "name": "Door", "color": "brown" } ] }"##,
    )
    .unwrap();

    let err = Preferences::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let err = Preferences::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::LoadError(_)));
}
